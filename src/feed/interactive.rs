/*!
 * Interactive Process Feed
 * Prompts for process records on any line-oriented input
 */

use super::ProcessFeed;
use crate::core::errors::{FeedError, FeedResult};
use crate::core::limits::USER_PID_BASE;
use crate::core::types::Priority;
use crate::process::{validate_descriptor, ProcessDescriptor};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Question/answer feed over a reader/writer pair (stdin/stdout in the CLI)
pub struct InteractiveFeed<R, W> {
    input: R,
    output: W,
    line: usize,
}

impl<R: BufRead, W: Write> InteractiveFeed<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: 0,
        }
    }

    fn prompt(&mut self, label: &str) -> FeedResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.line += 1;
        if self.input.read_line(&mut answer)? == 0 {
            return Err(FeedError::Parse {
                line: self.line,
                reason: "unexpected end of input".to_string(),
            });
        }
        Ok(answer.trim().to_string())
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str) -> FeedResult<T> {
        let answer = self.prompt(label)?;
        answer.parse().map_err(|_| FeedError::Parse {
            line: self.line,
            reason: format!("expected an integer, got '{}'", answer),
        })
    }
}

impl<R: BufRead, W: Write> ProcessFeed for InteractiveFeed<R, W> {
    fn acquire(&mut self, limit: usize) -> FeedResult<Vec<ProcessDescriptor>> {
        writeln!(self.output, "\n=== Add Custom Processes ===")?;
        let requested: usize = self.prompt_number("Enter number of processes: ")?;

        let count = requested.min(limit);
        if count < requested {
            warn!(requested, limit, "process count capped");
        }

        let mut descriptors = Vec::new();
        for i in 0..count {
            writeln!(self.output, "\nProcess {}:", i + 1)?;

            let name = self.prompt("Name: ")?;
            if name.is_empty() {
                return Err(FeedError::Parse {
                    line: self.line,
                    reason: "process name must not be empty".to_string(),
                });
            }
            let arrival: i64 = self.prompt_number("Arrival Time: ")?;
            let burst: i64 = self.prompt_number("Burst Time: ")?;
            let priority: Priority = self.prompt_number("Priority (1-5): ")?;

            let descriptor = ProcessDescriptor::new(USER_PID_BASE + i as u32, name, arrival, burst)
                .with_priority(priority);
            validate_descriptor(&descriptor)?;
            descriptors.push(descriptor);
        }

        Ok(descriptors)
    }
}
