/*!
 * File Process Feed
 *
 * Reads descriptors from a delimited table. Columns are located by
 * header name, so an exported process table is a valid input.
 */

use super::ProcessFeed;
use crate::core::errors::{FeedError, FeedResult};
use crate::core::limits::{DEFAULT_PRIORITY, USER_PID_BASE};
use crate::export::csv::split_record;
use crate::process::{validate_descriptor, ProcessDescriptor};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

const COL_PID: &str = "PID";
const COL_NAME: &str = "Process Name";
const COL_ARRIVAL: &str = "Arrival Time";
const COL_BURST: &str = "Burst Time";
const COL_PRIORITY: &str = "Priority";

/// Feed over a delimited file on disk
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse descriptors from any buffered reader
    pub fn parse<R: BufRead>(reader: R, limit: usize) -> FeedResult<Vec<ProcessDescriptor>> {
        let mut lines = reader.lines().enumerate();

        let columns = loop {
            match lines.next() {
                Some((index, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break Columns::from_header(&line, index + 1)?;
                    }
                }
                None => return Ok(Vec::new()),
            }
        };

        let mut descriptors = Vec::new();
        for (index, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if descriptors.len() >= limit {
                warn!(limit, "process file truncated at limit");
                break;
            }

            let descriptor = columns.descriptor(&split_record(&line), index + 1, descriptors.len())?;
            validate_descriptor(&descriptor)?;
            descriptors.push(descriptor);
        }

        Ok(descriptors)
    }
}

impl ProcessFeed for FileFeed {
    fn acquire(&mut self, limit: usize) -> FeedResult<Vec<ProcessDescriptor>> {
        let file = File::open(&self.path)?;
        let descriptors = Self::parse(BufReader::new(file), limit)?;
        info!(path = %self.path.display(), count = descriptors.len(), "loaded processes");
        Ok(descriptors)
    }
}

/// Column positions resolved from the header row
struct Columns {
    pid: Option<usize>,
    name: usize,
    arrival: usize,
    burst: usize,
    priority: Option<usize>,
}

impl Columns {
    fn from_header(header: &str, line: usize) -> FeedResult<Self> {
        let names: Vec<String> = split_record(header)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        let find = |wanted: &str| names.iter().position(|h| h.eq_ignore_ascii_case(wanted));
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| FeedError::Parse {
                line,
                reason: format!("missing '{}' column", wanted),
            })
        };

        Ok(Self {
            pid: find(COL_PID),
            name: require(COL_NAME)?,
            arrival: require(COL_ARRIVAL)?,
            burst: require(COL_BURST)?,
            priority: find(COL_PRIORITY),
        })
    }

    fn descriptor(&self, fields: &[String], line: usize, ordinal: usize) -> FeedResult<ProcessDescriptor> {
        let field = |index: usize| field_at(fields, index, line);

        let pid = match self.pid {
            Some(index) => number(field(index)?, line)?,
            None => USER_PID_BASE + ordinal as u32,
        };
        let priority = match self.priority {
            Some(index) => number(field(index)?, line)?,
            None => DEFAULT_PRIORITY,
        };

        Ok(ProcessDescriptor::new(
            pid,
            field(self.name)?,
            number(field(self.arrival)?, line)?,
            number(field(self.burst)?, line)?,
        )
        .with_priority(priority))
    }
}

fn field_at(fields: &[String], index: usize, line: usize) -> FeedResult<&str> {
    fields
        .get(index)
        .map(|f| f.trim())
        .ok_or_else(|| FeedError::Parse {
            line,
            reason: format!("expected at least {} fields, got {}", index + 1, fields.len()),
        })
}

fn number<T: FromStr>(text: &str, line: usize) -> FeedResult<T> {
    text.parse().map_err(|_| FeedError::Parse {
        line,
        reason: format!("expected an integer, got '{}'", text),
    })
}
