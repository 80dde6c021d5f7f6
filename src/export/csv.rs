/*!
 * Delimited Tables
 * Process table and context-switch log writers, plus the record splitter
 * the file feed uses to read them back
 */

use crate::core::limits::{IDLE_NAME, IDLE_PID};
use crate::process::Process;
use crate::scheduler::{ContextSwitchEvent, ContextSwitchLog, ProcessRef};
use std::borrow::Cow;
use std::io::{self, Write};

pub const PROCESS_TABLE_HEADER: &str = "PID,Process Name,Arrival Time,Burst Time,Completion Time,Turnaround Time,Wait Time,Response Time,Priority,State";

pub const SWITCH_LOG_HEADER: &str = "Time,From PID,From Process,To PID,To Process,Reason";

const DELIMITER: char = ',';

/// Quote a field only when it would otherwise break the row
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Split one delimited record, honouring double-quoted fields
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' if field.is_empty() => quoted = true,
            c if c == DELIMITER && !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// One row per process in engine order (not re-sorted)
pub fn write_process_table<W: Write>(mut out: W, processes: &[Process]) -> io::Result<()> {
    writeln!(out, "{}", PROCESS_TABLE_HEADER)?;

    for p in processes {
        let response = p.response_time().map_or(-1, |t| t as i64);
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            p.pid(),
            escape_field(p.name()),
            p.arrival_time(),
            p.burst_time(),
            p.completion_time().unwrap_or(0),
            p.turnaround_time().unwrap_or(0),
            p.wait_time(),
            response,
            p.priority(),
            p.state()
        )?;
    }

    out.flush()
}

fn endpoint(side: Option<&ProcessRef>) -> (i64, Cow<'_, str>) {
    match side {
        Some(p) => (p.pid as i64, escape_field(&p.name)),
        None => (IDLE_PID, Cow::Borrowed(IDLE_NAME)),
    }
}

fn write_switch_row<W: Write>(out: &mut W, event: &ContextSwitchEvent) -> io::Result<()> {
    let (from_pid, from_name) = endpoint(event.from.as_ref());
    let (to_pid, to_name) = endpoint(event.to.as_ref());
    writeln!(
        out,
        "{},{},{},{},{},{}",
        event.time, from_pid, from_name, to_pid, to_name, event.reason
    )
}

/// One row per switch in chronological order
pub fn write_switch_log<W: Write>(mut out: W, log: &ContextSwitchLog) -> io::Result<()> {
    writeln!(out, "{}", SWITCH_LOG_HEADER)?;
    for event in log {
        write_switch_row(&mut out, event)?;
    }
    out.flush()
}
