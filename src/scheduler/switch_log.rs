/*!
 * Context-Switch Recorder
 * Append-only audit trail of dispatch events
 */

use super::types::SwitchReason;
use crate::core::types::{Pid, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Identity of a process as captured at switch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRef {
    pub pid: Pid,
    pub name: String,
}

impl From<&Process> for ProcessRef {
    fn from(process: &Process) -> Self {
        Self {
            pid: process.pid(),
            name: process.name().to_string(),
        }
    }
}

/// Immutable record of one change of the running process
///
/// `from: None` means the CPU was idle (or the run had not started).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSwitchEvent {
    pub time: Tick,
    pub from: Option<ProcessRef>,
    pub to: Option<ProcessRef>,
    pub reason: SwitchReason,
}

/// Switch log owned by a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContextSwitchLog {
    events: Vec<ContextSwitchEvent>,
}

impl ContextSwitchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event; never fails
    pub fn record(
        &mut self,
        time: Tick,
        from: Option<&Process>,
        to: Option<&Process>,
        reason: SwitchReason,
    ) {
        let event = ContextSwitchEvent {
            time,
            from: from.map(ProcessRef::from),
            to: to.map(ProcessRef::from),
            reason,
        };

        info!(
            time,
            from = event.from.as_ref().map_or("IDLE", |p| p.name.as_str()),
            to = event.to.as_ref().map_or("IDLE", |p| p.name.as_str()),
            reason = %reason,
            "context switch"
        );

        debug_assert!(self.events.last().map_or(true, |last| last.time <= time));
        self.events.push(event);
    }

    /// Total switches recorded so far
    #[inline]
    pub fn switch_count(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextSwitchEvent> {
        self.events.iter()
    }

    pub fn events(&self) -> &[ContextSwitchEvent] {
        &self.events
    }
}

impl<'a> IntoIterator for &'a ContextSwitchLog {
    type Item = &'a ContextSwitchEvent;
    type IntoIter = std::slice::Iter<'a, ContextSwitchEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
