/*!
 * Process Types
 * Process descriptors, simulation records and lifecycle states
 */

use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Pid, Priority, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process lifecycle state
///
/// Strictly ordered: `NEW -> READY -> RUNNING -> READY | COMPLETED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// Created, arrival time not reached yet
    New,
    /// Arrived and waiting for the CPU
    Ready,
    /// Occupying the CPU
    Running,
    /// Burst fully consumed
    Completed,
}

impl ProcessState {
    /// Name used in exported tables
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// Process descriptor as produced by an external feed
///
/// Times are signed so that malformed input survives parsing and is
/// rejected by validation instead of wrapping around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub name: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

impl ProcessDescriptor {
    pub fn new(pid: Pid, name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            name: name.into(),
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// One simulated workload unit
///
/// Identity and scheduling parameters are fixed at creation. The
/// simulation state only changes through the lifecycle mutators, which
/// are reserved to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub(super) pid: Pid,
    pub(super) name: String,
    pub(super) arrival_time: Tick,
    pub(super) burst_time: Tick,
    pub(super) priority: Priority,
    pub(super) remaining_time: Tick,
    pub(super) wait_time: Tick,
    pub(super) response_time: Option<Tick>,
    pub(super) turnaround_time: Option<Tick>,
    pub(super) completion_time: Option<Tick>,
    pub(super) state: ProcessState,
}

impl Process {
    #[inline]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline]
    pub fn wait_time(&self) -> Tick {
        self.wait_time
    }

    /// Ticks from arrival to first dispatch, `None` until dispatched
    #[inline]
    pub fn response_time(&self) -> Option<Tick> {
        self.response_time
    }

    #[inline]
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.turnaround_time
    }

    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    /// Arrived by `clock` and still has work left
    #[inline]
    pub fn is_eligible(&self, clock: Tick) -> bool {
        self.arrival_time <= clock && self.remaining_time > 0
    }
}
