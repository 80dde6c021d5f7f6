/*!
 * Scheduler Types
 * Policy selection, time quantum and context-switch reasons
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::Tick;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchedulingPolicy {
    /// Preemptive, fixed time quantum, FIFO ready queue
    #[default]
    RoundRobin,
    /// Non-preemptive, ordered by arrival
    Fcfs,
    /// Preemptive, smallest priority value wins, re-evaluated every tick
    Priority,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 3] = [Self::RoundRobin, Self::Fcfs, Self::Priority];

    /// Canonical configuration name
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Fcfs => "fcfs",
            Self::Priority => "priority",
        }
    }

    /// Short label used in reports
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RoundRobin => "RR",
            Self::Fcfs => "FCFS",
            Self::Priority => "PRIORITY",
        }
    }

    /// Reason tag recorded for every switch this policy performs
    #[inline]
    pub const fn switch_reason(&self) -> SwitchReason {
        match self {
            Self::RoundRobin => SwitchReason::TimeQuantum,
            Self::Fcfs => SwitchReason::Fcfs,
            Self::Priority => SwitchReason::Priority,
        }
    }

    /// Whether the quantum influences this policy
    #[inline]
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SimulationError;

    fn from_str(s: &str) -> SimulationResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "priority" | "prio" => Ok(Self::Priority),
            other => Err(SimulationError::InvalidPolicy(format!(
                "'{}' (valid: round_robin, fcfs, priority)",
                other
            ))),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round Robin time quantum in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum; zero is rejected
    pub fn new(ticks: Tick) -> SimulationResult<Self> {
        if ticks == 0 {
            return Err(SimulationError::InvalidQuantum(
                "quantum must be at least 1 tick".to_string(),
            ));
        }
        Ok(Self(ticks))
    }

    #[inline]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Cause tag attached to a context switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwitchReason {
    TimeQuantum,
    Fcfs,
    Priority,
}

impl SwitchReason {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TimeQuantum => "TIME_QUANTUM",
            Self::Fcfs => "FCFS",
            Self::Priority => "PRIORITY",
        }
    }
}

impl fmt::Display for SwitchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
