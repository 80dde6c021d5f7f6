/*!
 * Simulator Limits and Constants
 *
 * Defaults shared by the engine, the process feeds and the exporters.
 */

use super::types::{Priority, Tick};

// =============================================================================
// SCHEDULING DEFAULTS
// =============================================================================

/// Priority assigned when a descriptor does not specify one
pub const DEFAULT_PRIORITY: Priority = 3;

/// Round Robin time quantum when none is configured
pub const DEFAULT_QUANTUM: Tick = 2;

/// Number of processes pulled from a live feed when none is configured
pub const DEFAULT_PROCESS_LIMIT: usize = 8;

/// First id handed out to interactively entered or file-loaded processes
pub const USER_PID_BASE: u32 = 1000;

// =============================================================================
// SYNTHETIC WORKLOAD (live process feed)
// =============================================================================

/// Inclusive burst range for processes sourced from the OS
pub const SYNTHETIC_BURST_MIN: Tick = 3;
pub const SYNTHETIC_BURST_MAX: Tick = 12;

/// Inclusive priority range for processes sourced from the OS
pub const SYNTHETIC_PRIORITY_MIN: Priority = 1;
pub const SYNTHETIC_PRIORITY_MAX: Priority = 5;

/// Maximum arrival gap between consecutive OS processes
pub const SYNTHETIC_ARRIVAL_STEP_MAX: Tick = 2;

// =============================================================================
// EXPORT
// =============================================================================

/// Default destination of the process table
pub const DEFAULT_PROCESS_TABLE_FILE: &str = "context_switch_log.csv";

/// Default destination of the context-switch log
pub const DEFAULT_SWITCH_LOG_FILE: &str = "context_switches.csv";

/// Width of the bar area of the text Gantt chart; longer runs are scaled down
pub const GANTT_COLUMNS: usize = 60;

/// PID rendered for an absent (idle) predecessor in the switch log
pub const IDLE_PID: i64 = -1;

/// Name rendered for an absent (idle) predecessor in the switch log
pub const IDLE_NAME: &str = "IDLE";
