/*!
 * CPU Scheduling Simulator Library
 * Discrete-time scheduling engine, process feeds and report sinks
 */

pub mod config;
pub mod core;
pub mod export;
pub mod feed;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::types::*;
pub use config::SimulationConfig;
pub use export::{export_outcome, ComparisonReport, ExportConfig, ExportReport, RunReport};
pub use feed::{FileFeed, InteractiveFeed, ProcessFeed, SystemProcessFeed};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessDescriptor, ProcessState};
pub use scheduler::{
    compare, simulate, ContextSwitchEvent, ContextSwitchLog, SchedulingPolicy,
    SchedulingStatistics, SimulationOutcome, SwitchReason, TimeQuantum, Timeline,
};
