/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use crate::process::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Engine result type
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Process feed result type
pub type FeedResult<T> = Result<T, FeedError>;

/// Export result type
pub type ExportResult<T> = Result<T, ExportError>;

/// Engine errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid process descriptor for pid {pid}: {reason}")]
    #[diagnostic(
        code(simulation::invalid_descriptor),
        help("Burst time must be positive and arrival time must not be negative.")
    )]
    InvalidProcessDescriptor { pid: Pid, reason: String },

    #[error("Invalid state transition for pid {pid}: {from} -> {to}")]
    #[diagnostic(
        code(simulation::invalid_transition),
        help("Processes move NEW -> READY -> RUNNING -> READY|COMPLETED and never regress.")
    )]
    InvalidStateTransition {
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(simulation::invalid_policy),
        help("Use rr, fcfs, or priority.")
    )]
    InvalidPolicy(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(simulation::invalid_quantum),
        help("The Round Robin quantum must be a positive number of ticks.")
    )]
    InvalidQuantum(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(simulation::invalid_config),
        help("Check the SCHED_* environment variables and command line flags.")
    )]
    InvalidConfig(String),
}

/// Process feed errors
#[derive(Error, Debug, Diagnostic)]
pub enum FeedError {
    #[error("Failed to read process feed: {0}")]
    #[diagnostic(code(feed::io))]
    Io(#[from] std::io::Error),

    #[error("Malformed input on line {line}: {reason}")]
    #[diagnostic(
        code(feed::parse),
        help("Numeric fields must be plain integers.")
    )]
    Parse { line: usize, reason: String },

    #[error("Process source unavailable: {0}")]
    #[diagnostic(
        code(feed::unavailable),
        help("Live enumeration needs a procfs mount. Enter processes manually or load a file.")
    )]
    Unavailable(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Descriptor(#[from] SimulationError),
}

/// Export errors
#[derive(Error, Debug, Diagnostic)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    #[diagnostic(
        code(export::io),
        help("Check that the destination directory exists and is writable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize run summary: {0}")]
    #[diagnostic(code(export::json))]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
