/*!
 * Output Sinks
 * Delimited tables, JSON summary and console report for a completed run
 */

pub mod csv;
pub mod report;
pub mod summary;

pub use self::csv::{write_process_table, write_switch_log, PROCESS_TABLE_HEADER, SWITCH_LOG_HEADER};
pub use report::{ComparisonReport, RunReport, StatisticsReport};
pub use summary::{summary_json, write_summary};

use crate::core::errors::{ExportError, ExportResult};
use crate::core::limits::{DEFAULT_PROCESS_TABLE_FILE, DEFAULT_SWITCH_LOG_FILE};
use crate::scheduler::SimulationOutcome;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Export destinations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExportConfig {
    pub process_table: PathBuf,
    pub switch_log: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<PathBuf>,
}

impl ExportConfig {
    /// Default file names placed under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            process_table: dir.join(DEFAULT_PROCESS_TABLE_FILE),
            switch_log: dir.join(DEFAULT_SWITCH_LOG_FILE),
            summary: None,
        }
    }

    pub fn with_summary(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary = Some(path.into());
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            process_table: PathBuf::from(DEFAULT_PROCESS_TABLE_FILE),
            switch_log: PathBuf::from(DEFAULT_SWITCH_LOG_FILE),
            summary: None,
        }
    }
}

/// Per-file outcome; one failed file never aborts the others
#[derive(Debug)]
pub struct ExportReport {
    pub process_table: ExportResult<PathBuf>,
    pub switch_log: ExportResult<PathBuf>,
    pub summary: Option<ExportResult<PathBuf>>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.process_table.is_ok()
            && self.switch_log.is_ok()
            && self.summary.as_ref().map_or(true, |r| r.is_ok())
    }

    /// Errors of the files that could not be written
    pub fn failures(&self) -> Vec<&ExportError> {
        [
            self.process_table.as_ref().err(),
            self.switch_log.as_ref().err(),
            self.summary.as_ref().and_then(|r| r.as_ref().err()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn write_file<F>(path: &Path, write: F) -> ExportResult<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> ExportResult<()>,
{
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(path.to_path_buf())
}

fn logged(result: ExportResult<PathBuf>, path: &Path, what: &str) -> ExportResult<PathBuf> {
    match &result {
        Ok(_) => info!(path = %path.display(), "{} saved", what),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to save {}", what),
    }
    result
}

/// Write every configured sink for `outcome`
pub fn export_outcome(outcome: &SimulationOutcome, config: &ExportConfig) -> ExportReport {
    let process_table = logged(
        write_file(&config.process_table, |out| {
            write_process_table(out, &outcome.processes)
                .map_err(|e| ExportError::io(&config.process_table, e))
        }),
        &config.process_table,
        "process table",
    );

    let switch_log = logged(
        write_file(&config.switch_log, |out| {
            write_switch_log(out, &outcome.switches)
                .map_err(|e| ExportError::io(&config.switch_log, e))
        }),
        &config.switch_log,
        "context switch log",
    );

    let summary = config.summary.as_ref().map(|path| {
        logged(
            write_file(path, |out| write_summary(out, outcome)),
            path,
            "run summary",
        )
    });

    ExportReport {
        process_table,
        switch_log,
        summary,
    }
}
