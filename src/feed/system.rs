/*!
 * Live Process Feed
 *
 * Enumerates running processes from procfs and pairs each with a
 * synthetic arrival time, burst and priority. All randomness of the
 * simulator lives here; the engine itself is deterministic.
 */

use super::ProcessFeed;
use crate::core::errors::{FeedError, FeedResult};
use crate::core::limits::{
    SYNTHETIC_ARRIVAL_STEP_MAX, SYNTHETIC_BURST_MAX, SYNTHETIC_BURST_MIN,
    SYNTHETIC_PRIORITY_MAX, SYNTHETIC_PRIORITY_MIN,
};
use crate::core::types::{Pid, Tick};
use crate::process::{validate_descriptor, ProcessDescriptor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_PROC_ROOT: &str = "/proc";

/// Feed backed by a procfs mount
pub struct SystemProcessFeed {
    proc_root: PathBuf,
    rng: StdRng,
}

impl SystemProcessFeed {
    /// Feed over `/proc` with an entropy-seeded generator
    pub fn new() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible synthetic values
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Enumerate a different procfs root
    pub fn with_proc_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.proc_root = root.into();
        self
    }

    /// Numeric entries of the proc root, ascending
    fn list_pids(&self) -> FeedResult<Vec<Pid>> {
        if !self.proc_root.is_dir() {
            return Err(FeedError::Unavailable(format!(
                "{} is not a directory",
                self.proc_root.display()
            )));
        }

        let mut pids: Vec<Pid> = fs::read_dir(&self.proc_root)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str()?.parse::<Pid>().ok())
            .filter(|&pid| pid > 0)
            .collect();
        pids.sort_unstable();
        Ok(pids)
    }

    fn read_name(root: &Path, pid: Pid) -> Option<String> {
        let comm = fs::read_to_string(root.join(pid.to_string()).join("comm")).ok()?;
        let name = comm.lines().next()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

impl Default for SystemProcessFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessFeed for SystemProcessFeed {
    fn acquire(&mut self, limit: usize) -> FeedResult<Vec<ProcessDescriptor>> {
        let mut descriptors = Vec::new();
        let mut arrival: Tick = 0;

        for pid in self.list_pids()? {
            if descriptors.len() >= limit {
                break;
            }

            let Some(name) = Self::read_name(&self.proc_root, pid) else {
                debug!(pid, "skipping process without a readable name");
                continue;
            };

            let burst = self.rng.gen_range(SYNTHETIC_BURST_MIN..=SYNTHETIC_BURST_MAX);
            let priority = self
                .rng
                .gen_range(SYNTHETIC_PRIORITY_MIN..=SYNTHETIC_PRIORITY_MAX);

            let descriptor =
                ProcessDescriptor::new(pid, name, arrival as i64, burst as i64).with_priority(priority);
            validate_descriptor(&descriptor)?;
            descriptors.push(descriptor);

            arrival += self.rng.gen_range(0..=SYNTHETIC_ARRIVAL_STEP_MAX);
        }

        info!(count = descriptors.len(), "fetched system processes");
        Ok(descriptors)
    }
}
