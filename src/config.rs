/*!
 * Run Configuration
 * Policy, quantum, feed bound and export destinations, layered
 * defaults -> environment -> command line
 */

use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::limits::DEFAULT_PROCESS_LIMIT;
use crate::export::ExportConfig;
use crate::scheduler::{SchedulingPolicy, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENV_POLICY: &str = "SCHED_POLICY";
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";
pub const ENV_PROCESS_LIMIT: &str = "SCHED_PROCESS_LIMIT";
pub const ENV_SEED: &str = "SCHED_SEED";
pub const ENV_OUTPUT_DIR: &str = "SCHED_OUTPUT_DIR";

/// Configuration of one simulator invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    pub policy: SchedulingPolicy,
    pub quantum: TimeQuantum,
    /// Upper bound on processes pulled from a live feed
    pub process_limit: usize,
    /// Seed for the synthetic values of the live feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub exports: ExportConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            policy: SchedulingPolicy::default(),
            quantum: TimeQuantum::default(),
            process_limit: DEFAULT_PROCESS_LIMIT,
            seed: None,
            exports: ExportConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by the `SCHED_*` environment variables
    pub fn from_env() -> SimulationResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` yields
    pub fn from_lookup<F>(lookup: F) -> SimulationResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(ENV_POLICY) {
            config.policy = policy.parse()?;
        }
        if let Some(quantum) = lookup(ENV_QUANTUM) {
            config.quantum = TimeQuantum::new(parse_var(ENV_QUANTUM, &quantum)?)?;
        }
        if let Some(limit) = lookup(ENV_PROCESS_LIMIT) {
            config.process_limit = parse_var(ENV_PROCESS_LIMIT, &limit)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = Some(parse_var(ENV_SEED, &seed)?);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            config.exports = ExportConfig::in_dir(dir);
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> SimulationResult<T> {
    value.trim().parse().map_err(|_| {
        SimulationError::InvalidConfig(format!("{}='{}' is not a valid number", key, value))
    })
}
