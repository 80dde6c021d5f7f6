/*!
 * Scheduling Statistics
 * Summary metrics derived once a run has completed
 */

use super::switch_log::ContextSwitchLog;
use crate::core::types::Tick;
use crate::process::Process;
use serde::Serialize;

/// Read-only summary of a completed run
///
/// Ratios that would divide by zero (no processes, or a final clock of
/// zero) are `None` rather than NaN/inf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulingStatistics {
    pub process_count: usize,
    pub context_switches: usize,
    pub total_time: Tick,
    pub total_burst_time: Tick,
    pub average_wait_time: Option<f64>,
    pub average_turnaround_time: Option<f64>,
    pub average_response_time: Option<f64>,
    /// Percentage of the run the CPU spent executing
    pub cpu_utilization: Option<f64>,
    /// Completed processes per tick
    pub throughput: Option<f64>,
}

impl SchedulingStatistics {
    pub fn compute(processes: &[Process], log: &ContextSwitchLog, final_clock: Tick) -> Self {
        let count = processes.len();
        let total_burst_time: Tick = processes.iter().map(Process::burst_time).sum();

        let mean = |value: fn(&Process) -> Tick| -> Option<f64> {
            if count == 0 {
                return None;
            }
            // Per-process values fit a Tick, their sum may not
            let sum: u128 = processes.iter().map(|p| u128::from(value(p))).sum();
            Some(sum as f64 / count as f64)
        };

        let per_tick = |value: f64| -> Option<f64> {
            if final_clock == 0 {
                None
            } else {
                Some(value / final_clock as f64)
            }
        };

        Self {
            process_count: count,
            context_switches: log.switch_count(),
            total_time: final_clock,
            total_burst_time,
            average_wait_time: mean(Process::wait_time),
            average_turnaround_time: mean(|p| p.turnaround_time().unwrap_or(0)),
            average_response_time: mean(|p| p.response_time().unwrap_or(0)),
            cpu_utilization: per_tick(total_burst_time as f64).map(|ratio| ratio * 100.0),
            throughput: per_tick(count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{build_process_set, ProcessDescriptor};

    #[test]
    fn test_empty_run_is_undefined() {
        let stats = SchedulingStatistics::compute(&[], &ContextSwitchLog::new(), 0);
        assert_eq!(stats.process_count, 0);
        assert_eq!(stats.average_wait_time, None);
        assert_eq!(stats.average_turnaround_time, None);
        assert_eq!(stats.average_response_time, None);
        assert_eq!(stats.cpu_utilization, None);
        assert_eq!(stats.throughput, None);
    }

    #[test]
    fn test_utilization_and_throughput() {
        let processes = build_process_set(vec![
            ProcessDescriptor::new(1, "a", 0, 3),
            ProcessDescriptor::new(2, "b", 0, 1),
        ])
        .unwrap();

        let stats = SchedulingStatistics::compute(&processes, &ContextSwitchLog::new(), 8);
        assert_eq!(stats.total_burst_time, 4);
        assert_eq!(stats.cpu_utilization, Some(50.0));
        assert_eq!(stats.throughput, Some(0.25));
        assert_eq!(stats.average_wait_time, Some(0.0));
    }
}
