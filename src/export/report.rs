/*!
 * Console Report
 * Human-readable rendering of a completed run
 */

use crate::scheduler::{SchedulingStatistics, SimulationOutcome};
use std::fmt;

const RULE: &str = "========================================";

fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| format!("{:.2}", v))
}

/// Statistics block of one run
pub struct StatisticsReport<'a>(pub &'a SchedulingStatistics);

impl fmt::Display for StatisticsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Total Processes: {}", s.process_count)?;
        writeln!(f, "Context Switches: {}", s.context_switches)?;
        writeln!(f, "Total Time: {} units", s.total_time)?;
        writeln!(f, "CPU Utilization: {}%", fixed(s.cpu_utilization))?;
        writeln!(f, "Average Wait Time: {} units", fixed(s.average_wait_time))?;
        writeln!(
            f,
            "Average Turnaround Time: {} units",
            fixed(s.average_turnaround_time)
        )?;
        writeln!(
            f,
            "Average Response Time: {} units",
            fixed(s.average_response_time)
        )?;
        writeln!(f, "Throughput: {} processes/unit", fixed(s.throughput))
    }
}

/// Full report: switch log, Gantt chart and statistics
pub struct RunReport<'a> {
    outcome: &'a SimulationOutcome,
}

impl<'a> RunReport<'a> {
    pub fn new(outcome: &'a SimulationOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;

        writeln!(f, "{}", RULE)?;
        writeln!(f, "   {} Scheduling", outcome.policy.label())?;
        if outcome.policy.uses_quantum() {
            writeln!(f, "   Time Quantum: {}", outcome.quantum)?;
        }
        writeln!(f, "{}", RULE)?;

        for event in &outcome.switches {
            writeln!(
                f,
                "[Time {}] Context Switch: {} -> {} ({})",
                event.time,
                event.from.as_ref().map_or("IDLE", |p| p.name.as_str()),
                event.to.as_ref().map_or("IDLE", |p| p.name.as_str()),
                event.reason
            )?;
        }

        writeln!(f, "\nExecution Timeline:")?;
        write!(f, "{}", outcome.timeline.render_gantt())?;

        writeln!(f, "\n{}", RULE)?;
        writeln!(f, "      Scheduling Statistics")?;
        writeln!(f, "{}", RULE)?;
        write!(f, "{}", StatisticsReport(&outcome.statistics))?;
        writeln!(f, "{}", RULE)
    }
}

/// Side-by-side comparison of several runs over the same input
pub struct ComparisonReport<'a>(pub &'a [SimulationOutcome]);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>8} {:>10} {:>10} {:>10} {:>8} {:>12}",
            "Policy", "Switches", "Avg Wait", "Avg TAT", "Avg Resp", "CPU %", "Throughput"
        )?;
        for outcome in self.0 {
            let s = &outcome.statistics;
            writeln!(
                f,
                "{:<10} {:>8} {:>10} {:>10} {:>10} {:>8} {:>12}",
                outcome.policy.label(),
                s.context_switches,
                fixed(s.average_wait_time),
                fixed(s.average_turnaround_time),
                fixed(s.average_response_time),
                fixed(s.cpu_utilization),
                fixed(s.throughput)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;
    use crate::scheduler::{compare, simulate, SchedulingPolicy, TimeQuantum};

    #[test]
    fn test_undefined_statistics_are_labelled() {
        let outcome = simulate(vec![], SchedulingPolicy::Fcfs, TimeQuantum::default()).unwrap();
        let text = StatisticsReport(&outcome.statistics).to_string();
        assert!(text.contains("CPU Utilization: undefined%"));
        assert!(text.contains("Throughput: undefined processes/unit"));
    }

    #[test]
    fn test_run_report_sections() {
        let outcome = simulate(
            vec![
                ProcessDescriptor::new(1, "a", 0, 4),
                ProcessDescriptor::new(2, "b", 0, 4),
            ],
            SchedulingPolicy::RoundRobin,
            TimeQuantum::new(2).unwrap(),
        )
        .unwrap();

        let text = RunReport::new(&outcome).to_string();
        assert!(text.contains("RR Scheduling"));
        assert!(text.contains("Time Quantum: 2"));
        assert!(text.contains("[Time 0] Context Switch: IDLE -> a (TIME_QUANTUM)"));
        assert!(text.contains("[Time 2] Context Switch: a -> b (TIME_QUANTUM)"));
        assert!(text.contains("CPU Utilization: 100.00%"));
        assert!(text.contains("Average Wait Time: 3.00 units"));
    }

    #[test]
    fn test_comparison_has_row_per_policy() {
        let outcomes = compare(
            &[ProcessDescriptor::new(1, "a", 0, 2)],
            TimeQuantum::default(),
        )
        .unwrap();
        let text = ComparisonReport(&outcomes).to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("PRIORITY"));
    }
}
