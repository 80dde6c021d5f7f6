/*!
 * Scheduler Module
 * Discrete-time simulation engine: policies, switch log, timeline, statistics
 */

pub mod policy;
pub mod simulation;
pub mod stats;
pub mod switch_log;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use policy::{algorithm_for, FirstComeFirstServed, PreemptivePriority, RoundRobin};
pub use simulation::Simulation;
pub use stats::SchedulingStatistics;
pub use switch_log::{ContextSwitchEvent, ContextSwitchLog, ProcessRef};
pub use timeline::{ExecutionSlice, Timeline};
pub use traits::SchedulingAlgorithm;
pub use types::{SchedulingPolicy, SwitchReason, TimeQuantum};

use crate::core::errors::SimulationResult;
use crate::core::types::Tick;
use crate::process::{build_process_set, Process, ProcessDescriptor};
use serde::Serialize;
use tracing::{info, info_span};

/// Everything a completed run produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationOutcome {
    pub policy: SchedulingPolicy,
    pub quantum: TimeQuantum,
    pub processes: Vec<Process>,
    pub switches: ContextSwitchLog,
    pub timeline: Timeline,
    pub final_clock: Tick,
    pub statistics: SchedulingStatistics,
}

/// Validate `descriptors`, run `policy` over them to completion and
/// derive the statistics
///
/// The engine is a pure function of its inputs: no randomness, no I/O.
pub fn simulate(
    descriptors: Vec<ProcessDescriptor>,
    policy: SchedulingPolicy,
    quantum: TimeQuantum,
) -> SimulationResult<SimulationOutcome> {
    let processes = build_process_set(descriptors)?;

    let span = info_span!("simulation", policy = %policy, quantum = quantum.ticks());
    let _entered = span.enter();

    info!(processes = processes.len(), "starting {} scheduling", policy.label());

    let mut simulation = Simulation::new(processes);
    algorithm_for(policy, quantum).run(&mut simulation)?;

    let (processes, switches, timeline, final_clock) = simulation.into_parts();
    let statistics = SchedulingStatistics::compute(&processes, &switches, final_clock);

    info!(
        final_clock,
        context_switches = switches.switch_count(),
        "scheduling completed"
    );

    Ok(SimulationOutcome {
        policy,
        quantum,
        processes,
        switches,
        timeline,
        final_clock,
        statistics,
    })
}

/// Run every policy over the same input
pub fn compare(
    descriptors: &[ProcessDescriptor],
    quantum: TimeQuantum,
) -> SimulationResult<Vec<SimulationOutcome>> {
    SchedulingPolicy::ALL
        .iter()
        .map(|&policy| simulate(descriptors.to_vec(), policy, quantum))
        .collect()
}
