/*!
 * First-Come-First-Served Policy
 * Non-preemptive, processes run to completion in arrival order
 */

use crate::core::errors::SimulationResult;
use crate::scheduler::simulation::Simulation;
use crate::scheduler::traits::SchedulingAlgorithm;
use crate::scheduler::types::SchedulingPolicy;

/// FCFS scheduler
///
/// Reorders the run's process set by arrival time (stable, so ties keep
/// their input order); that order is the one exported afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstComeFirstServed;

impl FirstComeFirstServed {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingAlgorithm for FirstComeFirstServed {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn run(&mut self, simulation: &mut Simulation) -> SimulationResult<()> {
        simulation.sort_by_arrival();

        for index in 0..simulation.len() {
            let arrival = simulation.process(index).arrival_time();

            // Idle gaps are closed by jumping the clock
            simulation.advance_to(arrival);
            simulation.admit_arrivals()?;

            simulation.dispatch(index, self.policy().switch_reason())?;

            // Nothing preempts it, so waiting is known up front
            let waited = simulation.clock() - arrival;
            simulation.assign_wait(index, waited);

            let burst = simulation.process(index).burst_time();
            simulation.execute(index, burst)?;
            simulation.complete(index)?;
        }

        Ok(())
    }
}
