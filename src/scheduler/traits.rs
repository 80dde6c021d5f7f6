/*!
 * Scheduler Traits
 * Interface every scheduling algorithm implements
 */

use super::simulation::Simulation;
use super::types::SchedulingPolicy;
use crate::core::errors::SimulationResult;

/// One scheduling algorithm driving a simulation run to completion
///
/// `run` is invoked once per run; on success every process is COMPLETED.
pub trait SchedulingAlgorithm {
    /// Policy this algorithm implements
    fn policy(&self) -> SchedulingPolicy;

    /// Drive `simulation` until every process has completed
    fn run(&mut self, simulation: &mut Simulation) -> SimulationResult<()>;
}
