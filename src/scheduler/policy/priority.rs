/*!
 * Priority Policy
 * Preemptive, smallest priority value wins, re-evaluated every tick
 */

use crate::core::errors::SimulationResult;
use crate::core::types::ProcessIndex;
use crate::process::ProcessState;
use crate::scheduler::simulation::Simulation;
use crate::scheduler::traits::SchedulingAlgorithm;
use crate::scheduler::types::SchedulingPolicy;

/// Preemptive priority scheduler with a quantum of one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority;

impl PreemptivePriority {
    pub fn new() -> Self {
        Self
    }

    /// Strictly smallest priority among eligible processes; an equal
    /// priority later in the list never displaces an earlier one
    fn select(simulation: &Simulation) -> Option<ProcessIndex> {
        let clock = simulation.clock();
        let mut selected: Option<ProcessIndex> = None;

        for (index, process) in simulation.processes().iter().enumerate() {
            if !process.is_eligible(clock) {
                continue;
            }
            match selected {
                Some(best) if simulation.process(best).priority() <= process.priority() => {}
                _ => selected = Some(index),
            }
        }

        selected
    }
}

impl SchedulingAlgorithm for PreemptivePriority {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Priority
    }

    fn run(&mut self, simulation: &mut Simulation) -> SimulationResult<()> {
        while !simulation.all_completed() {
            simulation.admit_arrivals()?;

            let Some(index) = Self::select(simulation) else {
                simulation.idle_tick();
                continue;
            };

            simulation.dispatch(index, self.policy().switch_reason())?;
            simulation.execute(index, 1)?;

            // Everything arrived by the new clock and unfinished waited
            // this tick, including processes arriving exactly now
            simulation.admit_arrivals()?;
            simulation.accrue_wait(index, 1, |p| p.state() == ProcessState::Ready);

            if simulation.process(index).remaining_time() == 0 {
                simulation.complete(index)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{build_process_set, ProcessDescriptor};

    fn run(specs: &[(i64, i64, i32)]) -> Simulation {
        let descriptors = specs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst, priority))| {
                ProcessDescriptor::new(i as u32 + 1, format!("P{}", i + 1), arrival, burst)
                    .with_priority(priority)
            })
            .collect();
        let mut sim = Simulation::new(build_process_set(descriptors).unwrap());
        PreemptivePriority::new().run(&mut sim).unwrap();
        sim
    }

    #[test]
    fn test_equal_priority_earliest_index_wins() {
        let sim = run(&[(0, 2, 2), (0, 2, 2)]);
        assert_eq!(sim.process(0).completion_time(), Some(2));
        assert_eq!(sim.process(1).completion_time(), Some(4));
        assert_eq!(sim.log().switch_count(), 2);
    }

    #[test]
    fn test_higher_priority_arrival_preempts() {
        let sim = run(&[(0, 4, 3), (1, 1, 1)]);

        assert_eq!(sim.process(1).completion_time(), Some(2));
        assert_eq!(sim.process(1).response_time(), Some(0));
        assert_eq!(sim.process(0).completion_time(), Some(5));
        assert_eq!(sim.process(0).wait_time(), 1);

        let reasons: Vec<&str> = sim.log().iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, vec!["PRIORITY"; 3]);
    }

    #[test]
    fn test_late_arrival_charged_for_arrival_tick() {
        // P2 becomes eligible at the new clock of the tick it arrives on
        let sim = run(&[(0, 2, 1), (1, 1, 5)]);
        assert_eq!(sim.process(1).completion_time(), Some(3));
        assert_eq!(sim.process(1).wait_time(), 2);
    }

    #[test]
    fn test_idle_before_first_arrival() {
        let sim = run(&[(2, 1, 1)]);
        assert_eq!(sim.clock(), 3);
        assert_eq!(sim.log().switch_count(), 1);
        assert_eq!(sim.log().events()[0].time, 2);
    }

    #[test]
    fn test_negative_priority_outranks_positive() {
        let sim = run(&[(0, 2, 300), (0, 2, -1)]);
        assert_eq!(sim.process(1).completion_time(), Some(2));
        assert_eq!(sim.process(0).completion_time(), Some(4));
    }
}
