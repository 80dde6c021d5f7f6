/*!
 * Round Robin Policy
 * Preemptive, fixed time quantum, FIFO ready queue
 */

use crate::core::errors::SimulationResult;
use crate::core::types::ProcessIndex;
use crate::process::ProcessState;
use crate::scheduler::simulation::Simulation;
use crate::scheduler::traits::SchedulingAlgorithm;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};
use std::collections::VecDeque;

/// Round Robin scheduler
///
/// Queue order is admission/re-enqueue order, so simultaneous arrivals
/// are served in process-list order.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    ready_queue: VecDeque<ProcessIndex>,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            ready_queue: VecDeque::new(),
        }
    }

    fn admit(&mut self, simulation: &mut Simulation) -> SimulationResult<()> {
        self.ready_queue.extend(simulation.admit_arrivals()?);
        Ok(())
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn run(&mut self, simulation: &mut Simulation) -> SimulationResult<()> {
        self.ready_queue.clear();

        while !simulation.all_completed() {
            self.admit(simulation)?;

            let Some(index) = self.ready_queue.pop_front() else {
                simulation.idle_tick();
                continue;
            };

            simulation.dispatch(index, self.policy().switch_reason())?;

            let slice = self
                .quantum
                .ticks()
                .min(simulation.process(index).remaining_time());

            // Tick by tick so that arrivals mid-slice join the queue promptly
            for _ in 0..slice {
                simulation.execute(index, 1)?;
                simulation.accrue_wait(index, 1, |p| p.state() == ProcessState::Ready);
                self.admit(simulation)?;
            }

            if simulation.process(index).remaining_time() == 0 {
                simulation.complete(index)?;
            } else {
                simulation.preempt(index)?;
                self.ready_queue.push_back(index);
            }
        }

        Ok(())
    }
}
