/*!
 * Process Lifecycle
 *
 * Central transition table for `ProcessState` plus the monotone mutators
 * the scheduling policies drive. Nothing outside the crate can touch the
 * simulation state of a process.
 */

use super::types::{Process, ProcessState};
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::Tick;

impl ProcessState {
    /// Whether `self -> next` is an edge of the lifecycle graph
    pub const fn can_transition_to(&self, next: ProcessState) -> bool {
        matches!(
            (self, next),
            (ProcessState::New, ProcessState::Ready)
                | (ProcessState::Ready, ProcessState::Running)
                | (ProcessState::Running, ProcessState::Ready)
                | (ProcessState::Running, ProcessState::Completed)
        )
    }
}

impl Process {
    fn transition(&mut self, next: ProcessState) -> SimulationResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(SimulationError::InvalidStateTransition {
                pid: self.pid,
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    /// NEW -> READY once the clock reaches the arrival time
    pub(crate) fn admit(&mut self) -> SimulationResult<()> {
        self.transition(ProcessState::Ready)
    }

    /// READY -> RUNNING; fixes the response time on first dispatch
    pub(crate) fn dispatch(&mut self, clock: Tick) -> SimulationResult<()> {
        self.transition(ProcessState::Running)?;
        if self.response_time.is_none() {
            self.response_time = Some(clock.saturating_sub(self.arrival_time));
        }
        Ok(())
    }

    /// RUNNING -> READY
    pub(crate) fn preempt(&mut self) -> SimulationResult<()> {
        self.transition(ProcessState::Ready)
    }

    /// Consume `ticks` of CPU; only legal while RUNNING
    pub(crate) fn execute(&mut self, ticks: Tick) -> SimulationResult<()> {
        if self.state != ProcessState::Running {
            return Err(SimulationError::InvalidStateTransition {
                pid: self.pid,
                from: self.state,
                to: ProcessState::Running,
            });
        }
        debug_assert!(ticks <= self.remaining_time);
        self.remaining_time = self.remaining_time.saturating_sub(ticks);
        Ok(())
    }

    /// RUNNING -> COMPLETED; sets completion and turnaround exactly once
    pub(crate) fn complete(&mut self, clock: Tick) -> SimulationResult<()> {
        if self.remaining_time != 0 {
            return Err(SimulationError::InvalidStateTransition {
                pid: self.pid,
                from: self.state,
                to: ProcessState::Completed,
            });
        }
        self.transition(ProcessState::Completed)?;
        self.completion_time = Some(clock);
        self.turnaround_time = Some(clock.saturating_sub(self.arrival_time));
        Ok(())
    }

    /// Incremental wait accounting (preemptive policies)
    #[inline]
    pub(crate) fn accrue_wait(&mut self, ticks: Tick) {
        self.wait_time += ticks;
    }

    /// Single wait assignment (non-preemptive policies)
    #[inline]
    pub(crate) fn assign_wait(&mut self, ticks: Tick) {
        self.wait_time = ticks;
    }
}
