/*!
 * Simulation State
 *
 * State of one run: the owned process set, the discrete clock, the
 * currently dispatched process, the switch log and the execution
 * timeline. Holds the bookkeeping every policy shares (admission, idle
 * ticks, dispatch, execution, completion); policies only decide who runs
 * next and how waiting is charged.
 */

use super::switch_log::ContextSwitchLog;
use super::timeline::Timeline;
use super::types::SwitchReason;
use crate::core::errors::SimulationResult;
use crate::core::types::{ProcessIndex, Tick};
use crate::process::{Process, ProcessState};
use tracing::{debug, info, trace};

/// Exclusive state of a single simulation run
#[derive(Debug)]
pub struct Simulation {
    processes: Vec<Process>,
    clock: Tick,
    // Last dispatched process. Stays set after it completes so the next
    // switch names it as the process switched out.
    current: Option<ProcessIndex>,
    log: ContextSwitchLog,
    timeline: Timeline,
}

impl Simulation {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            clock: 0,
            current: None,
            log: ContextSwitchLog::new(),
            timeline: Timeline::new(),
        }
    }

    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    #[inline]
    pub fn process(&self, index: ProcessIndex) -> &Process {
        &self.processes[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn current(&self) -> Option<ProcessIndex> {
        self.current
    }

    #[inline]
    pub fn log(&self) -> &ContextSwitchLog {
        &self.log
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    /// Stable reorder of the process set by arrival time; only legal
    /// before anything has been dispatched
    pub(crate) fn sort_by_arrival(&mut self) {
        debug_assert!(self.current.is_none());
        self.processes.sort_by_key(Process::arrival_time);
    }

    /// Move every NEW process whose arrival time has been reached to
    /// READY, in list order, returning the admitted indices
    pub(crate) fn admit_arrivals(&mut self) -> SimulationResult<Vec<ProcessIndex>> {
        let clock = self.clock;
        let mut admitted = Vec::new();

        for (index, process) in self.processes.iter_mut().enumerate() {
            if process.state() == ProcessState::New && process.arrival_time() <= clock {
                process.admit()?;
                debug!(time = clock, pid = process.pid(), name = process.name(), "process arrived");
                admitted.push(index);
            }
        }

        Ok(admitted)
    }

    /// Advance the clock by one tick with the CPU idle
    pub(crate) fn idle_tick(&mut self) {
        trace!(time = self.clock, "cpu idle");
        self.clock += 1;
    }

    /// Jump the clock forward to `time` (never backwards)
    pub(crate) fn advance_to(&mut self, time: Tick) {
        if time > self.clock {
            trace!(from = self.clock, to = time, "cpu idle gap");
            self.clock = time;
        }
    }

    /// Give the CPU to `index`
    ///
    /// Records a switch only when the dispatched identity changes. A
    /// previous holder that is still RUNNING is preempted back to READY.
    pub(crate) fn dispatch(&mut self, index: ProcessIndex, reason: SwitchReason) -> SimulationResult<()> {
        if self.current != Some(index) {
            if let Some(previous) = self.current {
                if self.processes[previous].state() == ProcessState::Running {
                    self.processes[previous].preempt()?;
                }
            }

            self.log.record(
                self.clock,
                self.current.map(|i| &self.processes[i]),
                Some(&self.processes[index]),
                reason,
            );
            self.current = Some(index);
        }

        let process = &mut self.processes[index];
        if process.state() != ProcessState::Running {
            process.dispatch(self.clock)?;
        }

        Ok(())
    }

    /// Run the dispatched process for `ticks` ticks in one step
    pub(crate) fn execute(&mut self, index: ProcessIndex, ticks: Tick) -> SimulationResult<()> {
        let process = &mut self.processes[index];
        process.execute(ticks)?;

        let start = self.clock;
        self.clock += ticks;
        self.timeline
            .extend(index, process.pid(), process.name(), start, self.clock);
        Ok(())
    }

    /// RUNNING -> READY at the end of a slice; the process stays the
    /// last dispatched one
    pub(crate) fn preempt(&mut self, index: ProcessIndex) -> SimulationResult<()> {
        self.processes[index].preempt()
    }

    /// Charge `ticks` of waiting to every process except `running` that
    /// satisfies `waiting`
    pub(crate) fn accrue_wait<F>(&mut self, running: ProcessIndex, ticks: Tick, waiting: F)
    where
        F: Fn(&Process) -> bool,
    {
        for (index, process) in self.processes.iter_mut().enumerate() {
            if index != running && waiting(process) {
                process.accrue_wait(ticks);
            }
        }
    }

    /// Single wait assignment for a process that is never preempted
    pub(crate) fn assign_wait(&mut self, index: ProcessIndex, ticks: Tick) {
        self.processes[index].assign_wait(ticks);
    }

    /// RUNNING -> COMPLETED at the current clock
    pub(crate) fn complete(&mut self, index: ProcessIndex) -> SimulationResult<()> {
        let clock = self.clock;
        let process = &mut self.processes[index];
        process.complete(clock)?;

        info!(
            time = clock,
            pid = process.pid(),
            name = process.name(),
            turnaround = ?process.turnaround_time(),
            "process completed"
        );
        Ok(())
    }

    /// Hand back the owned run state
    pub fn into_parts(self) -> (Vec<Process>, ContextSwitchLog, Timeline, Tick) {
        (self.processes, self.log, self.timeline, self.clock)
    }
}
