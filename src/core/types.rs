/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier (OS pid for live feeds, 1000+ for user-entered processes)
pub type Pid = u32;

/// One indivisible unit of the simulation clock
pub type Tick = u64;

/// Scheduling priority (smaller value = higher priority, negatives allowed)
pub type Priority = i32;

/// Index of a process in the run's owned process collection
pub type ProcessIndex = usize;
