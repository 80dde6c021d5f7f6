/*!
 * Scheduling Policies
 * Round Robin, FCFS and preemptive Priority implementations
 */

mod fcfs;
mod priority;
mod round_robin;

pub use fcfs::FirstComeFirstServed;
pub use priority::PreemptivePriority;
pub use round_robin::RoundRobin;

use super::traits::SchedulingAlgorithm;
use super::types::{SchedulingPolicy, TimeQuantum};

/// Build the algorithm for `policy`; the quantum only matters to Round Robin
pub fn algorithm_for(policy: SchedulingPolicy, quantum: TimeQuantum) -> Box<dyn SchedulingAlgorithm> {
    match policy {
        SchedulingPolicy::RoundRobin => Box::new(RoundRobin::new(quantum)),
        SchedulingPolicy::Fcfs => Box::new(FirstComeFirstServed::new()),
        SchedulingPolicy::Priority => Box::new(PreemptivePriority::new()),
    }
}
