/*!
 * Process Descriptor Validation
 * Rejects descriptors the engine cannot simulate to completion
 */

use super::types::{Process, ProcessDescriptor, ProcessState};
use crate::core::errors::{SimulationError, SimulationResult};
use crate::core::types::Tick;

/// Validate a descriptor before it enters a run
pub fn validate_descriptor(descriptor: &ProcessDescriptor) -> SimulationResult<()> {
    if descriptor.burst_time <= 0 {
        return Err(SimulationError::InvalidProcessDescriptor {
            pid: descriptor.pid,
            reason: format!(
                "burst time must be positive, got {}",
                descriptor.burst_time
            ),
        });
    }

    if descriptor.arrival_time < 0 {
        return Err(SimulationError::InvalidProcessDescriptor {
            pid: descriptor.pid,
            reason: format!(
                "arrival time must not be negative, got {}",
                descriptor.arrival_time
            ),
        });
    }

    Ok(())
}

impl TryFrom<ProcessDescriptor> for Process {
    type Error = SimulationError;

    fn try_from(descriptor: ProcessDescriptor) -> SimulationResult<Self> {
        validate_descriptor(&descriptor)?;

        // Both values are non-negative after validation
        let arrival_time = descriptor.arrival_time as u64;
        let burst_time = descriptor.burst_time as u64;

        Ok(Self {
            pid: descriptor.pid,
            name: descriptor.name,
            arrival_time,
            burst_time,
            priority: descriptor.priority,
            remaining_time: burst_time,
            wait_time: 0,
            response_time: None,
            turnaround_time: None,
            completion_time: None,
            state: ProcessState::New,
        })
    }
}

/// Validate and convert a whole feed, preserving input order
///
/// The run can never outlast the latest arrival plus all bursts, so the
/// set is rejected when that horizon does not fit in a `Tick`.
pub fn build_process_set(descriptors: Vec<ProcessDescriptor>) -> SimulationResult<Vec<Process>> {
    let processes: Vec<Process> = descriptors
        .into_iter()
        .map(Process::try_from)
        .collect::<SimulationResult<_>>()?;

    let mut latest_arrival: Tick = 0;
    let mut total_burst: Tick = 0;
    for process in &processes {
        latest_arrival = latest_arrival.max(process.arrival_time());
        let within_range = total_burst
            .checked_add(process.burst_time())
            .filter(|total| total.checked_add(latest_arrival).is_some());

        match within_range {
            Some(total) => total_burst = total,
            None => {
                return Err(SimulationError::InvalidProcessDescriptor {
                    pid: process.pid(),
                    reason: "arrival and burst times exceed the simulation clock range"
                        .to_string(),
                })
            }
        }
    }

    Ok(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_burst() {
        let err = validate_descriptor(&ProcessDescriptor::new(1, "zero", 0, 0)).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidProcessDescriptor { pid: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_negative_values() {
        assert!(validate_descriptor(&ProcessDescriptor::new(1, "neg", 0, -4)).is_err());
        assert!(validate_descriptor(&ProcessDescriptor::new(2, "early", -1, 4)).is_err());
    }

    #[test]
    fn test_conversion_initializes_simulation_state() {
        let process = Process::try_from(ProcessDescriptor::new(9, "init", 2, 5).with_priority(1))
            .unwrap();

        assert_eq!(process.pid(), 9);
        assert_eq!(process.arrival_time(), 2);
        assert_eq!(process.remaining_time(), 5);
        assert_eq!(process.wait_time(), 0);
        assert_eq!(process.response_time(), None);
        assert_eq!(process.state(), ProcessState::New);
        assert_eq!(process.priority(), 1);
    }

    #[test]
    fn test_build_process_set_stops_at_first_invalid() {
        let result = build_process_set(vec![
            ProcessDescriptor::new(1, "ok", 0, 3),
            ProcessDescriptor::new(2, "bad", 0, 0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_set_whose_horizon_overflows_the_clock() {
        let err = build_process_set(vec![
            ProcessDescriptor::new(1, "a", 0, i64::MAX),
            ProcessDescriptor::new(2, "b", 0, i64::MAX),
            ProcessDescriptor::new(3, "c", 0, i64::MAX),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidProcessDescriptor { pid: 3, .. }
        ));

        let err = build_process_set(vec![
            ProcessDescriptor::new(1, "late", i64::MAX, 1),
            ProcessDescriptor::new(2, "long", 0, i64::MAX),
            ProcessDescriptor::new(3, "more", 0, 2),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidProcessDescriptor { pid: 3, .. }
        ));
    }

    #[test]
    fn test_accepts_set_just_inside_the_clock_range() {
        let processes = build_process_set(vec![
            ProcessDescriptor::new(1, "a", i64::MAX, i64::MAX),
            ProcessDescriptor::new(2, "b", 0, 1),
        ])
        .unwrap();
        assert_eq!(processes.len(), 2);
    }
}
