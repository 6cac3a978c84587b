//! Input validation for simulation runs.
//!
//! Runs before the clock starts. Detects:
//! - More processes than the configured capacity
//! - Non-positive bursts
//! - Negative arrivals
//! - Duplicate process IDs
//! - A run whose last tick cannot be represented
//! - Non-positive RR quantum
//!
//! The first problem found is returned; a rejected run never starts.

use std::collections::HashSet;

use crate::error::{InputError, ScheduleError, ScheduleResult};
use crate::models::{Policy, Process, Tick};

/// Validates a process list against a capacity.
///
/// Checks, in order:
/// 1. `processes.len() <= capacity`
/// 2. Every `burst > 0`
/// 3. Every `arrival >= 0`
/// 4. No duplicate IDs
/// 5. Latest arrival plus total burst fits in a [`Tick`]
pub fn validate_processes(processes: &[Process], capacity: usize) -> ScheduleResult<()> {
    if processes.len() > capacity {
        return Err(ScheduleError::CapacityExceeded {
            count: processes.len(),
            capacity,
        });
    }

    let mut ids = HashSet::with_capacity(processes.len());
    for p in processes {
        if p.burst <= 0 {
            return Err(InputError::NonPositiveBurst {
                id: p.id,
                burst: p.burst,
            }
            .into());
        }
        if p.arrival < 0 {
            return Err(InputError::NegativeArrival {
                id: p.id,
                arrival: p.arrival,
            }
            .into());
        }
        if !ids.insert(p.id) {
            return Err(InputError::DuplicateId(p.id).into());
        }
    }

    run_horizon(processes).ok_or(InputError::TickOverflow)?;
    Ok(())
}

/// Upper bound on the final clock value: latest arrival plus every burst.
///
/// `None` when the sum overflows.
pub fn run_horizon(processes: &[Process]) -> Option<Tick> {
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst))
}

/// Validates an RR quantum.
pub fn validate_quantum(quantum: Tick) -> ScheduleResult<()> {
    if quantum <= 0 {
        return Err(InputError::NonPositiveQuantum(quantum).into());
    }
    Ok(())
}

/// Validates a full run request: the process list plus policy parameters.
pub fn validate_input(
    policy: &Policy,
    processes: &[Process],
    capacity: usize,
) -> ScheduleResult<()> {
    if let Policy::RoundRobin { quantum } = policy {
        validate_quantum(*quantum)?;
    }
    validate_processes(processes, capacity)
}
