//! Error taxonomy for simulation runs.
//!
//! Every failure aborts the single run that produced it; nothing is retried.
//! Input problems are detected by [`crate::validation`] before the clock
//! starts, so a run either fails up front or completes.

use thiserror::Error;

use crate::models::{ProcessId, Tick};

/// Simulation result alias.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors produced by the queue, validation and the scheduling loops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// `dequeue`/`peek` on an empty queue.
    #[error("Queue is empty")]
    EmptyQueue,

    #[error("Process count exceeded: {count} processes, capacity {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A workload file could not be parsed.
    #[error("Malformed workload: {0}")]
    Workload(String),
}

/// Rejected input, reported before the simulation loop starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("process P{id} has non-positive burst {burst}")]
    NonPositiveBurst { id: ProcessId, burst: Tick },

    #[error("process P{id} has negative arrival {arrival}")]
    NegativeArrival { id: ProcessId, arrival: Tick },

    #[error("quantum must be positive, got {0}")]
    NonPositiveQuantum(Tick),

    #[error("duplicate process id P{0}")]
    DuplicateId(ProcessId),

    /// Latest arrival plus total burst does not fit in a [`Tick`].
    #[error("run length overflows the tick range")]
    TickOverflow,
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Workload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_converts() {
        let err: ScheduleError = InputError::NonPositiveQuantum(0).into();
        assert_eq!(
            err,
            ScheduleError::InvalidInput(InputError::NonPositiveQuantum(0))
        );
        assert_eq!(
            err.to_string(),
            "Invalid input: quantum must be positive, got 0"
        );
    }

    #[test]
    fn test_tick_overflow_message() {
        let err: ScheduleError = InputError::TickOverflow.into();
        assert_eq!(
            err.to_string(),
            "Invalid input: run length overflows the tick range"
        );
    }

    #[test]
    fn test_capacity_message() {
        let err = ScheduleError::CapacityExceeded {
            count: 7,
            capacity: 5,
        };
        assert_eq!(
            err.to_string(),
            "Process count exceeded: 7 processes, capacity 5"
        );
    }
}
