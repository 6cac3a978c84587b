//! Workload construction: JSON process lists and seeded random workloads.
//!
//! # JSON format
//!
//! An array of process objects; `priority` is optional.
//!
//! ```
//! use cpu_schedule::workload;
//!
//! let json = r#"[
//!     {"id": 1, "arrival": 0, "burst": 5},
//!     {"id": 2, "arrival": 1, "burst": 3, "priority": 2}
//! ]"#;
//! let processes = workload::from_json(json).unwrap();
//! assert_eq!(processes.len(), 2);
//! assert_eq!(workload::total_burst(&processes), 8);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ScheduleResult;
use crate::models::{Process, ProcessId, Tick};

/// Parses a process list.
///
/// Runtime fields are reset, so only `id`, `arrival`, `burst` and
/// `priority` are taken from the input. Values are not validated here.
pub fn from_json(json: &str) -> ScheduleResult<Vec<Process>> {
    let processes: Vec<Process> = serde_json::from_str(json)?;
    Ok(processes.iter().map(Process::admitted).collect())
}

/// Sum of all bursts, i.e. the number of busy ticks in any complete run.
///
/// Saturates at `Tick::MAX`; validation rejects such inputs before a run.
pub fn total_burst(processes: &[Process]) -> Tick {
    processes
        .iter()
        .fold(0, |acc: Tick, p| acc.saturating_add(p.burst))
}

/// Generates a reproducible random workload.
///
/// IDs are `1..=count`; arrivals are uniform in `0..=max_arrival`, bursts in
/// `1..=max_burst` and priorities in `0..=9`.
pub fn random_workload(
    count: usize,
    max_arrival: Tick,
    max_burst: Tick,
    seed: u64,
) -> Vec<Process> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (1..=count as ProcessId)
        .map(|id| {
            let arrival = rng.random_range(0..=max_arrival.max(0));
            let burst = rng.random_range(1..=max_burst.max(1));
            Process::new(id, arrival, burst).with_priority(rng.random_range(0..=9))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::validation::validate_processes;

    #[test]
    fn test_from_json_resets_runtime_fields() {
        let processes =
            from_json(r#"[{"id": 4, "arrival": 2, "burst": 6, "waiting": 99, "dispatches": 3}]"#)
                .unwrap();
        assert_eq!(processes[0], Process::new(4, 2, 6));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = from_json(r#"[{"id": 1, "arrival": 0}]"#).unwrap_err();
        assert!(matches!(err, ScheduleError::Workload(msg) if msg.contains("burst")));
    }

    #[test]
    fn test_total_burst() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        assert_eq!(total_burst(&processes), 8);
        assert_eq!(total_burst(&[]), 0);
    }

    #[test]
    fn test_total_burst_saturates() {
        let half = Tick::MAX / 2 + 1;
        let processes = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
        assert_eq!(total_burst(&processes), Tick::MAX);
    }

    #[test]
    fn test_random_workload_reproducible() {
        let a = random_workload(10, 20, 8, 7);
        let b = random_workload(10, 20, 8, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_random_workload_is_valid() {
        for seed in 0..20 {
            let processes = random_workload(12, 5, 4, seed);
            assert!(validate_processes(&processes, 12).is_ok());
            assert!(processes
                .iter()
                .all(|p| (0..=5).contains(&p.arrival) && (1..=4).contains(&p.burst)));
        }
    }
}
