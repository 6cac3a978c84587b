//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a completed
//! run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Σ waiting / N |
//! | Avg Turnaround | Σ (waiting + burst) / N |
//! | Avg Response | Σ (first dispatch - arrival) / N |
//! | Makespan | Final clock value |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Processes completed per tick |
//! | Context Switches | Total dispatches |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{SimulationOutcome, Tick};

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Longest total waiting time of any single process.
    pub max_waiting: Tick,
    /// Final clock value.
    pub makespan: Tick,
    pub idle_ticks: Tick,
    /// Fraction of ticks with a running process (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Total number of dispatches across all processes.
    pub context_switches: u32,
}

impl SimulationKpi {
    /// Computes KPIs from a completed run.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let makespan = outcome.elapsed;
        let idle_ticks = outcome.idle_ticks();
        let busy = makespan - idle_ticks;

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy as f64 / makespan as f64,
                outcome.count() as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting: outcome.average_waiting(),
            avg_turnaround: outcome.average_turnaround(),
            avg_response: outcome.average_response(),
            max_waiting: outcome
                .completed
                .iter()
                .map(|p| p.waiting)
                .max()
                .unwrap_or(0),
            makespan,
            idle_ticks,
            cpu_utilization,
            throughput,
            context_switches: outcome.completed.iter().map(|p| p.dispatches).sum(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
