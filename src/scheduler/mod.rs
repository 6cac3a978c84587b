//! Scheduling algorithms and run evaluation.
//!
//! Each algorithm is a self-contained discrete-time loop over a shared
//! engine that owns the run's queues and clock. Runs are
//! synchronous and own all their state, so repeated or interleaved runs
//! never affect each other.
//!
//! # Algorithms
//!
//! | Policy | Ready order | Preemptive |
//! |--------|-------------|------------|
//! | FCFS | arrival | no |
//! | SJF | shortest burst | no |
//! | RR | rotation | yes, fixed quantum |
//!
//! # KPI
//!
//! `SimulationKpi` computes averages, utilization, throughput and context
//! switches from an outcome.

mod engine;
mod first_come;
mod kpi;
pub mod observer;
mod rotation;
mod shortest_job;

pub use kpi::SimulationKpi;
pub use observer::{EventLog, NoopObserver, SimEvent, SimObserver, TracingObserver};

use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::error::ScheduleResult;
use crate::models::{Policy, Process, SimulationOutcome, Tick};
use crate::validation::validate_input;

/// Runs FCFS with the default configuration.
pub fn fcfs(processes: &[Process]) -> ScheduleResult<SimulationOutcome> {
    Simulator::new().run(Policy::Fcfs, processes)
}

/// Runs non-preemptive SJF with the default configuration.
pub fn sjf(processes: &[Process]) -> ScheduleResult<SimulationOutcome> {
    Simulator::new().run(Policy::Sjf, processes)
}

/// Runs Round-Robin with the default configuration.
pub fn round_robin(processes: &[Process], quantum: Tick) -> ScheduleResult<SimulationOutcome> {
    Simulator::new().run(Policy::RoundRobin { quantum }, processes)
}

/// Validating front end for all policies.
///
/// # Example
///
/// ```
/// use cpu_schedule::config::SimulationConfig;
/// use cpu_schedule::models::{Policy, Process};
/// use cpu_schedule::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ];
/// let simulator = Simulator::with_config(SimulationConfig::new().with_capacity(5));
/// let outcome = simulator.run(Policy::Sjf, &processes).unwrap();
/// assert_eq!(outcome.completion_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates the input and runs one simulation.
    pub fn run(&self, policy: Policy, processes: &[Process]) -> ScheduleResult<SimulationOutcome> {
        self.run_observed(policy, processes, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), reporting every state transition to `observer`.
    pub fn run_observed(
        &self,
        policy: Policy,
        processes: &[Process],
        observer: &mut dyn SimObserver,
    ) -> ScheduleResult<SimulationOutcome> {
        if let Err(err) = validate_input(&policy, processes, self.config.capacity) {
            warn!(policy = policy.name(), error = %err, "rejected simulation input");
            return Err(err);
        }

        let outcome = match policy {
            Policy::Fcfs => first_come::simulate(processes, &self.config, observer)?,
            Policy::Sjf => shortest_job::simulate(processes, &self.config, observer)?,
            Policy::RoundRobin { quantum } => {
                rotation::simulate(processes, quantum, &self.config, observer)?
            }
        };

        info!(
            policy = policy.name(),
            processes = outcome.count(),
            elapsed = outcome.elapsed,
            avg_waiting = outcome.average_waiting(),
            avg_turnaround = outcome.average_turnaround(),
            "simulation complete"
        );
        Ok(outcome)
    }
}
