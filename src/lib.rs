//! Discrete-time CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, non-preemptive Shortest-Job-First and
//! Round-Robin over a static list of processes, advancing a logical clock one
//! tick at a time, and reports per-process waiting, turnaround and response
//! times with their averages.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `SimulationOutcome`, `Policy`, `Totals`
//! - **`dispatching`**: `ProcessQueue` and the ordering rules that sort it
//! - **`scheduler`**: FCFS, SJF and RR loops, `Simulator`, observers, KPIs
//! - **`validation`**: input checks run before the clock starts
//! - **`config`**: per-run settings
//! - **`workload`**: JSON process lists and seeded random workloads
//! - **`report`**: result table rendering
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{round_robin, Process};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let outcome = round_robin(&processes, 2).unwrap();
//! assert_eq!(outcome.count(), 3);
//! assert_eq!(outcome.totals.waiting, 10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{InputError, ScheduleError, ScheduleResult};
pub use models::{Policy, Process, ProcessId, SimulationOutcome, Tick, Totals};
pub use scheduler::{fcfs, round_robin, sjf, Simulator};
