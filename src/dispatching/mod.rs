//! Ready/pending queues and the ordering rules that sort them.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, ProcessQueue};
//! use cpu_schedule::models::Process;
//!
//! let mut queue: ProcessQueue = vec![Process::new(1, 0, 8), Process::new(2, 0, 3)]
//!     .into_iter()
//!     .collect();
//! queue.sort_by(&rules::ShortestBurst);
//! assert_eq!(queue.peek().unwrap().id, 2);
//! ```

mod queue;
pub mod rules;

pub use queue::ProcessQueue;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A total order over process records used to sort a queue.
///
/// Sorting is stable, so records the rule considers equal keep their
/// current queue order.
pub trait OrderingRule: Debug {
    /// Rule name (e.g., "ARRIVAL", "SJF").
    fn name(&self) -> &'static str;

    /// Compares two records; `Less` sorts `a` toward the head.
    fn compare(&self, a: &Process, b: &Process) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
