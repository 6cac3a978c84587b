//! Built-in ordering rules.
//!
//! - **ARRIVAL**: keeps the pending queue in arrival order.
//! - **SJF**: shortest burst first among ready processes.
//!
//! Both rules are also exposed as plain comparison functions for use with
//! [`ProcessQueue::sort_by_fn`](super::ProcessQueue::sort_by_fn).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::cmp::Ordering;

use super::OrderingRule;
use crate::models::Process;

/// Ascending by arrival tick.
pub fn by_arrival(a: &Process, b: &Process) -> Ordering {
    a.arrival.cmp(&b.arrival)
}

/// Ascending by burst.
///
/// SJF here is non-preemptive and compares at admission, when `burst` and
/// `remaining` are equal.
pub fn by_burst_ascending(a: &Process, b: &Process) -> Ordering {
    a.burst.cmp(&b.burst)
}

/// Arrival order.
///
/// Dequeuing a pending queue sorted by this rule always yields the next
/// process to arrive.
#[derive(Debug, Clone, Copy)]
pub struct ByArrival;

impl OrderingRule for ByArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        by_arrival(a, b)
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival First"
    }
}

/// Shortest Job First.
///
/// Minimizes average waiting time among the jobs ready at a dispatch
/// instant. Equal bursts keep queue order.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl OrderingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        by_burst_ascending(a, b)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
