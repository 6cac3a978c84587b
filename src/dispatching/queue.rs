//! FIFO process queue with in-place reordering.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::OrderingRule;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Process;

/// An ordered sequence of process records.
///
/// Insertion order is kept until a rule is applied with [`sort_by`].
/// `dequeue` and `peek` on an empty queue return
/// [`ScheduleError::EmptyQueue`] instead of a sentinel.
///
/// [`sort_by`]: ProcessQueue::sort_by
#[derive(Debug, Clone, Default)]
pub struct ProcessQueue {
    items: VecDeque<Process>,
}

impl ProcessQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a record at the tail.
    pub fn enqueue(&mut self, process: Process) {
        self.items.push_back(process);
    }

    /// Removes and returns the head record.
    pub fn dequeue(&mut self) -> ScheduleResult<Process> {
        self.items.pop_front().ok_or(ScheduleError::EmptyQueue)
    }

    /// Returns the head record without removing it.
    pub fn peek(&self) -> ScheduleResult<&Process> {
        self.items.front().ok_or(ScheduleError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.items.iter()
    }

    /// Stable in-place sort by an ordering rule.
    pub fn sort_by<R: OrderingRule + ?Sized>(&mut self, rule: &R) {
        self.sort_by_fn(|a, b| rule.compare(a, b));
    }

    /// Stable in-place sort by an ad-hoc comparison.
    pub fn sort_by_fn<F>(&mut self, compare: F)
    where
        F: FnMut(&Process, &Process) -> Ordering,
    {
        self.items.make_contiguous().sort_by(compare);
    }
}

impl FromIterator<Process> for ProcessQueue {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
