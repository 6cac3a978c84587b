//! Process record model.
//!
//! A process is the unit of work fed to the simulator and the unit of result
//! handed back. The same value type carries both the caller-supplied fields
//! (`id`, `arrival`, `burst`, `priority`) and the bookkeeping filled in while
//! a run is in progress.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = u32;

/// Logical clock unit. One tick is one unit of CPU work.
pub type Tick = i64;

/// A process record.
///
/// Records are copied between the caller's input, the pending/ready queues
/// and the result collection; the simulator never holds references into the
/// caller's slice. Use [`Process::admitted`] to obtain a fresh working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes schedulable.
    pub arrival: Tick,
    /// Total CPU ticks required.
    pub burst: Tick,
    /// Carried through for reporting; no ordering rule reads it.
    #[serde(default)]
    pub priority: i32,
    /// Ticks still required.
    #[serde(default)]
    pub remaining: Tick,
    /// Accumulated ready-but-not-running ticks.
    #[serde(default)]
    pub waiting: Tick,
    /// Tick the process last entered the ready queue (arrival or preemption).
    #[serde(default)]
    pub last_dispatch: Tick,
    /// Ticks run during the current dispatch.
    #[serde(default)]
    pub executed: Tick,
    /// `waiting + burst`, set at termination.
    #[serde(default)]
    pub turnaround: Tick,
    /// Ticks from arrival to first dispatch, set at termination.
    #[serde(default)]
    pub response: Tick,
    #[serde(default)]
    pub first_dispatch: Option<Tick>,
    #[serde(default)]
    pub completion: Option<Tick>,
    /// Number of times the process was placed on the CPU.
    #[serde(default)]
    pub dispatches: u32,
}

impl Process {
    /// Creates a process with the given arrival and burst.
    pub fn new(id: ProcessId, arrival: Tick, burst: Tick) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            waiting: 0,
            last_dispatch: arrival,
            executed: 0,
            turnaround: 0,
            response: 0,
            first_dispatch: None,
            completion: None,
            dispatches: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns a working copy with all runtime bookkeeping reset.
    ///
    /// Only the caller-supplied fields survive, so a record that already went
    /// through a run can be fed to another one.
    pub fn admitted(&self) -> Self {
        Self::new(self.id, self.arrival, self.burst).with_priority(self.priority)
    }

    /// Total ticks executed so far across all dispatches.
    #[inline]
    pub fn executed_total(&self) -> Tick {
        self.burst - self.remaining
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 2, 7).with_priority(4);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 7);
        assert_eq!(p.remaining, 7);
        assert_eq!(p.priority, 4);
        assert_eq!(p.last_dispatch, 2);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_admitted_resets_bookkeeping() {
        let mut p = Process::new(1, 0, 5).with_priority(2);
        p.remaining = 0;
        p.waiting = 9;
        p.dispatches = 3;
        p.completion = Some(14);

        let fresh = p.admitted();
        assert_eq!(fresh, Process::new(1, 0, 5).with_priority(2));
        assert_eq!(fresh.executed_total(), 0);
    }

    #[test]
    fn test_deserialize_input_only() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":5}"#).unwrap();
        assert_eq!(p.priority, 0);
        // remaining is not part of the input format; admission restores it
        assert_eq!(p.admitted().remaining, 5);
    }
}
