//! Opt-in observation of a simulation run.
//!
//! The engine never prints. Each state transition is reported to the
//! observer the caller injects; [`NoopObserver`] is used when none is given.

use tracing::debug;

use crate::models::{ProcessId, Tick};

/// A state transition inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// Moved from the pending queue to the ready queue.
    Arrival { tick: Tick, pid: ProcessId },
    /// Placed on the CPU after waiting `waited` ticks in the ready queue.
    Dispatch {
        tick: Tick,
        pid: ProcessId,
        waited: Tick,
    },
    /// Quantum expired; re-enqueued at the ready tail.
    Preempt {
        tick: Tick,
        pid: ProcessId,
        remaining: Tick,
    },
    Terminate {
        tick: Tick,
        pid: ProcessId,
        turnaround: Tick,
    },
    /// No process on the CPU for this tick.
    Idle { tick: Tick },
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            SimEvent::Arrival { tick, .. }
            | SimEvent::Dispatch { tick, .. }
            | SimEvent::Preempt { tick, .. }
            | SimEvent::Terminate { tick, .. }
            | SimEvent::Idle { tick } => tick,
        }
    }

    /// Process the event refers to; `None` for idle ticks.
    pub fn pid(&self) -> Option<ProcessId> {
        match *self {
            SimEvent::Arrival { pid, .. }
            | SimEvent::Dispatch { pid, .. }
            | SimEvent::Preempt { pid, .. }
            | SimEvent::Terminate { pid, .. } => Some(pid),
            SimEvent::Idle { .. } => None,
        }
    }
}

/// Receives every event of a run, in order.
pub trait SimObserver {
    fn observe(&mut self, event: &SimEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {
    fn observe(&mut self, _event: &SimEvent) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn observe(&mut self, event: &SimEvent) {
        match *event {
            SimEvent::Arrival { tick, pid } => debug!(tick, pid, "arrival"),
            SimEvent::Dispatch { tick, pid, waited } => debug!(tick, pid, waited, "dispatch"),
            SimEvent::Preempt {
                tick,
                pid,
                remaining,
            } => debug!(tick, pid, remaining, "timeout"),
            SimEvent::Terminate {
                tick,
                pid,
                turnaround,
            } => debug!(tick, pid, turnaround, "terminate"),
            SimEvent::Idle { tick } => debug!(tick, "idle"),
        }
    }
}

/// Collects events in memory.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Dispatched process ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SimEvent::Dispatch { pid, .. } => Some(*pid),
                _ => None,
            })
            .collect()
    }

    pub fn count_preemptions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::Preempt { .. }))
            .count()
    }
}

impl SimObserver for EventLog {
    fn observe(&mut self, event: &SimEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let e = SimEvent::Dispatch {
            tick: 4,
            pid: 2,
            waited: 3,
        };
        assert_eq!(e.tick(), 4);
        assert_eq!(e.pid(), Some(2));
        assert_eq!(SimEvent::Idle { tick: 7 }.pid(), None);
    }

    #[test]
    fn test_event_log_collects() {
        let mut log = EventLog::new();
        log.observe(&SimEvent::Arrival { tick: 0, pid: 1 });
        log.observe(&SimEvent::Dispatch {
            tick: 0,
            pid: 1,
            waited: 0,
        });
        log.observe(&SimEvent::Preempt {
            tick: 2,
            pid: 1,
            remaining: 1,
        });
        log.observe(&SimEvent::Dispatch {
            tick: 2,
            pid: 1,
            waited: 0,
        });

        assert_eq!(log.events().len(), 4);
        assert_eq!(log.dispatch_order(), vec![1, 1]);
        assert_eq!(log.count_preemptions(), 1);
    }

    #[test]
    fn test_noop_and_tracing_accept_events() {
        let event = SimEvent::Idle { tick: 0 };
        NoopObserver.observe(&event);
        TracingObserver.observe(&event);
    }
}
