//! Discrete-time dispatch engine shared by all policies.
//!
//! The engine owns one run's clock, pending and ready queues, running slot,
//! result collection and timeline. Each policy drives it with its own loop;
//! the engine only provides the per-tick steps.
//!
//! # Tick structure
//!
//! 1. `admit_arrivals` moves every pending process with `arrival <= time`
//!    to the ready tail.
//! 2. The policy dispatches and/or preempts.
//! 3. `step` runs the CPU for one tick, advances the clock and terminates
//!    the running process when its `remaining` reaches 0.

use super::observer::{SimEvent, SimObserver};
use crate::config::SimulationConfig;
use crate::dispatching::{rules, OrderingRule, ProcessQueue};
use crate::error::ScheduleResult;
use crate::models::{Policy, Process, ProcessId, SimulationOutcome, Tick, Totals};
use crate::workload::total_burst;

/// Most timeline slots reserved up front; longer runs grow on demand.
const TIMELINE_RESERVE_LIMIT: usize = 1 << 16;

pub(crate) struct Engine<'o> {
    policy: Policy,
    time: Tick,
    pending: ProcessQueue,
    ready: ProcessQueue,
    running: Option<Process>,
    completed: Vec<Process>,
    totals: Totals,
    timeline: Option<Vec<Option<ProcessId>>>,
    target: usize,
    observer: &'o mut dyn SimObserver,
}

impl<'o> Engine<'o> {
    /// Seeds the pending queue with working copies sorted by arrival.
    ///
    /// The sort is stable, so equal arrivals keep input order.
    pub(crate) fn new(
        policy: Policy,
        processes: &[Process],
        config: &SimulationConfig,
        observer: &'o mut dyn SimObserver,
    ) -> Self {
        let mut pending: ProcessQueue = processes.iter().map(Process::admitted).collect();
        pending.sort_by(&rules::ByArrival);

        let timeline = config.record_timeline.then(|| {
            let busy = usize::try_from(total_burst(processes)).unwrap_or(0);
            Vec::with_capacity(busy.min(TIMELINE_RESERVE_LIMIT))
        });

        Self {
            policy,
            time: 0,
            pending,
            ready: ProcessQueue::with_capacity(processes.len()),
            running: None,
            completed: Vec::with_capacity(processes.len()),
            totals: Totals::default(),
            timeline,
            target: processes.len(),
            observer,
        }
    }

    /// Whether every process has terminated.
    pub(crate) fn finished(&self) -> bool {
        self.completed.len() == self.target
    }

    /// Whether the CPU has no running process.
    pub(crate) fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Moves arrived pending processes to the ready tail.
    ///
    /// Returns the number of processes admitted this tick.
    pub(crate) fn admit_arrivals(&mut self) -> ScheduleResult<usize> {
        let mut admitted = 0;
        while !self.pending.is_empty() && self.pending.peek()?.arrival <= self.time {
            let process = self.pending.dequeue()?;
            self.observer.observe(&SimEvent::Arrival {
                tick: self.time,
                pid: process.id,
            });
            self.ready.enqueue(process);
            admitted += 1;
        }
        Ok(admitted)
    }

    /// Re-sorts the ready queue.
    pub(crate) fn sort_ready<R: OrderingRule + ?Sized>(&mut self, rule: &R) {
        self.ready.sort_by(rule);
    }

    /// Places the ready head on the CPU, if there is one.
    ///
    /// The wait since the process last entered the ready queue is added to
    /// both its own `waiting` and the run's waiting total. For a process
    /// dispatched once this is `time - arrival`.
    pub(crate) fn dispatch_next(&mut self) -> ScheduleResult<()> {
        debug_assert!(self.running.is_none(), "CPU already has a running process");
        if self.ready.is_empty() {
            return Ok(());
        }

        let mut process = self.ready.dequeue()?;
        let waited = self.time - process.last_dispatch;
        process.waiting += waited;
        process.executed = 0;
        process.dispatches += 1;
        process.first_dispatch.get_or_insert(self.time);
        self.totals.waiting += waited;

        self.observer.observe(&SimEvent::Dispatch {
            tick: self.time,
            pid: process.id,
            waited,
        });
        self.running = Some(process);
        Ok(())
    }

    /// Whether the running process has used up its quantum.
    ///
    /// Always `false` while the CPU is idle.
    pub(crate) fn quantum_expired(&self, quantum: Tick) -> bool {
        self.running
            .as_ref()
            .is_some_and(|process| process.executed == quantum)
    }

    /// Takes the running process off the CPU and re-enqueues it at the tail.
    pub(crate) fn preempt(&mut self) {
        if let Some(mut process) = self.running.take() {
            process.last_dispatch = self.time;
            self.observer.observe(&SimEvent::Preempt {
                tick: self.time,
                pid: process.id,
                remaining: process.remaining,
            });
            self.ready.enqueue(process);
        }
    }

    /// Runs the CPU for one tick and advances the clock.
    pub(crate) fn step(&mut self) {
        let current = self.running.as_ref().map(|process| process.id);
        if current.is_none() {
            self.observer.observe(&SimEvent::Idle { tick: self.time });
        }
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.push(current);
        }

        self.time += 1;

        let done = match self.running.as_mut() {
            Some(process) => {
                process.remaining -= 1;
                process.executed += 1;
                process.is_finished()
            }
            None => false,
        };
        if done {
            self.terminate();
        }
    }

    fn terminate(&mut self) {
        let Some(mut process) = self.running.take() else {
            return;
        };

        process.completion = Some(self.time);
        process.turnaround = process.waiting + process.executed_total();
        process.response = process.first_dispatch.unwrap_or(process.arrival) - process.arrival;
        self.totals.record(&process);

        self.observer.observe(&SimEvent::Terminate {
            tick: self.time,
            pid: process.id,
            turnaround: process.turnaround,
        });
        self.completed.push(process);
    }

    /// Consumes the engine into the run's outcome.
    pub(crate) fn finish(self) -> SimulationOutcome {
        SimulationOutcome {
            policy: self.policy,
            completed: self.completed,
            totals: self.totals,
            elapsed: self.time,
            timeline: self.timeline.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::observer::EventLog;

    #[test]
    fn test_admits_all_same_tick_arrivals() {
        let processes = vec![
            Process::new(1, 0, 2),
            Process::new(2, 0, 2),
            Process::new(3, 1, 2),
        ];
        let mut log = EventLog::new();
        let config = SimulationConfig::default();
        let mut engine = Engine::new(Policy::Fcfs, &processes, &config, &mut log);

        assert_eq!(engine.admit_arrivals().unwrap(), 2);
        assert_eq!(engine.admit_arrivals().unwrap(), 0);
        assert!(!engine.finished());
    }

    #[test]
    fn test_input_not_mutated() {
        let processes = vec![Process::new(1, 0, 2)];
        let snapshot = processes.clone();
        let mut log = EventLog::new();
        let config = SimulationConfig::default();
        let mut engine = Engine::new(Policy::Fcfs, &processes, &config, &mut log);

        while !engine.finished() {
            engine.admit_arrivals().unwrap();
            if engine.is_idle() {
                engine.dispatch_next().unwrap();
            }
            engine.step();
        }
        let outcome = engine.finish();

        assert_eq!(processes, snapshot);
        assert_eq!(outcome.completed[0].remaining, 0);
    }

    #[test]
    fn test_dispatch_on_empty_ready_is_noop() {
        let processes = vec![Process::new(1, 3, 1)];
        let mut log = EventLog::new();
        let config = SimulationConfig::default();
        let mut engine = Engine::new(Policy::Fcfs, &processes, &config, &mut log);

        engine.admit_arrivals().unwrap();
        engine.dispatch_next().unwrap();
        assert!(engine.is_idle());
        assert!(!engine.quantum_expired(1));
        engine.preempt();
        engine.step();
        assert!(engine.is_idle());
    }

    #[test]
    fn test_huge_burst_does_not_reserve_timeline() {
        let processes = vec![Process::new(1, 0, 1 << 62)];
        let mut log = EventLog::new();
        let config = SimulationConfig::default();
        let mut engine = Engine::new(Policy::Fcfs, &processes, &config, &mut log);

        engine.admit_arrivals().unwrap();
        engine.dispatch_next().unwrap();
        engine.step();
        assert!(!engine.finished());
        assert!(engine.timeline.as_ref().unwrap().capacity() <= TIMELINE_RESERVE_LIMIT);
    }

    #[test]
    fn test_timeline_disabled() {
        let processes = vec![Process::new(1, 0, 2)];
        let mut log = EventLog::new();
        let config = SimulationConfig::default().with_timeline(false);
        let mut engine = Engine::new(Policy::Fcfs, &processes, &config, &mut log);

        engine.admit_arrivals().unwrap();
        engine.dispatch_next().unwrap();
        engine.step();
        engine.step();
        let outcome = engine.finish();

        assert!(outcome.timeline.is_empty());
        assert_eq!(outcome.elapsed, 2);
        assert_eq!(outcome.count(), 1);
    }
}
