//! Round-Robin, preemptive with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Arrivals join the ready tail. The ready queue is never re-sorted;
//!    fairness comes from rotation alone.
//! 2. An idle CPU takes the ready head.
//! 3. If the running process has executed `quantum` ticks in this dispatch,
//!    it is preempted to the ready tail and the new head is dispatched in the
//!    same tick. With an otherwise empty ready queue that is the same
//!    process again, with zero wait.
//! 4. The CPU runs one tick.
//!
//! A process can be dispatched many times. Its waiting time is the sum of
//! all its ready-queue residencies, each measured from the tick it arrived
//! or was last preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use super::engine::Engine;
use super::observer::SimObserver;
use crate::config::SimulationConfig;
use crate::error::ScheduleResult;
use crate::models::{Policy, Process, SimulationOutcome, Tick};

pub(crate) fn simulate(
    processes: &[Process],
    quantum: Tick,
    config: &SimulationConfig,
    observer: &mut dyn SimObserver,
) -> ScheduleResult<SimulationOutcome> {
    let mut engine = Engine::new(Policy::RoundRobin { quantum }, processes, config, observer);

    while !engine.finished() {
        engine.admit_arrivals()?;
        if engine.is_idle() {
            engine.dispatch_next()?;
        }
        // quantum_expired is false on an idle CPU
        if engine.quantum_expired(quantum) {
            engine.preempt();
            engine.dispatch_next()?;
        }
        engine.step();
    }

    Ok(engine.finish())
}
