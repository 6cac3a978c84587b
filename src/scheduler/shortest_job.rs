//! Shortest-Job-First, non-preemptive.
//!
//! # Algorithm
//!
//! Same tick structure as FCFS, except that the ready queue is re-sorted by
//! burst whenever a process arrives. The dispatched process is always the
//! shortest job among those ready at that instant. A running job is never
//! interrupted: a shorter job arriving mid-burst waits for it to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::engine::Engine;
use super::observer::SimObserver;
use crate::config::SimulationConfig;
use crate::dispatching::rules::ShortestBurst;
use crate::error::ScheduleResult;
use crate::models::{Policy, Process, SimulationOutcome};

pub(crate) fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
    observer: &mut dyn SimObserver,
) -> ScheduleResult<SimulationOutcome> {
    let mut engine = Engine::new(Policy::Sjf, processes, config, observer);

    while !engine.finished() {
        if engine.admit_arrivals()? > 0 {
            engine.sort_ready(&ShortestBurst);
        }
        if engine.is_idle() {
            engine.dispatch_next()?;
        }
        engine.step();
    }

    Ok(engine.finish())
}
