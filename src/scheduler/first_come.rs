//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! Processes are served strictly in arrival order. The ready queue is never
//! re-sorted: arrival order is the scheduling order. Once dispatched, a
//! process runs to completion, so its waiting time is the single gap
//! `dispatch - arrival`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use super::engine::Engine;
use super::observer::SimObserver;
use crate::config::SimulationConfig;
use crate::error::ScheduleResult;
use crate::models::{Policy, Process, SimulationOutcome};

pub(crate) fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
    observer: &mut dyn SimObserver,
) -> ScheduleResult<SimulationOutcome> {
    let mut engine = Engine::new(Policy::Fcfs, processes, config, observer);

    while !engine.finished() {
        engine.admit_arrivals()?;
        if engine.is_idle() {
            engine.dispatch_next()?;
        }
        engine.step();
    }

    Ok(engine.finish())
}
