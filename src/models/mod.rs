//! Simulation domain models.
//!
//! Provides the process record the algorithms operate on and the outcome
//! they return.
//!
//! # Lifecycle
//!
//! | Stage | Container |
//! |-------|-----------|
//! | Input | caller's slice (never mutated) |
//! | Not yet arrived | pending queue (working copy) |
//! | Ready / running | ready queue, running slot |
//! | Terminated | `SimulationOutcome::completed` |

mod outcome;
mod process;

pub use outcome::{GanttSegment, Policy, SimulationOutcome, Totals};
pub use process::{Process, ProcessId, Tick};
