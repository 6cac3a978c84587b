//! Tabular rendering of a completed run.
//!
//! ```text
//! FCFS
//! index   PID     arrival burst   priority        waiting turnaround
//! 0       P1      0       5       0       0       5
//! ...
//! time flow:              9
//! average turnaround:     6.33
//! average waiting:        3.33
//! average response:       3.33
//! ```
//!
//! Averages are `total / N` as computed by [`SimulationOutcome`].

use std::fmt;

use crate::models::SimulationOutcome;

/// Display adapter for a [`SimulationOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct ResultTable<'a> {
    outcome: &'a SimulationOutcome,
    show_gantt: bool,
}

impl<'a> ResultTable<'a> {
    pub fn new(outcome: &'a SimulationOutcome) -> Self {
        Self {
            outcome,
            show_gantt: false,
        }
    }

    /// Appends a Gantt line built from the run's timeline.
    pub fn with_gantt(mut self) -> Self {
        self.show_gantt = true;
        self
    }

    fn write_gantt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gantt:\t")?;
        for segment in self.outcome.gantt_segments() {
            match segment.pid {
                Some(pid) => write!(f, "|P{pid} {}-{}", segment.start, segment.end)?,
                None => write!(f, "|idle {}-{}", segment.start, segment.end)?,
            }
        }
        writeln!(f, "|")
    }
}

impl fmt::Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;

        writeln!(f, "{}", outcome.policy.name())?;
        writeln!(f, "index\tPID\tarrival\tburst\tpriority\twaiting\tturnaround")?;
        for (index, p) in outcome.completed.iter().enumerate() {
            writeln!(
                f,
                "{}\tP{}\t{}\t{}\t{}\t{}\t{}",
                index, p.id, p.arrival, p.burst, p.priority, p.waiting, p.turnaround
            )?;
        }

        writeln!(f, "time flow:\t\t{}", outcome.elapsed)?;
        writeln!(f, "average turnaround:\t{:.2}", outcome.average_turnaround())?;
        writeln!(f, "average waiting:\t{:.2}", outcome.average_waiting())?;
        writeln!(f, "average response:\t{:.2}", outcome.average_response())?;

        if self.show_gantt {
            self.write_gantt(f)?;
        }
        Ok(())
    }
}
