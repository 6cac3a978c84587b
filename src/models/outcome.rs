//! Simulation outcome model.
//!
//! An outcome is the owned result of one run: the completed records in
//! termination order, the metric totals and the per-tick CPU timeline.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Tick};

/// Scheduling discipline for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin { quantum: Tick },
}

impl Policy {
    /// Short name used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin { .. } => "RR",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. })
    }
}

/// Metric sums over all completed processes.
///
/// Averages are `total / N`, which is the contract the reporter relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub turnaround: Tick,
    pub waiting: Tick,
    pub response: Tick,
}

impl Totals {
    /// Folds one terminated process into the turnaround and response sums.
    /// Waiting is accumulated at each dispatch instead.
    pub fn record(&mut self, process: &Process) {
        self.turnaround += process.turnaround;
        self.response += process.response;
    }

    fn average(total: Tick, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn average_turnaround(&self, count: usize) -> f64 {
        Self::average(self.turnaround, count)
    }

    pub fn average_waiting(&self, count: usize) -> f64 {
        Self::average(self.waiting, count)
    }

    pub fn average_response(&self, count: usize) -> f64 {
        Self::average(self.response, count)
    }
}

/// A contiguous stretch of the timeline occupied by one process (or idle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// `None` for idle stretches.
    pub pid: Option<ProcessId>,
    pub start: Tick,
    pub end: Tick,
}

/// Result of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub policy: Policy,
    /// One terminal copy per process, in termination order.
    pub completed: Vec<Process>,
    pub totals: Totals,
    /// Final clock value.
    pub elapsed: Tick,
    /// Process on the CPU at each tick; `None` marks an idle tick.
    /// Empty when timeline recording is disabled.
    pub timeline: Vec<Option<ProcessId>>,
}

impl SimulationOutcome {
    /// Number of completed processes.
    pub fn count(&self) -> usize {
        self.completed.len()
    }

    /// Process ids in termination order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.completed.iter().map(|p| p.id).collect()
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.completed.iter().find(|p| p.id == id)
    }

    pub fn average_turnaround(&self) -> f64 {
        self.totals.average_turnaround(self.count())
    }

    pub fn average_waiting(&self) -> f64 {
        self.totals.average_waiting(self.count())
    }

    pub fn average_response(&self) -> f64 {
        self.totals.average_response(self.count())
    }

    /// Ticks with no process on the CPU.
    pub fn idle_ticks(&self) -> Tick {
        let busy: Tick = self.completed.iter().map(|p| p.burst).sum();
        self.elapsed - busy
    }

    /// Collapses the timeline into contiguous segments.
    pub fn gantt_segments(&self) -> Vec<GanttSegment> {
        let mut segments: Vec<GanttSegment> = Vec::new();
        for (tick, &pid) in self.timeline.iter().enumerate() {
            let tick = tick as Tick;
            if let Some(last) = segments.last_mut() {
                if last.pid == pid {
                    last.end = tick + 1;
                    continue;
                }
            }
            segments.push(GanttSegment {
                pid,
                start: tick,
                end: tick + 1,
            });
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_with_timeline(timeline: Vec<Option<ProcessId>>) -> SimulationOutcome {
        SimulationOutcome {
            policy: Policy::Fcfs,
            completed: Vec::new(),
            totals: Totals::default(),
            elapsed: timeline.len() as Tick,
            timeline,
        }
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fcfs.name(), "FCFS");
        assert_eq!(Policy::Sjf.name(), "SJF");
        assert_eq!(Policy::RoundRobin { quantum: 2 }.name(), "RR");
        assert!(Policy::RoundRobin { quantum: 2 }.is_preemptive());
        assert!(!Policy::Sjf.is_preemptive());
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"policy":"round_robin","quantum":4}"#);
        let back: Policy = serde_json::from_str(r#"{"policy":"sjf"}"#).unwrap();
        assert_eq!(back, Policy::Sjf);
    }

    #[test]
    fn test_totals_averages() {
        let totals = Totals {
            turnaround: 19,
            waiting: 10,
            response: 10,
        };
        assert!((totals.average_turnaround(3) - 19.0 / 3.0).abs() < 1e-10);
        assert!((totals.average_waiting(3) - 10.0 / 3.0).abs() < 1e-10);
        assert!((totals.average_response(0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_gantt_segments() {
        let outcome = outcome_with_timeline(vec![Some(1), Some(1), None, Some(2), Some(1)]);
        let segments = outcome.gantt_segments();
        assert_eq!(
            segments,
            vec![
                GanttSegment {
                    pid: Some(1),
                    start: 0,
                    end: 2,
                },
                GanttSegment {
                    pid: None,
                    start: 2,
                    end: 3,
                },
                GanttSegment {
                    pid: Some(2),
                    start: 3,
                    end: 4,
                },
                GanttSegment {
                    pid: Some(1),
                    start: 4,
                    end: 5,
                },
            ]
        );
    }

    #[test]
    fn test_gantt_empty() {
        assert!(outcome_with_timeline(Vec::new()).gantt_segments().is_empty());
    }

    #[test]
    fn test_outcome_json_round_trip() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let outcome = crate::scheduler::round_robin(&processes, 2).unwrap();
        assert!(outcome.completed.iter().all(|p| p.executed > 0));

        let json = serde_json::to_string(&outcome).unwrap();
        let back: SimulationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
        assert_eq!(back.process(1).unwrap().last_dispatch, 7);
    }
}
