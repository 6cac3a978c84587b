//! Simulation configuration.
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(r#"{"capacity": 8}"#).unwrap();
//! assert_eq!(config.capacity, 8);
//! assert!(config.record_timeline);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;

/// Default maximum number of processes per run.
pub const DEFAULT_CAPACITY: usize = 100;

/// Per-run settings shared by all policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of processes a run accepts.
    pub capacity: usize,
    /// Whether to keep the per-tick CPU timeline in the outcome.
    pub record_timeline: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            record_timeline: true,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the process capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables timeline recording.
    pub fn with_timeline(mut self, record: bool) -> Self {
        self.record_timeline = record;
        self
    }

    /// Parses a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
