//! Solver configuration from TOML (`[solver]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw solver configuration from TOML
///
/// # Example
///
/// ```toml
/// [solver]
/// command = "planner-solver"
/// args = ["--plans", "3"]
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolverConfig {
    /// Executable resolved on `PATH`; reads the form on stdin, writes plans to stdout
    pub command: String,
    /// Extra arguments passed to the solver
    pub args: Vec<String>,
    /// Upper bound for a single solver run
    pub timeout_secs: u64,
}

impl Default for FileSolverConfig {
    fn default() -> Self {
        Self {
            command: "planner-solver".to_string(),
            args: Vec::new(),
            timeout_secs: 60,
        }
    }
}

impl FileSolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
