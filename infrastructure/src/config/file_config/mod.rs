//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod repl;
mod solver;
mod storage;

pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use solver::FileSolverConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the form and last output are stored
    pub storage: FileStorageConfig,
    /// External solver command
    pub solver: FileSolverConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file and action journal settings
    pub logging: FileLoggingConfig,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem detected while validating configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.solver.command.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "solver.command",
                message: "solver.command is empty; generate will be unavailable".to_string(),
            });
        }

        if self.solver.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "solver.timeout_secs",
                message: "solver.timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.logging.journal && self.logging.dir.is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "logging.journal",
                message: "logging.journal is enabled but logging.dir is not set; journal disabled"
                    .to_string(),
            });
        }

        if !self.storage.ephemeral && self.storage.resolved_dir().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "storage.dir",
                message: "no storage.dir configured and no platform data directory found; \
                          the form will not be saved"
                    .to_string(),
            });
        }

        issues
    }
}
