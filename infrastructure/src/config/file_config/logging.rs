//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// dir = "/var/log/dinner-planner"   # daily rolling diagnostic log
/// journal = true                    # also write actions.jsonl there
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for log files; console only when unset
    pub dir: Option<PathBuf>,
    /// Record every dispatched action as JSONL
    pub journal: bool,
}

impl FileLoggingConfig {
    /// Where the action journal goes, when enabled
    pub fn journal_path(&self) -> Option<PathBuf> {
        if !self.journal {
            return None;
        }
        self.dir.as_ref().map(|d| d.join("actions.jsonl"))
    }
}
