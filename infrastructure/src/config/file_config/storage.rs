//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
///
/// # Example
///
/// ```toml
/// [storage]
/// dir = "~/.local/share/dinner-planner"
/// ephemeral = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding `form-state.json` and `last-output.json`
    pub dir: Option<PathBuf>,
    /// Keep the form in memory only; set by `--ephemeral`
    pub ephemeral: bool,
}

impl FileStorageConfig {
    /// Configured directory, else the platform data directory
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("dinner-planner")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let config = FileStorageConfig {
            dir: Some(PathBuf::from("/tmp/planner")),
            ephemeral: false,
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/planner")));
    }

    #[test]
    fn test_ephemeral_from_toml() {
        let config: FileStorageConfig = toml::from_str("ephemeral = true").unwrap();
        assert!(config.ephemeral);
        assert!(config.dir.is_none());
    }
}
