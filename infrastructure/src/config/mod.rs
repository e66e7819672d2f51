//! Configuration file loading for dinner-planner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PLANNER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./planner.toml` or `./.planner.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dinner-planner/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileSolverConfig, FileStorageConfig, Severity,
};
pub use loader::ConfigLoader;
