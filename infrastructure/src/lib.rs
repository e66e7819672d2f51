//! Infrastructure layer for dinner-planner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod solver;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileSolverConfig, FileStorageConfig, Severity,
};
pub use logging::JsonlActionJournal;
pub use solver::{ProcessSolver, ProcessSolverLoader};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
