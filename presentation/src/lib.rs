//! Presentation layer for dinner-planner
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive form editor.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use form::{FormRepl, FormView};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::html::HtmlFormatter;
pub use output::json::JsonFormatter;
pub use progress::reporter::ProgressReporter;
