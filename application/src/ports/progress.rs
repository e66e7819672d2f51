//! Progress notification port
//!
//! Defines the interface for reporting progress while the solver runs.

/// Callback for progress updates during plan generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, nothing at all).
pub trait GenerateProgress: Send + Sync {
    /// Called right before the solver is invoked
    fn on_generate_start(&self, solver: &str);

    /// Called once the solver has answered or failed
    fn on_generate_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
#[derive(Debug)]
pub struct NoProgress;

impl GenerateProgress for NoProgress {
    fn on_generate_start(&self, _solver: &str) {}
    fn on_generate_complete(&self, _success: bool) {}
}
