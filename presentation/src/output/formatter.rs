//! Output formatter trait

use planner_domain::RenderedOutput;

/// Trait for formatting the output region
pub trait OutputFormatter {
    /// Format everything the output region shows
    fn format(&self, output: &RenderedOutput) -> String;
}
