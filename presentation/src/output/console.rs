//! Console output formatter for rendered plans

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use planner_domain::{AssignmentLine, NO_PLANS_MESSAGE, PlanBlock, RenderedOutput};

/// Formats plans for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn block(block: &PlanBlock) -> String {
        let mut output = format!("{}\n", block.title().cyan().bold());

        for detail in &block.details {
            output.push_str(&format!("  {}\n", detail.dimmed()));
        }

        for section in &block.courses {
            output.push_str(&format!("\n{}\n", section.heading().yellow().bold()));
            for line in &section.lines {
                output.push_str(&format!("  {}\n", Self::line(line)));
            }
        }

        output
    }

    fn line(line: &AssignmentLine) -> String {
        format!("Host: {}; Guests: {}", line.host.bold(), line.guest_list())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RenderedOutput) -> String {
        match output {
            RenderedOutput::NoPlans => format!("{}\n", NO_PLANS_MESSAGE),
            RenderedOutput::Plans(blocks) => blocks
                .iter()
                .map(Self::block)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
