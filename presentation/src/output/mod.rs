//! Output formatting for rendered plans

pub mod console;
pub mod formatter;
pub mod html;
pub mod json;

use formatter::OutputFormatter;
use planner_domain::OutputFormat;

/// Pick the formatter for a configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Html => Box::new(html::HtmlFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
