//! JSON formatter for scripting

use crate::output::formatter::OutputFormatter;
use planner_domain::RenderedOutput;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, output: &RenderedOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_plans() {
        assert_eq!(JsonFormatter.format(&RenderedOutput::NoPlans), "\"NoPlans\"");
    }
}
