//! HTML fragment formatter
//!
//! Produces one `<div class="plan">` per plan, with courses as `<h4>`
//! headings and the host of every table in `<strong>`. All text coming
//! from the solver is escaped.

use crate::output::formatter::OutputFormatter;
use planner_domain::{NO_PLANS_MESSAGE, PlanBlock, RenderedOutput};

pub struct HtmlFormatter;

/// Escape text for use in element content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl HtmlFormatter {
    fn block(block: &PlanBlock) -> String {
        let mut html = String::from("<div class=\"plan\">\n");
        html.push_str(&format!("  <h3>{}</h3>\n", escape(&block.title())));

        let details: Vec<String> = block.details.iter().map(|d| escape(d)).collect();
        html.push_str(&format!(
            "  <div class=\"details\">{}</div>\n",
            details.join("<br>")
        ));

        for section in &block.courses {
            html.push_str(&format!("  <h4>{}</h4>\n", section.heading()));
            for line in &section.lines {
                let guests: Vec<String> = line.guests.iter().map(|g| escape(g)).collect();
                html.push_str(&format!(
                    "  <div class=\"assignment\">Host: <strong>{}</strong>; Guests: {}</div>\n",
                    escape(&line.host),
                    guests.join(", ")
                ));
            }
        }

        html.push_str("</div>\n");
        html
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, output: &RenderedOutput) -> String {
        match output {
            RenderedOutput::NoPlans => format!("<p>{}</p>\n", NO_PLANS_MESSAGE),
            RenderedOutput::Plans(blocks) => blocks.iter().map(Self::block).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_domain::PlanResponse;

    fn render(json: &str) -> String {
        let response = PlanResponse::from_json(json).unwrap();
        HtmlFormatter.format(&RenderedOutput::from_response(&response))
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A & <B>"), "A &amp; &lt;B&gt;");
        assert_eq!(escape("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(render(r#"{"results":[]}"#), "<p>No valid plans generated.</p>\n");
    }

    #[test]
    fn test_plan_block() {
        let html = render(
            r#"{"results":[{"score":7,"details":["a","b"],"plan":{"starter":[{"host":"Alice & Bob","guests":["Carol"]}]}}]}"#,
        );
        assert!(html.contains("<h3>Plan #1 (Score: 7)</h3>"));
        assert!(html.contains("<div class=\"details\">a<br>b</div>"));
        assert!(html.contains("<h4>Starter</h4>"));
        assert!(html.contains("Host: <strong>Alice &amp; Bob</strong>; Guests: Carol"));
        assert_eq!(html.matches("<div class=\"plan\">").count(), 1);
    }
}
