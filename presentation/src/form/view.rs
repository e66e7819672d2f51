//! Text rendering of the form

use colored::Colorize;
use planner_application::{ModuleStatus, PairRowView, PairSelectors, SelectorView};
use planner_domain::{Course, Roster};

const NAME_WIDTH: usize = 24;

/// Renders the roster and its pair selectors for the terminal
pub struct FormView;

impl FormView {
    pub fn render(roster: &Roster, selectors: &PairSelectors, status: &ModuleStatus) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Hosting couples".cyan().bold()));
        if roster.hosting().is_empty() {
            out.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for couple in roster.hosting() {
            let courses: Vec<String> = Course::ALL
                .into_iter()
                .map(|course| {
                    let mark = if couple.forbidden_courses.contains(course) {
                        "x"
                    } else {
                        " "
                    };
                    format!("[{}] {}", mark, course)
                })
                .collect();
            out.push_str(&format!(
                "  {:<5} {} no: {}\n",
                format!("[{}]", couple.id),
                Self::name_cell(&couple.name, NAME_WIDTH),
                courses.join(" ")
            ));
        }

        out.push_str(&format!("\n{}\n", "Non-hosting couples".cyan().bold()));
        if roster.non_hosting().is_empty() {
            out.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for couple in roster.non_hosting() {
            out.push_str(&format!(
                "  {:<5} {}\n",
                format!("[{}]", couple.id),
                Self::name(&couple.name)
            ));
        }

        out.push_str(&format!("\n{}\n", "Forbidden pairs".cyan().bold()));
        if selectors.rows().is_empty() {
            out.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for row in selectors.rows() {
            out.push_str(&Self::pair_row(row));
        }

        out.push_str(&format!("\n{} {}\n", "Solver:".bold(), status));
        out
    }

    fn name(name: &str) -> String {
        Self::name_cell(name, 0)
    }

    /// Pads the plain text before styling so escape codes never count
    /// towards the width
    fn name_cell(name: &str, width: usize) -> String {
        if name.is_empty() {
            format!("{:<width$}", "(unnamed)").dimmed().to_string()
        } else {
            format!("{:<width$}", name)
        }
    }

    fn pair_row(row: &PairRowView) -> String {
        format!(
            "  {:<5} {}  <->  {}\n",
            format!("[{}]", row.pair),
            Self::selector(&row.a, row.stale[0].as_deref()),
            Self::selector(&row.b, row.stale[1].as_deref())
        )
    }

    /// What a selector shows: its choice, a missing stored name, or the
    /// option a dropdown would fall back to
    fn selector(view: &SelectorView, stale: Option<&str>) -> String {
        if let Some(option) = view.selected_option() {
            return Self::name(&option.label);
        }
        if let Some(name) = stale {
            return format!("{} {}", name, "(missing)".red());
        }
        match view.effective() {
            Some(option) => format!("{} {}", Self::name(&option.label), "(unset)".dimmed()),
            None => "-".dimmed().to_string(),
        }
    }
}
