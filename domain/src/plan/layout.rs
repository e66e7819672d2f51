//! Display layout for solver results
//!
//! [`RenderedOutput`] is what the output region shows. It is derived
//! purely from a [`PlanResponse`], so building it twice from the same
//! response yields the same value.

use super::response::{AssignmentGroup, PlanResponse, PlanResult};
use crate::core::course::Course;
use serde::Serialize;

/// Message shown instead of an empty output region
pub const NO_PLANS_MESSAGE: &str = "No valid plans generated.";

/// Everything the output region displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderedOutput {
    NoPlans,
    Plans(Vec<PlanBlock>),
}

impl RenderedOutput {
    pub fn from_response(response: &PlanResponse) -> Self {
        if response.results.is_empty() {
            return RenderedOutput::NoPlans;
        }
        RenderedOutput::Plans(
            response
                .results
                .iter()
                .enumerate()
                .map(|(idx, result)| PlanBlock::new(idx + 1, result))
                .collect(),
        )
    }

    pub fn blocks(&self) -> &[PlanBlock] {
        match self {
            RenderedOutput::NoPlans => &[],
            RenderedOutput::Plans(blocks) => blocks,
        }
    }
}

/// One titled plan, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanBlock {
    pub number: usize,
    pub score: String,
    pub details: Vec<String>,
    pub courses: Vec<CourseSection>,
}

impl PlanBlock {
    fn new(number: usize, result: &PlanResult) -> Self {
        let courses = Course::ALL
            .into_iter()
            .filter_map(|course| {
                result.groups_for(course).map(|groups| CourseSection {
                    course,
                    lines: groups.iter().map(AssignmentLine::from).collect(),
                })
            })
            .collect();

        Self {
            number,
            score: display_score(&result.score),
            details: result.details.clone(),
            courses,
        }
    }

    /// `Plan #1 (Score: 7)`
    pub fn title(&self) -> String {
        format!("Plan #{} (Score: {})", self.number, self.score)
    }
}

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render a score the way a browser prints a JS number: `7.0` as `7`
fn display_score(score: &serde_json::Number) -> String {
    let integral = score
        .as_f64()
        .filter(|value| score.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER);
    match integral {
        Some(value) => format!("{}", value as i64),
        None => score.to_string(),
    }
}

/// All tables of one course, in solver order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSection {
    pub course: Course,
    pub lines: Vec<AssignmentLine>,
}

impl CourseSection {
    pub fn heading(&self) -> &'static str {
        self.course.label()
    }
}

/// One table: the host and the comma-joined guests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentLine {
    pub host: String,
    pub guests: Vec<String>,
}

impl AssignmentLine {
    pub fn guest_list(&self) -> String {
        self.guests.join(", ")
    }
}

impl From<&AssignmentGroup> for AssignmentLine {
    fn from(group: &AssignmentGroup) -> Self {
        Self {
            host: group.host.name.clone(),
            guests: group.guests.iter().map(|g| g.name.clone()).collect(),
        }
    }
}

impl std::fmt::Display for AssignmentLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Host: {}; Guests: {}", self.host, self.guest_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(json: &str) -> RenderedOutput {
        RenderedOutput::from_response(&PlanResponse::from_json(json).unwrap())
    }

    #[test]
    fn test_single_main_course_plan() {
        let output = layout(
            r#"{"results":[{"score":7,"details":["ok"],"plan":{"main":[{"Host":{"Name":"Alice"},"Guests":[{"Name":"Bob"}]}]}}]}"#,
        );
        let blocks = output.blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title(), "Plan #1 (Score: 7)");
        assert_eq!(blocks[0].details, vec!["ok"]);
        assert_eq!(blocks[0].courses.len(), 1);
        assert_eq!(blocks[0].courses[0].heading(), "Main");
        assert_eq!(
            blocks[0].courses[0].lines[0].to_string(),
            "Host: Alice; Guests: Bob"
        );
    }

    #[test]
    fn test_courses_follow_serving_order() {
        let output = layout(
            r#"{"results":[{"score":1,"details":[],"plan":{
                "dessert":[{"host":"C","guests":[]}],
                "starter":[{"host":"A","guests":["B","D"]}]}}]}"#,
        );
        let sections = &output.blocks()[0].courses;
        assert_eq!(sections[0].course, Course::Starter);
        assert_eq!(sections[1].course, Course::Dessert);
        assert_eq!(sections[0].lines[0].to_string(), "Host: A; Guests: B, D");
        assert_eq!(sections[1].lines[0].to_string(), "Host: C; Guests: ");
    }

    #[test]
    fn test_plans_numbered_in_order() {
        let output = layout(
            r#"{"results":[{"score":9,"details":["b","a"]},{"score":3,"details":[]}]}"#,
        );
        let titles: Vec<String> = output.blocks().iter().map(PlanBlock::title).collect();
        assert_eq!(titles, vec!["Plan #1 (Score: 9)", "Plan #2 (Score: 3)"]);
        assert_eq!(output.blocks()[0].details, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_results_is_no_plans() {
        assert_eq!(layout(r#"{"results":[]}"#), RenderedOutput::NoPlans);
        assert_eq!(layout("{}"), RenderedOutput::NoPlans);
    }

    #[test]
    fn test_integral_float_score_drops_fraction() {
        let output = layout(
            r#"{"results":[{"score":7.0},{"score":2.5},{"score":-3.0},{"score":12}]}"#,
        );
        let titles: Vec<String> = output.blocks().iter().map(PlanBlock::title).collect();
        assert_eq!(
            titles,
            vec![
                "Plan #1 (Score: 7)",
                "Plan #2 (Score: 2.5)",
                "Plan #3 (Score: -3)",
                "Plan #4 (Score: 12)",
            ]
        );
    }

    #[test]
    fn test_null_course_has_no_section() {
        let output = layout(
            r#"{"results":[{"score":1,"plan":{"starter":null,"main":[{"host":"A","guests":["B"]}]}}]}"#,
        );
        let sections = &output.blocks()[0].courses;
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Main");
    }
}
