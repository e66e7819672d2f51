//! Solver output contract
//!
//! The solver answers with `{ "results": [ PlanResult, ... ] }`. Field names
//! are accepted both in lowercase and in the capitalised form some solvers
//! emit (`Score`, `Details`, `Plan`, `Host`, `Guests`, `Name`).
//!
//! Only the three course keys of a plan are read. A course that is `null`
//! counts as absent, and any other key is ignored whatever its value.

use crate::core::course::Course;
use serde::{Deserialize, Deserializer, Serialize};

/// Root of a solver response (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default, alias = "Results")]
    pub results: Vec<PlanResult>,
}

impl PlanResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One candidate plan with its score and explanation lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Kept as a JSON number so integers render without a fractional part
    #[serde(alias = "Score")]
    pub score: serde_json::Number,
    #[serde(default, alias = "Details")]
    pub details: Vec<String>,
    #[serde(default, alias = "Plan", deserialize_with = "null_as_default")]
    pub plan: CoursePlan,
}

impl PlanResult {
    /// Groups for a course, if the plan has an entry for it
    pub fn groups_for(&self, course: Course) -> Option<&[AssignmentGroup]> {
        self.plan.course(course)
    }
}

/// Tables per course; `None` when the solver left the course out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePlan {
    #[serde(default, alias = "Starter", skip_serializing_if = "Option::is_none")]
    pub starter: Option<Vec<AssignmentGroup>>,
    #[serde(default, alias = "Main", skip_serializing_if = "Option::is_none")]
    pub main: Option<Vec<AssignmentGroup>>,
    #[serde(default, alias = "Dessert", skip_serializing_if = "Option::is_none")]
    pub dessert: Option<Vec<AssignmentGroup>>,
}

impl CoursePlan {
    pub fn course(&self, course: Course) -> Option<&[AssignmentGroup]> {
        match course {
            Course::Starter => self.starter.as_deref(),
            Course::Main => self.main.as_deref(),
            Course::Dessert => self.dessert.as_deref(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One table for one course: a host and the guests it receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentGroup {
    #[serde(alias = "Host")]
    pub host: CoupleRef,
    #[serde(default, alias = "Guests")]
    pub guests: Vec<CoupleRef>,
}

/// A couple named in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CoupleRefRepr")]
pub struct CoupleRef {
    pub name: String,
}

impl CoupleRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Wire forms of a couple reference: `"Alice"` or `{"Name": "Alice"}`
#[derive(Deserialize)]
#[serde(untagged)]
enum CoupleRefRepr {
    Bare(String),
    Object {
        #[serde(alias = "Name")]
        name: String,
    },
}

impl From<CoupleRefRepr> for CoupleRef {
    fn from(repr: CoupleRefRepr) -> Self {
        match repr {
            CoupleRefRepr::Bare(name) | CoupleRefRepr::Object { name } => Self { name },
        }
    }
}
