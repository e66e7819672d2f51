//! Persisted form of a roster
//!
//! This is the exact JSON contract written under the `form-state` key and
//! handed verbatim to the solver:
//!
//! ```json
//! {
//!   "hostingCouples": [{ "name": "Alice & Bob", "forbiddenCourses": ["dessert"] }],
//!   "nonHostingCouples": [{ "name": "Carol & Dave" }],
//!   "forbiddenPairs": [["Alice & Bob", "Carol & Dave"]]
//! }
//! ```
//!
//! Couples are referenced by name here; the roster resolves names back
//! to ids when it is hydrated.
//!
//! Reading is lenient below the record level: an unknown course name is
//! skipped and a pair with fewer than two names is padded with `""`, so a
//! single odd entry never discards the rest of the stored form.

use crate::core::course::{Course, CourseSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Snapshot of every row of the form, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub hosting_couples: Vec<HostingCoupleRecord>,
    #[serde(default)]
    pub non_hosting_couples: Vec<NonHostingCoupleRecord>,
    #[serde(default, deserialize_with = "lenient_pairs")]
    pub forbidden_pairs: Vec<(String, String)>,
}

impl FormState {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingCoupleRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_courses")]
    pub forbidden_courses: CourseSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonHostingCoupleRecord {
    #[serde(default)]
    pub name: String,
}

/// Courses that parse; anything else is dropped with a warning
fn lenient_courses<'de, D>(deserializer: D) -> Result<CourseSet, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .iter()
        .filter_map(|entry| {
            let course = entry.as_str().and_then(|s| s.parse::<Course>().ok());
            if course.is_none() {
                warn!("Skipping unknown forbidden course {}", entry);
            }
            course
        })
        .collect())
}

/// Each pair's first two entries; a missing or non-string name reads as `""`
fn lenient_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let Value::Array(names) = entry else {
                warn!("Skipping forbidden pair that is not a list: {}", entry);
                return None;
            };
            if names.len() != 2 {
                warn!("Forbidden pair has {} names, expected 2", names.len());
            }
            let name = |idx: usize| {
                names
                    .get(idx)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Some((name(0), name(1)))
        })
        .collect())
}
