//! Port for the action journal
//!
//! The journal is a machine-readable history of what happened to the form:
//! each dispatched action with its outcome, each generate request and each
//! rendered response. `tracing` carries the human-readable diagnostics;
//! adapters of this port decide how events are stored.

use planner_domain::{CoupleId, CoupleKind, Course, PairId, PairSide};
use std::fmt;

/// One entry of the action journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEvent {
    /// An action was applied and persisted
    Action {
        /// [`Action::name`](crate::use_cases::session::Action::name)
        action: &'static str,
        /// Row the action targeted, e.g. `c2` or `p1.b`
        target: Option<String>,
        outcome: OutcomeRecord,
    },
    /// The saved form was handed to the solver
    GenerateStarted { solver: String, input: String },
    /// Generate was refused before reaching a solver
    GenerateRefused { reason: String },
    /// A solver response replaced the output region
    Rendered { plans: usize, bytes: usize },
    /// Storage was cleared and the default rows restored
    Reset,
}

impl JournalEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            JournalEvent::Action { .. } => "action",
            JournalEvent::GenerateStarted { .. } => "generate",
            JournalEvent::GenerateRefused { .. } => "generate_refused",
            JournalEvent::Rendered { .. } => "render",
            JournalEvent::Reset => "reset",
        }
    }
}

/// The part of an action's outcome worth keeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeRecord {
    /// A row was created with this id
    Created(String),
    /// A couple row of this kind was removed
    RemovedCouple(CoupleKind),
    /// A course restriction now has this state
    Course { course: Course, forbidden: bool },
    /// Applied with nothing further to report
    Done,
}

impl OutcomeRecord {
    pub fn created_couple(id: CoupleId) -> Self {
        OutcomeRecord::Created(id.to_string())
    }

    pub fn created_pair(id: PairId) -> Self {
        OutcomeRecord::Created(id.to_string())
    }
}

impl fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeRecord::Created(id) => write!(f, "created {}", id),
            OutcomeRecord::RemovedCouple(CoupleKind::Hosting) => f.write_str("removed hosting"),
            OutcomeRecord::RemovedCouple(CoupleKind::NonHosting) => {
                f.write_str("removed non-hosting")
            }
            OutcomeRecord::Course { course, forbidden } => {
                let state = if *forbidden { "forbidden" } else { "allowed" };
                write!(f, "{} {}", course, state)
            }
            OutcomeRecord::Done => f.write_str("done"),
        }
    }
}

/// Format a selector target as `p1.a`
pub fn selector_target(pair: PairId, side: PairSide) -> String {
    format!("{}.{}", pair, side.as_str())
}

/// Port for recording journal events.
///
/// `record` is synchronous and non-fallible; a failed write must never
/// abort the action being journaled.
pub trait ActionJournal: Send + Sync {
    fn record(&self, event: JournalEvent);
}

/// No-op implementation for tests and when journaling is disabled.
#[derive(Debug)]
pub struct NoActionJournal;

impl ActionJournal for NoActionJournal {
    fn record(&self, _event: JournalEvent) {}
}
