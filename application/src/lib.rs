//! Application layer for dinner-planner
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::PlannerError;
pub use ports::{
    action_journal::{ActionJournal, JournalEvent, NoActionJournal, OutcomeRecord},
    key_value_store::{FORM_STATE_KEY, KeyValueStore, OUTPUT_KEY, StoreError},
    plan_solver::{PlanSolver, SolverError, SolverLoader},
    progress::{GenerateProgress, NoProgress},
};
pub use use_cases::compute_boundary::{ComputeBoundary, ModuleStatus};
pub use use_cases::constraint_sync::{PairRowView, PairSelectors, SelectorOption, SelectorView};
pub use use_cases::persistence::{LoadedState, PersistenceGateway};
pub use use_cases::render_output::ResultRenderer;
pub use use_cases::session::{Action, ActionOutcome, PlannerSession};
