//! Application error types

use crate::ports::key_value_store::StoreError;
use crate::ports::plan_solver::SolverError;
use planner_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by planner use cases
///
/// Every variant is terminal for the single action that produced it;
/// none of them invalidates the session.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize form state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Form state missing from storage right after saving")]
    MissingFormState,

    #[error("Compute module is not loaded yet")]
    MissingComputeModule,

    #[error("Compute module failed to load: {0}")]
    ComputeModuleLoadFailure(String),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Malformed solver response: {0}")]
    MalformedSolverResponse(#[source] serde_json::Error),
}

impl PlannerError {
    /// Check if this error comes from the compute boundary
    pub fn is_compute_failure(&self) -> bool {
        matches!(
            self,
            PlannerError::MissingComputeModule
                | PlannerError::ComputeModuleLoadFailure(_)
                | PlannerError::Solver(_)
                | PlannerError::MalformedSolverResponse(_)
        )
    }
}
