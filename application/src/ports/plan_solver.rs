//! Plan solver port
//!
//! The solver is an opaque external component: it receives the JSON form
//! snapshot and answers with the JSON plan response. It becomes available
//! asynchronously through a [`SolverLoader`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading or invoking the solver
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Solver not found: {0}")]
    NotFound(String),

    #[error("Failed to start solver: {0}")]
    SpawnError(#[from] std::io::Error),

    #[error("Solver exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Solver produced non-UTF-8 output")]
    InvalidOutput,

    #[error("Solver timed out after {0:?}")]
    Timeout(Duration),

    #[error("Other error: {0}")]
    Other(String),
}

/// A loaded solver, ready to turn form snapshots into plans
#[async_trait]
pub trait PlanSolver: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Send the form snapshot and return the raw response text
    async fn generate_plan(&self, input_json: &str) -> Result<String, SolverError>;
}

/// Asynchronous initialisation of the solver
#[async_trait]
pub trait SolverLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn PlanSolver>, SolverError>;
}
