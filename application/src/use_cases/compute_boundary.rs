//! Compute boundary
//!
//! Holds the asynchronously loaded solver behind an explicit readiness
//! state. Callers never look the solver up themselves: they ask the
//! boundary, which answers with the solver or with a typed reason why
//! there is none.

use crate::error::PlannerError;
use crate::ports::plan_solver::{PlanSolver, SolverLoader};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// Readiness of the compute module
#[derive(Clone)]
enum ModuleState {
    Loading,
    Ready(Arc<dyn PlanSolver>),
    Failed(String),
}

/// Displayable summary of [`ModuleState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    Loading,
    Ready(String),
    Failed(String),
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleStatus::Loading => write!(f, "loading"),
            ModuleStatus::Ready(name) => write!(f, "ready ({name})"),
            ModuleStatus::Failed(reason) => write!(f, "unavailable ({reason})"),
        }
    }
}

/// Shared handle to the compute module's readiness
#[derive(Clone)]
pub struct ComputeBoundary {
    state: watch::Receiver<ModuleState>,
}

impl std::fmt::Debug for ComputeBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputeBoundary")
            .field("status", &self.status())
            .finish()
    }
}

impl ComputeBoundary {
    /// Start loading the solver in the background.
    ///
    /// Must be called from within a tokio runtime. A failed load is final
    /// for the lifetime of this boundary.
    pub fn start(loader: Arc<dyn SolverLoader>) -> Self {
        let (tx, rx) = watch::channel(ModuleState::Loading);
        tokio::spawn(async move {
            let state = match loader.load().await {
                Ok(solver) => {
                    info!("Compute module ready: {}", solver.name());
                    ModuleState::Ready(solver)
                }
                Err(e) => {
                    error!("Failed to load compute module: {}", e);
                    ModuleState::Failed(e.to_string())
                }
            };
            let _ = tx.send(state);
        });
        Self { state: rx }
    }

    /// A boundary whose solver is already loaded
    pub fn ready(solver: Arc<dyn PlanSolver>) -> Self {
        let (_tx, rx) = watch::channel(ModuleState::Ready(solver));
        Self { state: rx }
    }

    /// A boundary that will never have a solver
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let (_tx, rx) = watch::channel(ModuleState::Failed(reason.into()));
        Self { state: rx }
    }

    pub fn status(&self) -> ModuleStatus {
        match &*self.state.borrow() {
            ModuleState::Loading => ModuleStatus::Loading,
            ModuleState::Ready(solver) => ModuleStatus::Ready(solver.name().to_string()),
            ModuleState::Failed(reason) => ModuleStatus::Failed(reason.clone()),
        }
    }

    /// The loaded solver, or why there is none right now
    pub fn solver(&self) -> Result<Arc<dyn PlanSolver>, PlannerError> {
        match &*self.state.borrow() {
            ModuleState::Loading => Err(PlannerError::MissingComputeModule),
            ModuleState::Ready(solver) => Ok(solver.clone()),
            ModuleState::Failed(reason) => {
                Err(PlannerError::ComputeModuleLoadFailure(reason.clone()))
            }
        }
    }

    /// Wait until loading has either succeeded or failed
    pub async fn settled(&self) -> ModuleStatus {
        let mut rx = self.state.clone();
        // A dropped sender leaves the last value in place, which is still
        // Loading only if the loader task panicked.
        let _ = rx
            .wait_for(|state| !matches!(state, ModuleState::Loading))
            .await;
        self.status()
    }
}
