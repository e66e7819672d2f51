//! Result renderer
//!
//! Turns raw solver response text into the display layout. Parsing comes
//! first: a response that does not parse is neither persisted nor shown.

use crate::error::PlannerError;
use crate::use_cases::persistence::PersistenceGateway;
use planner_domain::{PlanResponse, RenderedOutput};
use tracing::{debug, warn};

/// Parses, persists and lays out solver responses
#[derive(Debug, Clone)]
pub struct ResultRenderer {
    gateway: PersistenceGateway,
}

impl ResultRenderer {
    pub fn new(gateway: PersistenceGateway) -> Self {
        Self { gateway }
    }

    /// Render a response and store it verbatim under `last-output`.
    ///
    /// Idempotent: the same input always yields the same layout and the
    /// same stored bytes.
    pub fn render(&self, raw: &str) -> Result<RenderedOutput, PlannerError> {
        let response = PlanResponse::from_json(raw).map_err(|e| {
            warn!("Solver response is malformed: {}", e);
            PlannerError::MalformedSolverResponse(e)
        })?;

        self.gateway.persist_output(raw)?;

        let output = RenderedOutput::from_response(&response);
        debug!("Rendered {} plan(s)", output.blocks().len());
        Ok(output)
    }
}
