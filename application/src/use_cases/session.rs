//! Planner session: the single dispatch point for form edits
//!
//! A [`PlannerSession`] owns the roster, the selector views derived from
//! it, and the current output region. Every edit goes through
//! [`PlannerSession::dispatch`], which applies the mutation, refreshes the
//! pair selectors and persists the form before returning. The session is
//! therefore consistent and durable after each discrete action.

use crate::error::PlannerError;
use crate::ports::action_journal::{
    ActionJournal, JournalEvent, NoActionJournal, OutcomeRecord, selector_target,
};
use crate::ports::key_value_store::KeyValueStore;
use crate::ports::progress::GenerateProgress;
use crate::use_cases::compute_boundary::ComputeBoundary;
use crate::use_cases::constraint_sync::PairSelectors;
use crate::use_cases::persistence::{LoadedState, PersistenceGateway};
use crate::use_cases::render_output::ResultRenderer;
use planner_domain::{
    CoupleId, CoupleKind, Course, CourseSet, PairId, PairSide, RenderedOutput, Roster,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Every edit the form supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddHostingCouple {
        name: String,
    },
    AddNonHostingCouple {
        name: String,
    },
    RemoveCouple(CoupleId),
    RenameCouple {
        id: CoupleId,
        name: String,
    },
    ToggleForbiddenCourse {
        id: CoupleId,
        course: Course,
    },
    AddForbiddenPair,
    RemoveForbiddenPair(PairId),
    ChangeForbiddenSelector {
        pair: PairId,
        side: PairSide,
        couple: Option<CoupleId>,
    },
    Save,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddHostingCouple { .. } => "add-hosting-couple",
            Action::AddNonHostingCouple { .. } => "add-nonhosting-couple",
            Action::RemoveCouple(_) => "remove-couple-row",
            Action::RenameCouple { .. } => "rename-couple",
            Action::ToggleForbiddenCourse { .. } => "toggle-forbidden-course",
            Action::AddForbiddenPair => "add-forbidden-pair",
            Action::RemoveForbiddenPair(_) => "remove-forbidden-pair",
            Action::ChangeForbiddenSelector { .. } => "change-forbidden-selector",
            Action::Save => "save",
        }
    }

    /// The row this action addresses, if it addresses one
    pub fn target(&self) -> Option<String> {
        match self {
            Action::RemoveCouple(id)
            | Action::RenameCouple { id, .. }
            | Action::ToggleForbiddenCourse { id, .. } => Some(id.to_string()),
            Action::RemoveForbiddenPair(pair) => Some(pair.to_string()),
            Action::ChangeForbiddenSelector { pair, side, .. } => {
                Some(selector_target(*pair, *side))
            }
            Action::AddHostingCouple { .. }
            | Action::AddNonHostingCouple { .. }
            | Action::AddForbiddenPair
            | Action::Save => None,
        }
    }
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    CoupleAdded(CoupleId),
    CoupleRemoved(CoupleKind),
    CoupleRenamed,
    CourseToggled { course: Course, forbidden: bool },
    PairAdded(PairId),
    PairRemoved,
    SelectorChanged,
    Saved,
}

impl From<&ActionOutcome> for OutcomeRecord {
    fn from(outcome: &ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::CoupleAdded(id) => OutcomeRecord::created_couple(*id),
            ActionOutcome::PairAdded(id) => OutcomeRecord::created_pair(*id),
            ActionOutcome::CoupleRemoved(kind) => OutcomeRecord::RemovedCouple(*kind),
            ActionOutcome::CourseToggled { course, forbidden } => OutcomeRecord::Course {
                course: *course,
                forbidden: *forbidden,
            },
            ActionOutcome::CoupleRenamed
            | ActionOutcome::PairRemoved
            | ActionOutcome::SelectorChanged
            | ActionOutcome::Saved => OutcomeRecord::Done,
        }
    }
}

/// The live form plus everything needed to persist and solve it
pub struct PlannerSession {
    roster: Roster,
    selectors: PairSelectors,
    output: Option<RenderedOutput>,
    gateway: PersistenceGateway,
    renderer: ResultRenderer,
    compute: ComputeBoundary,
    journal: Arc<dyn ActionJournal>,
}

impl std::fmt::Debug for PlannerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerSession")
            .field("roster", &self.roster)
            .field("output", &self.output)
            .field("compute", &self.compute)
            .finish_non_exhaustive()
    }
}

impl PlannerSession {
    /// Restore the form and the last output from storage.
    ///
    /// A stored output is re-rendered as-is; the solver is not contacted.
    pub fn open(store: Arc<dyn KeyValueStore>, compute: ComputeBoundary) -> Self {
        let gateway = PersistenceGateway::new(store);
        let renderer = ResultRenderer::new(gateway.clone());
        let LoadedState {
            roster,
            last_output,
        } = gateway.load();

        let mut session = Self {
            selectors: PairSelectors::for_roster(&roster),
            roster,
            output: None,
            gateway,
            renderer,
            compute,
            journal: Arc::new(NoActionJournal),
        };

        if let Some(raw) = last_output {
            match session.renderer.render(&raw) {
                Ok(output) => {
                    info!("Restored previous output ({} plan(s))", output.blocks().len());
                    session.output = Some(output);
                }
                Err(e) => warn!("Ignoring stored output: {}", e),
            }
        }

        session
    }

    /// Create with an action journal.
    pub fn with_journal(mut self, journal: Arc<dyn ActionJournal>) -> Self {
        self.journal = journal;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selectors(&self) -> &PairSelectors {
        &self.selectors
    }

    /// Current content of the output region, if anything was rendered
    pub fn output(&self) -> Option<&RenderedOutput> {
        self.output.as_ref()
    }

    pub fn compute(&self) -> &ComputeBoundary {
        &self.compute
    }

    /// Apply one edit, then resynchronise selectors and persist.
    ///
    /// A rejected edit leaves the roster untouched and writes nothing.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, PlannerError> {
        debug!("Dispatching {:?}", action);
        let outcome = self.apply(&action)?;

        self.selectors.refresh(&self.roster);
        self.gateway.save(&self.roster)?;

        self.journal.record(JournalEvent::Action {
            action: action.name(),
            target: action.target(),
            outcome: OutcomeRecord::from(&outcome),
        });
        Ok(outcome)
    }

    fn apply(&mut self, action: &Action) -> Result<ActionOutcome, PlannerError> {
        let outcome = match action {
            Action::AddHostingCouple { name } => ActionOutcome::CoupleAdded(
                self.roster.add_hosting_couple(name.clone(), CourseSet::new()),
            ),
            Action::AddNonHostingCouple { name } => {
                ActionOutcome::CoupleAdded(self.roster.add_non_hosting_couple(name.clone()))
            }
            Action::RemoveCouple(id) => {
                ActionOutcome::CoupleRemoved(self.roster.remove_couple(*id)?)
            }
            Action::RenameCouple { id, name } => {
                self.roster.rename_couple(*id, name.clone())?;
                ActionOutcome::CoupleRenamed
            }
            Action::ToggleForbiddenCourse { id, course } => ActionOutcome::CourseToggled {
                course: *course,
                forbidden: self.roster.toggle_forbidden_course(*id, *course)?,
            },
            Action::AddForbiddenPair => ActionOutcome::PairAdded(self.roster.add_forbidden_pair()),
            Action::RemoveForbiddenPair(id) => {
                self.roster.remove_forbidden_pair(*id)?;
                ActionOutcome::PairRemoved
            }
            Action::ChangeForbiddenSelector { pair, side, couple } => {
                self.roster.select(*pair, *side, *couple)?;
                ActionOutcome::SelectorChanged
            }
            Action::Save => ActionOutcome::Saved,
        };
        Ok(outcome)
    }

    /// Save, hand the saved form to the solver and render its answer.
    ///
    /// The solver always receives exactly the record just written. Without
    /// a loaded compute module nothing is sent and the output region is
    /// left as it was.
    pub async fn generate(
        &mut self,
        progress: &dyn GenerateProgress,
    ) -> Result<&RenderedOutput, PlannerError> {
        info!("Generate requested");
        self.gateway.save(&self.roster)?;
        let input = self
            .gateway
            .read_form_state()?
            .ok_or(PlannerError::MissingFormState)?;

        let solver = self.compute.solver().inspect_err(|e| {
            error!("Cannot generate: {}", e);
            self.journal.record(JournalEvent::GenerateRefused {
                reason: e.to_string(),
            });
        })?;

        debug!("Calling solver '{}' with {} bytes", solver.name(), input.len());
        self.journal.record(JournalEvent::GenerateStarted {
            solver: solver.name().to_string(),
            input: input.clone(),
        });

        progress.on_generate_start(solver.name());
        let result = solver.generate_plan(&input).await;
        progress.on_generate_complete(result.is_ok());

        let raw = result.inspect_err(|e| error!("Solver failed: {}", e))?;
        self.render_output(&raw)
    }

    /// Replace the output region with a freshly rendered response
    pub fn render_output(&mut self, raw: &str) -> Result<&RenderedOutput, PlannerError> {
        let output = self.renderer.render(raw)?;
        self.journal.record(JournalEvent::Rendered {
            plans: output.blocks().len(),
            bytes: raw.len(),
        });
        Ok(self.output.insert(output))
    }

    /// Forget everything stored and start over with the default rows
    pub fn reset(&mut self) -> Result<(), PlannerError> {
        self.gateway.clear()?;
        self.roster = Roster::with_default_rows();
        self.selectors.refresh(&self.roster);
        self.output = None;
        self.journal.record(JournalEvent::Reset);
        Ok(())
    }
}
