//! Persistence gateway
//!
//! Serialises the roster to the `form-state` record and keeps the raw text
//! of the last rendered solver response under `last-output`. Reads never
//! fail: a missing, unreadable or malformed record falls back to defaults.

use crate::error::PlannerError;
use crate::ports::key_value_store::{FORM_STATE_KEY, KeyValueStore, OUTPUT_KEY};
use planner_domain::{FormState, Roster};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything restored from durable storage at startup
#[derive(Debug, Clone)]
pub struct LoadedState {
    pub roster: Roster,
    /// Raw response text, not yet validated
    pub last_output: Option<String>,
}

/// Reads and writes the two durable records
#[derive(Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway").finish_non_exhaustive()
    }
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite `form-state` with the roster's current snapshot
    pub fn save(&self, roster: &Roster) -> Result<(), PlannerError> {
        let json = roster.snapshot().to_json().map_err(PlannerError::Serialize)?;
        self.store.set(FORM_STATE_KEY, &json)?;
        debug!("Saved form state ({} bytes)", json.len());
        Ok(())
    }

    /// Raw `form-state` text exactly as stored
    pub fn read_form_state(&self) -> Result<Option<String>, PlannerError> {
        Ok(self.store.get(FORM_STATE_KEY)?)
    }

    /// Restore the roster and the last output record
    pub fn load(&self) -> LoadedState {
        LoadedState {
            roster: self.load_roster(),
            last_output: self.load_last_output(),
        }
    }

    /// Restore the roster, falling back to the default rows
    pub fn load_roster(&self) -> Roster {
        let raw = match self.store.get(FORM_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No stored form state, starting with default rows");
                return Roster::with_default_rows();
            }
            Err(e) => {
                warn!("Could not read stored form state, using defaults: {}", e);
                return Roster::with_default_rows();
            }
        };

        match FormState::from_json(&raw) {
            Ok(state) => {
                info!(
                    "Restored form state: {} hosting, {} non-hosting, {} forbidden pairs",
                    state.hosting_couples.len(),
                    state.non_hosting_couples.len(),
                    state.forbidden_pairs.len()
                );
                Roster::hydrate(&state)
            }
            Err(e) => {
                warn!("Stored form state is malformed, using defaults: {}", e);
                Roster::with_default_rows()
            }
        }
    }

    /// Raw text of the last output, if any could be read
    pub fn load_last_output(&self) -> Option<String> {
        match self.store.get(OUTPUT_KEY) {
            Ok(output) => output,
            Err(e) => {
                warn!("Could not read stored output: {}", e);
                None
            }
        }
    }

    /// Store a solver response verbatim
    pub fn persist_output(&self, raw: &str) -> Result<(), PlannerError> {
        self.store.set(OUTPUT_KEY, raw)?;
        Ok(())
    }

    /// Drop both records
    pub fn clear(&self) -> Result<(), PlannerError> {
        self.store.remove(FORM_STATE_KEY)?;
        self.store.remove(OUTPUT_KEY)?;
        info!("Cleared stored form state and output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryStore;
    use planner_domain::{Course, CourseSet};

    fn gateway() -> (Arc<MemoryStore>, PersistenceGateway) {
        let store = Arc::new(MemoryStore::default());
        let gateway = PersistenceGateway::new(store.clone());
        (store, gateway)
    }

    #[test]
    fn test_load_without_state_gives_default_rows() {
        let (_, gateway) = gateway();
        let loaded = gateway.load();
        assert_eq!(loaded.roster.hosting().len(), 1);
        assert_eq!(loaded.roster.non_hosting().len(), 1);
        assert!(loaded.roster.pairs().is_empty());
        assert!(loaded.last_output.is_none());
    }

    #[test]
    fn test_malformed_state_falls_back_to_defaults() {
        let (store, gateway) = gateway();
        store.insert(FORM_STATE_KEY, "{not json");
        let roster = gateway.load_roster();
        assert_eq!(roster, Roster::with_default_rows());
    }

    #[test]
    fn test_unknown_course_keeps_every_row() {
        let (store, gateway) = gateway();
        store.insert(
            FORM_STATE_KEY,
            r#"{"hostingCouples":[{"name":"Alice & Bob","forbiddenCourses":["brunch"]},{"name":"Eve"}],"nonHostingCouples":[{"name":"Carol & Dave"}],"forbiddenPairs":[["Alice & Bob","Carol & Dave"]]}"#,
        );

        let roster = gateway.load_roster();
        assert_eq!(roster.couple_names(), vec!["Alice & Bob", "Eve", "Carol & Dave"]);
        assert!(roster.hosting()[0].forbidden_courses.is_empty());
        assert_eq!(roster.pairs().len(), 1);
        assert_eq!(
            roster.snapshot().forbidden_pairs,
            vec![("Alice & Bob".to_string(), "Carol & Dave".to_string())]
        );
    }

    #[test]
    fn test_short_pair_keeps_every_row() {
        let (store, gateway) = gateway();
        store.insert(
            FORM_STATE_KEY,
            r#"{"hostingCouples":[{"name":"A"}],"nonHostingCouples":[{"name":"B"}],"forbiddenPairs":[["A","B"],["A"]]}"#,
        );

        let roster = gateway.load_roster();
        assert_eq!(roster.couple_names(), vec!["A", "B"]);
        assert_eq!(roster.pairs().len(), 2);
        assert!(roster.pairs()[1].b.is_unset());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (store, gateway) = gateway();
        let mut roster = Roster::new();
        roster.add_hosting_couple("Alice & Bob", [Course::Dessert].into_iter().collect());
        roster.add_hosting_couple("Eve & Sam", CourseSet::new());
        roster.add_non_hosting_couple("Carol & Dave");
        roster.add_forbidden_pair();

        gateway.save(&roster).unwrap();
        assert!(store.value(FORM_STATE_KEY).unwrap().contains("\"hostingCouples\""));

        let restored = gateway.load_roster();
        assert_eq!(restored.snapshot(), roster.snapshot());
    }

    #[test]
    fn test_output_stored_verbatim() {
        let (store, gateway) = gateway();
        let raw = "{ \"results\" : [] }";
        gateway.persist_output(raw).unwrap();
        assert_eq!(store.value(OUTPUT_KEY).as_deref(), Some(raw));
        assert_eq!(gateway.load_last_output().as_deref(), Some(raw));
    }

    #[test]
    fn test_clear_removes_both_records() {
        let (store, gateway) = gateway();
        gateway.save(&Roster::with_default_rows()).unwrap();
        gateway.persist_output("{}").unwrap();
        gateway.clear().unwrap();
        assert!(store.value(FORM_STATE_KEY).is_none());
        assert!(store.value(OUTPUT_KEY).is_none());
    }
}
