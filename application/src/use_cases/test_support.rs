//! In-memory doubles shared by the use case tests

use crate::ports::action_journal::{ActionJournal, JournalEvent};
use crate::ports::key_value_store::{KeyValueStore, StoreError};
use crate::ports::plan_solver::{PlanSolver, SolverError, SolverLoader};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub(crate) fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Answers every request with a fixed response and remembers the inputs
pub(crate) struct CannedSolver {
    response: String,
    pub(crate) inputs: Mutex<Vec<String>>,
    pub(crate) calls: AtomicUsize,
}

impl CannedSolver {
    pub(crate) fn new(response: &str) -> Arc<Self> {
        Arc::new(Self {
            response: response.to_string(),
            inputs: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanSolver for CannedSolver {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate_plan(&self, input_json: &str) -> Result<String, SolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(input_json.to_string());
        Ok(self.response.clone())
    }
}

/// Loader that hands out a fixed solver or fails
pub(crate) struct StaticLoader(pub(crate) Option<Arc<CannedSolver>>);

#[async_trait]
impl SolverLoader for StaticLoader {
    async fn load(&self) -> Result<Arc<dyn PlanSolver>, SolverError> {
        match &self.0 {
            Some(solver) => Ok(solver.clone()),
            None => Err(SolverError::NotFound("planner-solver".to_string())),
        }
    }
}

/// Keeps every journal event in memory
#[derive(Default)]
pub(crate) struct RecordingJournal {
    pub(crate) events: Mutex<Vec<JournalEvent>>,
}

impl RecordingJournal {
    pub(crate) fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(JournalEvent::kind).collect()
    }
}

impl ActionJournal for RecordingJournal {
    fn record(&self, event: JournalEvent) {
        self.events.lock().unwrap().push(event);
    }
}
