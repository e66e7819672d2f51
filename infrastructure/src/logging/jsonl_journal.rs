//! Action journal stored as JSON Lines
//!
//! Every [`JournalEvent`] becomes one object carrying its `type` and an
//! RFC 3339 `timestamp` next to the fields of that event kind:
//!
//! ```text
//! {"type":"action","timestamp":"…","action":"rename-couple","target":"c2","outcome":"done"}
//! {"type":"generate","timestamp":"…","solver":"planner-solver","input":{"hostingCouples":[…]}}
//! {"type":"render","timestamp":"…","plans":3,"bytes":812}
//! ```

use chrono::{SecondsFormat, Utc};
use planner_application::{ActionJournal, JournalEvent};
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appends journal events to a file, one JSON object per line
pub struct JsonlActionJournal {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlActionJournal {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &JournalLine<'_>) -> io::Result<()> {
        let mut encoded = serde_json::to_vec(line)?;
        encoded.push(b'\n');
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("journal writer poisoned"))?;
        file.write_all(&encoded)
    }
}

impl ActionJournal for JsonlActionJournal {
    fn record(&self, event: JournalEvent) {
        let line = JournalLine::new(&event);
        if let Err(e) = self.append(&line) {
            warn!("Dropping {} journal entry for {}: {}", line.kind, self.path.display(), e);
        }
    }
}

/// One line of the journal file
#[derive(Serialize)]
struct JournalLine<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    #[serde(flatten)]
    fields: Option<EventFields<'a>>,
}

/// Fields specific to each event kind
#[derive(Serialize)]
#[serde(untagged)]
enum EventFields<'a> {
    Action {
        action: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<&'a str>,
        outcome: String,
    },
    Generate {
        solver: &'a str,
        /// The form record as sent, embedded as JSON when it parses
        input: Value,
    },
    Refused {
        reason: &'a str,
    },
    Render {
        plans: usize,
        bytes: usize,
    },
}

impl<'a> JournalLine<'a> {
    fn new(event: &'a JournalEvent) -> Self {
        let fields = match event {
            JournalEvent::Action {
                action,
                target,
                outcome,
            } => Some(EventFields::Action {
                action,
                target: target.as_deref(),
                outcome: outcome.to_string(),
            }),
            JournalEvent::GenerateStarted { solver, input } => Some(EventFields::Generate {
                solver,
                input: serde_json::from_str(input).unwrap_or_else(|_| Value::from(input.as_str())),
            }),
            JournalEvent::GenerateRefused { reason } => Some(EventFields::Refused { reason }),
            JournalEvent::Rendered { plans, bytes } => Some(EventFields::Render {
                plans: *plans,
                bytes: *bytes,
            }),
            JournalEvent::Reset => None,
        };

        Self {
            kind: event.kind(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            fields,
        }
    }
}
