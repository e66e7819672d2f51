//! Logging infrastructure: structured action journaling.
//!
//! Provides [`JsonlActionJournal`], a JSONL file writer that implements
//! the [`ActionJournal`](planner_application::ActionJournal) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlActionJournal;
