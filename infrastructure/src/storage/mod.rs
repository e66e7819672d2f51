//! Key-value storage adapters
//!
//! - [`FileKeyValueStore`]: one file per key under a data directory
//! - [`MemoryKeyValueStore`]: process-local, for `--ephemeral` runs and tests

mod file_store;
mod memory;

pub use file_store::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
