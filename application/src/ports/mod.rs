//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod action_journal;
pub mod key_value_store;
pub mod plan_solver;
pub mod progress;
