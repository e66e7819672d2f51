//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod compute_boundary;
pub mod constraint_sync;
pub mod persistence;
pub mod render_output;
pub mod session;
#[cfg(test)]
pub(crate) mod test_support;
