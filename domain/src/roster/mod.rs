//! Roster domain: couples and the constraints between them.
//!
//! - [`entities::HostingCouple`] / [`entities::NonHostingCouple`]: the couples
//! - [`entities::ForbiddenPair`]: two couples that must never share a course
//! - [`model::Roster`]: the single source of truth that owns all of the above
//! - [`snapshot::FormState`]: the persisted and solver-facing form of a roster

pub mod entities;
pub mod model;
pub mod snapshot;
pub mod value_objects;
