//! Domain layer for dinner-planner
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Roster
//!
//! The roster is the single source of truth for the planning form:
//!
//! - **Hosting couples** may host a course, except the courses they forbid
//! - **Non-hosting couples** only ever attend as guests
//! - **Forbidden pairs** name two couples that must never share a table
//!
//! Couples carry a stable [`CoupleId`]; names are editable attributes, so
//! forbidden pairs survive renames.
//!
//! ## Plans
//!
//! An external solver turns a [`FormState`] snapshot into a
//! [`PlanResponse`], which is laid out per course as a [`RenderedOutput`].

pub mod config;
pub mod core;
pub mod plan;
pub mod roster;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    course::{Course, CourseSet},
    error::DomainError,
};
pub use plan::{
    layout::{AssignmentLine, CourseSection, NO_PLANS_MESSAGE, PlanBlock, RenderedOutput},
    response::{AssignmentGroup, CoupleRef, CoursePlan, PlanResponse, PlanResult},
};
pub use roster::{
    entities::{CoupleKind, CoupleRow, ForbiddenPair, HostingCouple, NonHostingCouple},
    model::Roster,
    snapshot::{FormState, HostingCoupleRecord, NonHostingCoupleRecord},
    value_objects::{CoupleId, PairId, PairSide, PairSlot},
};
