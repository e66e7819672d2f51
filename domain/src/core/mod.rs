//! Core domain concepts shared across all subdomains.
//!
//! - [`course::Course`]: the three courses of a dinner rotation
//! - [`course::CourseSet`]: a set of courses kept in serving order
//! - [`error::DomainError`]: domain-level errors

pub mod course;
pub mod error;
