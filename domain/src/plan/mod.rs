//! Plan domain: what the solver returns and how it is laid out for display.
//!
//! - [`response::PlanResponse`]: the solver's output contract
//! - [`layout::RenderedOutput`]: display structure grouped by course

pub mod layout;
pub mod response;
