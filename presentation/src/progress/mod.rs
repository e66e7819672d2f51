//! Progress reporting while the solver runs

pub mod reporter;
