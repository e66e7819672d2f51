//! Solver adapters
//!
//! The solver is an external executable speaking JSON over stdio: the form
//! snapshot goes to its stdin, the plan response comes back on stdout.

mod process;

pub use process::{ProcessSolver, ProcessSolverLoader};
