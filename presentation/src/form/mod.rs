//! Interactive form editing
//!
//! - [`command`]: parsing REPL lines into form commands
//! - [`view`]: text rendering of the roster and pair selectors
//! - [`repl`]: the rustyline loop tying both to a planner session

pub mod command;
pub mod repl;
pub mod view;

pub use command::{CommandError, FormCommand, parse_line};
pub use repl::FormRepl;
pub use view::FormView;
