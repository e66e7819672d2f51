//! REPL command parsing
//!
//! Turns one input line into a [`FormCommand`]. Parsing never looks at the
//! roster: couples and pairs are referenced by id (`c3` or `3`, `p2` or
//! `2`), and whether the id exists is decided when the action is
//! dispatched.

use planner_application::Action;
use planner_domain::{CoupleId, Course, PairId, PairSide};
use thiserror::Error;

/// One parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// A form edit, dispatched to the session
    Edit(Action),
    Generate,
    Show,
    Output,
    Status,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid couple reference '{0}' (expected c<N> or <N>)")]
    InvalidCouple(String),

    #[error("Invalid pair reference '{0}' (expected p<N> or <N>)")]
    InvalidPair(String),

    #[error("Invalid course '{0}' (expected starter, main or dessert)")]
    InvalidCourse(String),

    #[error("Invalid pair side '{0}' (expected a or b)")]
    InvalidSide(String),
}

/// Split off the first whitespace-delimited word and trim the rest
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_id(token: &str, prefix: char) -> Option<u64> {
    let digits = token
        .strip_prefix(prefix)
        .or_else(|| token.strip_prefix(prefix.to_ascii_uppercase()))
        .unwrap_or(token);
    digits.parse().ok()
}

fn couple_ref(token: &str) -> Result<CoupleId, CommandError> {
    parse_id(token, 'c')
        .map(CoupleId::new)
        .ok_or_else(|| CommandError::InvalidCouple(token.to_string()))
}

fn pair_ref(token: &str) -> Result<PairId, CommandError> {
    parse_id(token, 'p')
        .map(PairId::new)
        .ok_or_else(|| CommandError::InvalidPair(token.to_string()))
}

fn require<'a>(token: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if token.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(token)
    }
}

/// Parse one line of input. Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<FormCommand>, CommandError> {
    let (word, rest) = split_word(line);
    if word.is_empty() {
        return Ok(None);
    }

    let command = match word.to_ascii_lowercase().as_str() {
        "host" => FormCommand::Edit(Action::AddHostingCouple {
            name: rest.to_string(),
        }),
        "guest" => FormCommand::Edit(Action::AddNonHostingCouple {
            name: rest.to_string(),
        }),
        "rename" => {
            const USAGE: &str = "rename <couple> <name>";
            let (couple, name) = split_word(rest);
            FormCommand::Edit(Action::RenameCouple {
                id: couple_ref(require(couple, USAGE)?)?,
                name: name.to_string(),
            })
        }
        "forbid" => {
            const USAGE: &str = "forbid <couple> <starter|main|dessert>";
            let (couple, course) = split_word(rest);
            let id = couple_ref(require(couple, USAGE)?)?;
            let course: Course = require(course, USAGE)?
                .parse()
                .map_err(|_| CommandError::InvalidCourse(course.to_string()))?;
            FormCommand::Edit(Action::ToggleForbiddenCourse { id, course })
        }
        "remove" | "rm" => {
            let (couple, _) = split_word(rest);
            FormCommand::Edit(Action::RemoveCouple(couple_ref(require(
                couple,
                "remove <couple>",
            )?)?))
        }
        "pair" => FormCommand::Edit(Action::AddForbiddenPair),
        "unpair" => {
            let (pair, _) = split_word(rest);
            FormCommand::Edit(Action::RemoveForbiddenPair(pair_ref(require(
                pair,
                "unpair <pair>",
            )?)?))
        }
        "select" => {
            const USAGE: &str = "select <pair> <a|b> <couple|->";
            let (pair, rest) = split_word(rest);
            let (side, rest) = split_word(rest);
            let (couple, _) = split_word(rest);

            let pair = pair_ref(require(pair, USAGE)?)?;
            let side: PairSide = require(side, USAGE)?
                .parse()
                .map_err(|_| CommandError::InvalidSide(side.to_string()))?;
            let couple = match require(couple, USAGE)? {
                "-" => None,
                token => Some(couple_ref(token)?),
            };
            FormCommand::Edit(Action::ChangeForbiddenSelector { pair, side, couple })
        }
        "save" => FormCommand::Edit(Action::Save),
        "generate" | "gen" => FormCommand::Generate,
        "show" | "ls" => FormCommand::Show,
        "output" => FormCommand::Output,
        "status" => FormCommand::Status,
        "help" | "h" | "?" => FormCommand::Help,
        "quit" | "exit" | "q" => FormCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  host [name]                       Add a hosting couple
  guest [name]                      Add a non-hosting couple
  rename <couple> <name>            Rename a couple
  forbid <couple> <course>          Toggle a course the couple must not host
  remove <couple>                   Remove a couple
  pair                              Add an empty forbidden pair
  unpair <pair>                     Remove a forbidden pair
  select <pair> <a|b> <couple|->    Choose (or clear) one side of a pair
  save                              Save the form
  generate                          Ask the solver for plans
  show                              Show the form
  output                            Show the last output
  status                            Show whether the solver is loaded
  help                              Show this help
  quit                              Exit

Couples are referenced as c<N>, pairs as p<N> (the N alone works too).";
