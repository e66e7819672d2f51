//! Domain error types

use crate::roster::value_objects::{CoupleId, PairId};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown couple: {0}")]
    UnknownCouple(CoupleId),

    #[error("Unknown forbidden pair: {0}")]
    UnknownPair(PairId),

    #[error("Couple {0} does not host, so it has no forbidden courses")]
    NotHosting(CoupleId),

    #[error("Invalid course: {0}")]
    InvalidCourse(String),
}
