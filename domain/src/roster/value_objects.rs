//! Roster value objects

use std::fmt;

/// Stable identity of a couple within a [`Roster`](super::model::Roster)
///
/// Names are mutable display attributes; every cross-reference goes
/// through this id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoupleId(u64);

impl CoupleId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CoupleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Stable identity of a forbidden pair row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(u64);

impl PairId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Which of the two selectors of a forbidden pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairSide {
    A,
    B,
}

impl PairSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairSide::A => "a",
            PairSide::B => "b",
        }
    }
}

impl std::str::FromStr for PairSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(PairSide::A),
            "b" => Ok(PairSide::B),
            other => Err(format!("invalid pair side '{other}', expected 'a' or 'b'")),
        }
    }
}

/// One end of a forbidden pair
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PairSlot {
    /// Nothing chosen yet
    #[default]
    Unset,
    /// Bound to a live couple
    Couple(CoupleId),
    /// A persisted name that matched no couple when the roster was hydrated.
    /// Kept verbatim so it survives another save/load cycle.
    Stale(String),
}

impl PairSlot {
    pub fn couple(&self) -> Option<CoupleId> {
        match self {
            PairSlot::Couple(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, PairSlot::Unset)
    }
}
