//! Roster entities

use super::value_objects::{CoupleId, PairId, PairSide, PairSlot};
use crate::core::course::CourseSet;

/// Whether a couple may host a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoupleKind {
    Hosting,
    NonHosting,
}

/// A couple eligible to host, minus the courses it must not host (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingCouple {
    pub id: CoupleId,
    pub name: String,
    pub forbidden_courses: CourseSet,
}

/// A couple that only ever attends as guests (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonHostingCouple {
    pub id: CoupleId,
    pub name: String,
}

/// Two couples that must never be grouped in the same course (Entity)
///
/// Conceptually unordered; stored as the `(a, b)` the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenPair {
    pub id: PairId,
    pub a: PairSlot,
    pub b: PairSlot,
}

impl ForbiddenPair {
    pub fn slot_mut(&mut self, side: PairSide) -> &mut PairSlot {
        match side {
            PairSide::A => &mut self.a,
            PairSide::B => &mut self.b,
        }
    }
}

/// Borrowed view of any couple, regardless of kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoupleRow<'a> {
    pub id: CoupleId,
    pub kind: CoupleKind,
    pub name: &'a str,
}
