//! The roster: single source of truth for the form
//!
//! Every mutation of couples and forbidden pairs goes through [`Roster`].
//! Document order (insertion order) is preserved for all three
//! collections, since it drives selector option order and the order the
//! solver sees.

use super::entities::{CoupleKind, CoupleRow, ForbiddenPair, HostingCouple, NonHostingCouple};
use super::snapshot::{FormState, HostingCoupleRecord, NonHostingCoupleRecord};
use super::value_objects::{CoupleId, PairId, PairSide, PairSlot};
use crate::core::course::{Course, CourseSet};
use crate::core::error::DomainError;

/// In-memory model of hosting couples, non-hosting couples and forbidden pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    hosting: Vec<HostingCouple>,
    non_hosting: Vec<NonHostingCouple>,
    pairs: Vec<ForbiddenPair>,
    next_couple: u64,
    next_pair: u64,
}

impl Roster {
    /// Create an empty roster (no rows at all)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the roster shown when nothing has been stored yet:
    /// one empty hosting row, one empty non-hosting row, no pairs.
    pub fn with_default_rows() -> Self {
        Self::hydrate(&FormState::default())
    }

    /// Rebuild a roster from a persisted snapshot.
    ///
    /// Empty couple collections get one empty default row each. Pair names
    /// resolve to the first couple in document order carrying that name;
    /// an empty name is [`PairSlot::Unset`] and an unmatched name is kept
    /// as [`PairSlot::Stale`].
    pub fn hydrate(state: &FormState) -> Self {
        let mut roster = Self::new();

        if state.hosting_couples.is_empty() {
            roster.add_hosting_couple("", CourseSet::new());
        } else {
            for record in &state.hosting_couples {
                roster.add_hosting_couple(record.name.clone(), record.forbidden_courses);
            }
        }

        if state.non_hosting_couples.is_empty() {
            roster.add_non_hosting_couple("");
        } else {
            for record in &state.non_hosting_couples {
                roster.add_non_hosting_couple(record.name.clone());
            }
        }

        for (a, b) in &state.forbidden_pairs {
            let a = roster.resolve_slot(a);
            let b = roster.resolve_slot(b);
            roster.push_pair(a, b);
        }

        roster
    }

    /// Capture the current rows as a persistable snapshot.
    ///
    /// Bound pair slots are written with the couple's current name.
    pub fn snapshot(&self) -> FormState {
        FormState {
            hosting_couples: self
                .hosting
                .iter()
                .map(|c| HostingCoupleRecord {
                    name: c.name.clone(),
                    forbidden_courses: c.forbidden_courses,
                })
                .collect(),
            non_hosting_couples: self
                .non_hosting
                .iter()
                .map(|c| NonHostingCoupleRecord {
                    name: c.name.clone(),
                })
                .collect(),
            forbidden_pairs: self
                .pairs
                .iter()
                .map(|p| (self.slot_name(&p.a), self.slot_name(&p.b)))
                .collect(),
        }
    }

    // ==================== Queries ====================

    pub fn hosting(&self) -> &[HostingCouple] {
        &self.hosting
    }

    pub fn non_hosting(&self) -> &[NonHostingCouple] {
        &self.non_hosting
    }

    pub fn pairs(&self) -> &[ForbiddenPair] {
        &self.pairs
    }

    /// Every couple in document order: hosting rows first, then non-hosting
    pub fn couples(&self) -> impl Iterator<Item = CoupleRow<'_>> {
        let hosting = self.hosting.iter().map(|c| CoupleRow {
            id: c.id,
            kind: CoupleKind::Hosting,
            name: &c.name,
        });
        let non_hosting = self.non_hosting.iter().map(|c| CoupleRow {
            id: c.id,
            kind: CoupleKind::NonHosting,
            name: &c.name,
        });
        hosting.chain(non_hosting)
    }

    /// Every couple name in document order, duplicates included
    pub fn couple_names(&self) -> Vec<&str> {
        self.couples().map(|row| row.name).collect()
    }

    pub fn couple(&self, id: CoupleId) -> Option<CoupleRow<'_>> {
        self.couples().find(|row| row.id == id)
    }

    pub fn name_of(&self, id: CoupleId) -> Option<&str> {
        self.couple(id).map(|row| row.name)
    }

    /// First couple in document order with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<CoupleId> {
        self.couples().find(|row| row.name == name).map(|row| row.id)
    }

    pub fn pair(&self, id: PairId) -> Option<&ForbiddenPair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn contains_couple(&self, id: CoupleId) -> bool {
        self.couple(id).is_some()
    }

    // ==================== Mutations ====================

    pub fn add_hosting_couple(
        &mut self,
        name: impl Into<String>,
        forbidden_courses: CourseSet,
    ) -> CoupleId {
        let id = self.allocate_couple();
        self.hosting.push(HostingCouple {
            id,
            name: name.into(),
            forbidden_courses,
        });
        id
    }

    pub fn add_non_hosting_couple(&mut self, name: impl Into<String>) -> CoupleId {
        let id = self.allocate_couple();
        self.non_hosting.push(NonHostingCouple {
            id,
            name: name.into(),
        });
        id
    }

    /// Remove a couple row. Pair slots bound to it are reset to unset.
    pub fn remove_couple(&mut self, id: CoupleId) -> Result<CoupleKind, DomainError> {
        let kind = if let Some(pos) = self.hosting.iter().position(|c| c.id == id) {
            self.hosting.remove(pos);
            CoupleKind::Hosting
        } else if let Some(pos) = self.non_hosting.iter().position(|c| c.id == id) {
            self.non_hosting.remove(pos);
            CoupleKind::NonHosting
        } else {
            return Err(DomainError::UnknownCouple(id));
        };

        for pair in &mut self.pairs {
            for side in [PairSide::A, PairSide::B] {
                let slot = pair.slot_mut(side);
                if slot.couple() == Some(id) {
                    *slot = PairSlot::Unset;
                }
            }
        }

        Ok(kind)
    }

    pub fn rename_couple(
        &mut self,
        id: CoupleId,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if let Some(couple) = self.hosting.iter_mut().find(|c| c.id == id) {
            couple.name = name;
            return Ok(());
        }
        if let Some(couple) = self.non_hosting.iter_mut().find(|c| c.id == id) {
            couple.name = name;
            return Ok(());
        }
        Err(DomainError::UnknownCouple(id))
    }

    /// Flip a forbidden course checkbox; returns the new checked state
    pub fn toggle_forbidden_course(
        &mut self,
        id: CoupleId,
        course: Course,
    ) -> Result<bool, DomainError> {
        if let Some(couple) = self.hosting.iter_mut().find(|c| c.id == id) {
            return Ok(couple.forbidden_courses.toggle(course));
        }
        if self.non_hosting.iter().any(|c| c.id == id) {
            return Err(DomainError::NotHosting(id));
        }
        Err(DomainError::UnknownCouple(id))
    }

    /// Append a forbidden pair row with both selectors unset
    pub fn add_forbidden_pair(&mut self) -> PairId {
        self.push_pair(PairSlot::Unset, PairSlot::Unset)
    }

    pub fn remove_forbidden_pair(&mut self, id: PairId) -> Result<(), DomainError> {
        let pos = self
            .pairs
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::UnknownPair(id))?;
        self.pairs.remove(pos);
        Ok(())
    }

    /// Point one selector of a pair at a couple, or clear it with `None`
    pub fn select(
        &mut self,
        pair: PairId,
        side: PairSide,
        couple: Option<CoupleId>,
    ) -> Result<(), DomainError> {
        let slot = match couple {
            Some(id) if !self.contains_couple(id) => return Err(DomainError::UnknownCouple(id)),
            Some(id) => PairSlot::Couple(id),
            None => PairSlot::Unset,
        };
        let row = self
            .pairs
            .iter_mut()
            .find(|p| p.id == pair)
            .ok_or(DomainError::UnknownPair(pair))?;
        *row.slot_mut(side) = slot;
        Ok(())
    }

    // ==================== Internals ====================

    fn allocate_couple(&mut self) -> CoupleId {
        self.next_couple += 1;
        CoupleId::new(self.next_couple)
    }

    fn push_pair(&mut self, a: PairSlot, b: PairSlot) -> PairId {
        self.next_pair += 1;
        let id = PairId::new(self.next_pair);
        self.pairs.push(ForbiddenPair { id, a, b });
        id
    }

    fn resolve_slot(&self, name: &str) -> PairSlot {
        if name.is_empty() {
            return PairSlot::Unset;
        }
        match self.find_by_name(name) {
            Some(id) => PairSlot::Couple(id),
            None => PairSlot::Stale(name.to_string()),
        }
    }

    fn slot_name(&self, slot: &PairSlot) -> String {
        match slot {
            PairSlot::Unset => String::new(),
            PairSlot::Couple(id) => self.name_of(*id).unwrap_or_default().to_string(),
            PairSlot::Stale(name) => name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> FormState {
        FormState::from_json(
            r#"{"hostingCouples":[{"name":"Alice & Bob","forbiddenCourses":["dessert"]}],
                "nonHostingCouples":[{"name":"Carol & Dave"}],
                "forbiddenPairs":[["Alice & Bob","Carol & Dave"]]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_rows() {
        let roster = Roster::with_default_rows();
        assert_eq!(roster.hosting().len(), 1);
        assert_eq!(roster.non_hosting().len(), 1);
        assert!(roster.pairs().is_empty());
        assert_eq!(roster.couple_names(), vec!["", ""]);
    }

    #[test]
    fn test_hydrate_scenario_a() {
        let roster = Roster::hydrate(&scenario_a());
        let alice = roster.find_by_name("Alice & Bob").unwrap();
        let carol = roster.find_by_name("Carol & Dave").unwrap();

        assert!(roster.hosting()[0].forbidden_courses.contains(Course::Dessert));
        assert!(!roster.hosting()[0].forbidden_courses.contains(Course::Main));
        assert_eq!(roster.pairs()[0].a, PairSlot::Couple(alice));
        assert_eq!(roster.pairs()[0].b, PairSlot::Couple(carol));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = scenario_a();
        let first = Roster::hydrate(&state).snapshot();
        assert_eq!(first, state);

        let second = Roster::hydrate(&first).snapshot();
        assert_eq!(second, first);
    }

    #[test]
    fn test_round_trip_preserves_order_and_duplicates() {
        let mut roster = Roster::new();
        roster.add_hosting_couple("Zed", CourseSet::new());
        roster.add_hosting_couple("Amy", [Course::Starter].into_iter().collect());
        roster.add_non_hosting_couple("Amy");
        roster.add_non_hosting_couple("Bo");
        let pair = roster.add_forbidden_pair();
        let bo = roster.find_by_name("Bo").unwrap();
        roster.select(pair, PairSide::B, Some(bo)).unwrap();

        let state = roster.snapshot();
        let restored = Roster::hydrate(&state);
        assert_eq!(restored.snapshot(), state);
        assert_eq!(restored.couple_names(), vec!["Zed", "Amy", "Amy", "Bo"]);
        assert_eq!(state.forbidden_pairs, vec![(String::new(), "Bo".to_string())]);
    }

    #[test]
    fn test_stale_pair_names_survive_reload() {
        let state = FormState::from_json(
            r#"{"hostingCouples":[{"name":"A"}],"nonHostingCouples":[{"name":"B"}],
                "forbiddenPairs":[["A","Gone"]]}"#,
        )
        .unwrap();
        let roster = Roster::hydrate(&state);
        assert_eq!(roster.pairs()[0].b, PairSlot::Stale("Gone".to_string()));
        assert_eq!(
            roster.snapshot().forbidden_pairs,
            vec![("A".to_string(), "Gone".to_string())]
        );
    }

    #[test]
    fn test_rename_keeps_pair_reference() {
        let mut roster = Roster::hydrate(&scenario_a());
        let alice = roster.find_by_name("Alice & Bob").unwrap();

        roster.rename_couple(alice, "Alice & Eve").unwrap();

        assert_eq!(roster.pairs()[0].a, PairSlot::Couple(alice));
        assert_eq!(roster.snapshot().forbidden_pairs[0].0, "Alice & Eve");
    }

    #[test]
    fn test_remove_couple_unsets_references() {
        let mut roster = Roster::hydrate(&scenario_a());
        let carol = roster.find_by_name("Carol & Dave").unwrap();

        assert_eq!(roster.remove_couple(carol).unwrap(), CoupleKind::NonHosting);

        assert!(roster.pairs()[0].b.is_unset());
        assert!(!roster.pairs()[0].a.is_unset());
        assert!(roster.non_hosting().is_empty());
    }

    #[test]
    fn test_remove_unknown_couple_fails() {
        let mut roster = Roster::with_default_rows();
        let before = roster.clone();
        let err = roster.remove_couple(CoupleId::new(99)).unwrap_err();
        assert_eq!(err, DomainError::UnknownCouple(CoupleId::new(99)));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_toggle_forbidden_course() {
        let mut roster = Roster::with_default_rows();
        let host = roster.hosting()[0].id;
        let guest = roster.non_hosting()[0].id;

        assert!(roster.toggle_forbidden_course(host, Course::Main).unwrap());
        assert!(!roster.toggle_forbidden_course(host, Course::Main).unwrap());
        assert_eq!(
            roster.toggle_forbidden_course(guest, Course::Main),
            Err(DomainError::NotHosting(guest))
        );
    }

    #[test]
    fn test_select_unknown_couple_is_rejected() {
        let mut roster = Roster::with_default_rows();
        let pair = roster.add_forbidden_pair();
        let err = roster
            .select(pair, PairSide::A, Some(CoupleId::new(42)))
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownCouple(CoupleId::new(42)));
        assert!(roster.pair(pair).unwrap().a.is_unset());
    }

    #[test]
    fn test_remove_forbidden_pair() {
        let mut roster = Roster::with_default_rows();
        let first = roster.add_forbidden_pair();
        let second = roster.add_forbidden_pair();
        roster.remove_forbidden_pair(first).unwrap();
        assert_eq!(roster.pairs().len(), 1);
        assert_eq!(roster.pairs()[0].id, second);
        assert_eq!(
            roster.remove_forbidden_pair(first),
            Err(DomainError::UnknownPair(first))
        );
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        fn name() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(vec!["", "Alice & Bob", "Carol & Dave", "Eve"])
                    .prop_map(str::to_string),
                "[A-Za-z &]{1,8}",
            ]
        }

        fn courses() -> impl Strategy<Value = CourseSet> {
            vec(prop::sample::select(Course::ALL.to_vec()), 0..4)
                .prop_map(|courses| courses.into_iter().collect())
        }

        fn form_state() -> impl Strategy<Value = FormState> {
            (
                vec((name(), courses()), 1..5),
                vec(name(), 1..5),
                vec((name(), name()), 0..5),
            )
                .prop_map(|(hosting, non_hosting, pairs)| FormState {
                    hosting_couples: hosting
                        .into_iter()
                        .map(|(name, forbidden_courses)| HostingCoupleRecord {
                            name,
                            forbidden_courses,
                        })
                        .collect(),
                    non_hosting_couples: non_hosting
                        .into_iter()
                        .map(|name| NonHostingCoupleRecord { name })
                        .collect(),
                    forbidden_pairs: pairs,
                })
        }

        proptest! {
            #[test]
            fn hydrate_then_snapshot_is_identity(state in form_state()) {
                let roster = Roster::hydrate(&state);
                prop_assert_eq!(roster.snapshot(), state);
            }

            #[test]
            fn pair_names_bind_to_live_couples(state in form_state()) {
                let roster = Roster::hydrate(&state);
                for (pair, (a, b)) in roster.pairs().iter().zip(&state.forbidden_pairs) {
                    for (slot, name) in [(&pair.a, a), (&pair.b, b)] {
                        let expected = match roster.find_by_name(name) {
                            _ if name.is_empty() => PairSlot::Unset,
                            Some(id) => PairSlot::Couple(id),
                            None => PairSlot::Stale(name.clone()),
                        };
                        prop_assert_eq!(slot, &expected);
                    }
                }
            }
        }
    }
}
