//! Constraint synchronizer
//!
//! Keeps the two selectors of every forbidden-pair row consistent with the
//! current couples. Selectors are views over the [`Roster`]: options are
//! rebuilt from the couple list, and the selection comes from the pair's
//! slot when that couple still exists.

use planner_domain::{CoupleId, PairId, PairSide, PairSlot, Roster};

/// One entry of a selector's option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub id: CoupleId,
    pub label: String,
}

/// A single couple selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorView {
    pub options: Vec<SelectorOption>,
    pub selected: Option<CoupleId>,
}

impl SelectorView {
    /// The explicitly selected option, if any
    pub fn selected_option(&self) -> Option<&SelectorOption> {
        let id = self.selected?;
        self.options.iter().find(|o| o.id == id)
    }

    /// What a dropdown would display: the selection, else the first option.
    ///
    /// Display only. The implicit first option is never written back.
    pub fn effective(&self) -> Option<&SelectorOption> {
        self.selected_option().or_else(|| self.options.first())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }
}

/// Both selectors of one forbidden-pair row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRowView {
    pub pair: PairId,
    pub a: SelectorView,
    pub b: SelectorView,
    /// Persisted names that resolved to no couple, per side
    pub stale: [Option<String>; 2],
}

impl PairRowView {
    pub fn side(&self, side: PairSide) -> &SelectorView {
        match side {
            PairSide::A => &self.a,
            PairSide::B => &self.b,
        }
    }
}

/// Selector state for every forbidden-pair row, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSelectors {
    rows: Vec<PairRowView>,
}

impl PairSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build selectors for a roster from scratch
    pub fn for_roster(roster: &Roster) -> Self {
        let mut selectors = Self::new();
        selectors.refresh(roster);
        selectors
    }

    /// Recompute option lists and selections for every pair row.
    ///
    /// Options are every couple name in document order, hosting couples
    /// first, duplicates kept. A selection survives only while its couple
    /// is still among the options.
    pub fn refresh(&mut self, roster: &Roster) {
        let options: Vec<SelectorOption> = roster
            .couples()
            .map(|row| SelectorOption {
                id: row.id,
                label: row.name.to_string(),
            })
            .collect();

        let keep = |id: Option<CoupleId>| id.filter(|id| options.iter().any(|o| o.id == *id));
        let stale_name = |slot: &PairSlot| match slot {
            PairSlot::Stale(name) => Some(name.clone()),
            _ => None,
        };

        self.rows = roster
            .pairs()
            .iter()
            .map(|pair| PairRowView {
                pair: pair.id,
                a: SelectorView {
                    options: options.clone(),
                    selected: keep(pair.a.couple()),
                },
                b: SelectorView {
                    options: options.clone(),
                    selected: keep(pair.b.couple()),
                },
                stale: [stale_name(&pair.a), stale_name(&pair.b)],
            })
            .collect();
    }

    pub fn rows(&self) -> &[PairRowView] {
        &self.rows
    }

    pub fn row(&self, pair: PairId) -> Option<&PairRowView> {
        self.rows.iter().find(|r| r.pair == pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_domain::{CourseSet, FormState};

    fn roster_with_pair() -> (Roster, PairId, CoupleId, CoupleId) {
        let mut roster = Roster::new();
        let alice = roster.add_hosting_couple("Alice", CourseSet::new());
        let carol = roster.add_non_hosting_couple("Carol");
        let pair = roster.add_forbidden_pair();
        roster.select(pair, PairSide::A, Some(alice)).unwrap();
        roster.select(pair, PairSide::B, Some(carol)).unwrap();
        (roster, pair, alice, carol)
    }

    #[test]
    fn test_options_follow_document_order_with_duplicates() {
        let mut roster = Roster::new();
        roster.add_non_hosting_couple("Guest");
        roster.add_hosting_couple("Host", CourseSet::new());
        roster.add_hosting_couple("Guest", CourseSet::new());
        roster.add_forbidden_pair();

        let selectors = PairSelectors::for_roster(&roster);
        assert_eq!(selectors.rows()[0].a.labels(), vec!["Host", "Guest", "Guest"]);
        assert_eq!(selectors.rows()[0].b.labels(), vec!["Host", "Guest", "Guest"]);
    }

    #[test]
    fn test_new_row_is_populated_but_unselected() {
        let mut roster = Roster::with_default_rows();
        roster.rename_couple(roster.hosting()[0].id, "Alice").unwrap();
        let pair = roster.add_forbidden_pair();

        let selectors = PairSelectors::for_roster(&roster);
        let row = selectors.row(pair).unwrap();
        assert_eq!(row.a.options.len(), 2);
        assert_eq!(row.a.selected, None);
        assert_eq!(row.a.effective().unwrap().label, "Alice");
    }

    #[test]
    fn test_selection_survives_add_and_rename() {
        let (mut roster, pair, alice, carol) = roster_with_pair();
        let mut selectors = PairSelectors::for_roster(&roster);

        roster.add_non_hosting_couple("Dave");
        roster.rename_couple(alice, "Alicia").unwrap();
        selectors.refresh(&roster);

        let row = selectors.row(pair).unwrap();
        assert_eq!(row.a.labels(), vec!["Alicia", "Carol", "Dave"]);
        assert_eq!(row.a.selected, Some(alice));
        assert_eq!(row.a.selected_option().unwrap().label, "Alicia");
        assert_eq!(row.b.selected, Some(carol));
    }

    #[test]
    fn test_selection_cleared_on_remove() {
        let (mut roster, pair, alice, carol) = roster_with_pair();
        let mut selectors = PairSelectors::for_roster(&roster);

        roster.remove_couple(carol).unwrap();
        selectors.refresh(&roster);

        let row = selectors.row(pair).unwrap();
        assert_eq!(row.b.labels(), vec!["Alice"]);
        assert_eq!(row.b.selected, None);
        assert_eq!(row.a.selected, Some(alice));
    }

    #[test]
    fn test_every_row_matches_current_names() {
        let (mut roster, _, alice, _) = roster_with_pair();
        roster.add_forbidden_pair();
        roster.add_hosting_couple("Eve", CourseSet::new());
        roster.remove_couple(alice).unwrap();

        let selectors = PairSelectors::for_roster(&roster);
        let names: Vec<&str> = roster.couple_names();
        for row in selectors.rows() {
            assert_eq!(row.a.labels(), names);
            assert_eq!(row.b.labels(), names);
        }
    }

    #[test]
    fn test_stale_names_are_reported_but_not_selectable() {
        let state = FormState::from_json(
            r#"{"hostingCouples":[{"name":"A"}],"forbiddenPairs":[["Gone","A"]]}"#,
        )
        .unwrap();
        let roster = Roster::hydrate(&state);
        let selectors = PairSelectors::for_roster(&roster);
        let row = &selectors.rows()[0];

        assert_eq!(row.stale[0].as_deref(), Some("Gone"));
        assert_eq!(row.a.selected, None);
        assert!(!row.a.labels().contains(&"Gone"));
        assert_eq!(row.b.selected_option().unwrap().label, "A");
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;
        use std::collections::HashMap;

        #[derive(Debug, Clone)]
        enum Edit {
            AddHosting(String),
            AddNonHosting(String),
            Remove(usize),
            Rename(usize, String),
            AddPair,
            RemovePair(usize),
            Select(usize, PairSide, Option<usize>),
        }

        fn name() -> impl Strategy<Value = String> {
            prop::sample::select(vec!["", "Alice", "Bob", "Alice", "Carol & Dave"])
                .prop_map(str::to_string)
        }

        fn side() -> impl Strategy<Value = PairSide> {
            prop_oneof![Just(PairSide::A), Just(PairSide::B)]
        }

        fn edit() -> impl Strategy<Value = Edit> {
            prop_oneof![
                name().prop_map(Edit::AddHosting),
                name().prop_map(Edit::AddNonHosting),
                any::<usize>().prop_map(Edit::Remove),
                (any::<usize>(), name()).prop_map(|(idx, name)| Edit::Rename(idx, name)),
                Just(Edit::AddPair),
                any::<usize>().prop_map(Edit::RemovePair),
                (any::<usize>(), side(), proptest::option::of(any::<usize>()))
                    .prop_map(|(pair, side, couple)| Edit::Select(pair, side, couple)),
            ]
        }

        fn pick<T: Copy>(items: &[T], idx: usize) -> Option<T> {
            (!items.is_empty()).then(|| items[idx % items.len()])
        }

        proptest! {
            #[test]
            fn selectors_track_roster_through_edits(edits in vec(edit(), 0..40)) {
                let mut roster = Roster::with_default_rows();
                let mut selectors = PairSelectors::for_roster(&roster);
                let mut chosen: HashMap<(PairId, PairSide), CoupleId> = HashMap::new();

                for edit in edits {
                    let couples: Vec<CoupleId> = roster.couples().map(|row| row.id).collect();
                    let pairs: Vec<PairId> = roster.pairs().iter().map(|pair| pair.id).collect();
                    match edit {
                        Edit::AddHosting(name) => {
                            roster.add_hosting_couple(name, Default::default());
                        }
                        Edit::AddNonHosting(name) => {
                            roster.add_non_hosting_couple(name);
                        }
                        Edit::Remove(idx) => {
                            if let Some(id) = pick(&couples, idx) {
                                roster.remove_couple(id).unwrap();
                                chosen.retain(|_, couple| *couple != id);
                            }
                        }
                        Edit::Rename(idx, name) => {
                            if let Some(id) = pick(&couples, idx) {
                                roster.rename_couple(id, name).unwrap();
                            }
                        }
                        Edit::AddPair => {
                            roster.add_forbidden_pair();
                        }
                        Edit::RemovePair(idx) => {
                            if let Some(pair) = pick(&pairs, idx) {
                                roster.remove_forbidden_pair(pair).unwrap();
                                chosen.retain(|(p, _), _| *p != pair);
                            }
                        }
                        Edit::Select(idx, side, couple) => {
                            let Some(pair) = pick(&pairs, idx) else { continue };
                            let couple = couple.and_then(|c| pick(&couples, c));
                            roster.select(pair, side, couple).unwrap();
                            match couple {
                                Some(id) => chosen.insert((pair, side), id),
                                None => chosen.remove(&(pair, side)),
                            };
                        }
                    }
                    selectors.refresh(&roster);

                    let names = roster.couple_names();
                    prop_assert_eq!(selectors.rows().len(), roster.pairs().len());
                    for row in selectors.rows() {
                        for side in [PairSide::A, PairSide::B] {
                            let view = row.side(side);
                            prop_assert_eq!(view.labels(), names.clone());
                            let expected = chosen.get(&(row.pair, side)).copied();
                            prop_assert_eq!(view.selected, expected);
                        }
                    }
                }
            }
        }
    }
}
