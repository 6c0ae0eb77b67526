//! Filter criteria for the moves table: free-text search, type and category.

use crate::{MoveCategory, MoveRecord, MoveType};

use std::collections::BTreeSet;

/// Label of the synthetic dropdown entry that matches every value.
pub const ALL_LABEL: &str = "All";

/// What a record must satisfy to be displayed.
///
/// An empty `types` or `categories` set means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Matched case-insensitively as a plain substring of the name or the effect.
    pub search_text: String,
    pub types: BTreeSet<MoveType>,
    pub categories: BTreeSet<MoveCategory>,
}

impl FilterCriteria {
    /// True when every record passes.
    pub fn is_match_all(&self) -> bool {
        self.search_text.is_empty() && self.types.is_empty() && self.categories.is_empty()
    }

    /// Returns a predicate for `record`, with the search text lowercased once up front.
    pub fn matcher(&self) -> impl Fn(&MoveRecord) -> bool + '_ {
        let needle = self.search_text.to_lowercase();

        move |record: &MoveRecord| {
            let type_ok = self.types.is_empty()
                || record
                    .move_type
                    .known()
                    .is_some_and(|t| self.types.contains(&t));

            let category_ok = self.categories.is_empty()
                || record
                    .category
                    .known()
                    .is_some_and(|c| self.categories.contains(&c));

            let text_ok = needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.effect.to_lowercase().contains(&needle);

            type_ok && category_ok && text_ok
        }
    }

    /// Positions of the matching records, in dataset order.
    pub fn apply(&self, records: &[MoveRecord]) -> Vec<usize> {
        if self.is_match_all() {
            return (0..records.len()).collect();
        }

        let matcher = self.matcher();
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| matcher(*record))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Text shown in a dropdown for an optional selection (`None` is "All").
pub fn selection_label<T: crate::Vocabulary>(selection: Option<T>) -> &'static str {
    selection.map_or(ALL_LABEL, |value| value.label())
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_filter
#[cfg(test)]
mod tests_filter {
    use super::*;
    use crate::{Labeled, Vocabulary};

    fn record(name: &str, move_type: &str, category: &str, effect: &str) -> MoveRecord {
        MoveRecord::from_cells([
            Some(name),
            Some(move_type),
            Some(category),
            Some("50"),
            Some("100"),
            Some("10"),
            Some(effect),
            None,
        ])
    }

    fn sample() -> Vec<MoveRecord> {
        vec![
            record("Tackle", "Normal", "Physical", "-"),
            record("Ember", "Fire", "Special", "May burn opponent."),
            record("Will-O-Wisp", "Fire", "Status", "Burns opponent."),
            record("Scald", "Water", "Special", "May BURN opponent."),
            record("Shadow Blitz", "Shadow", "Physical", "-"),
            record("Flare Blitz", "Fire", "Physical", "User receives recoil damage."),
        ]
    }

    #[test]
    fn test_match_all_returns_everything_in_order() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_match_all());
        assert_eq!(criteria.apply(&records), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_any_criterion_disables_match_all() {
        let records = sample();
        let with_category = FilterCriteria {
            categories: BTreeSet::from([MoveCategory::Status]),
            ..Default::default()
        };
        assert!(!with_category.is_match_all());
        assert_eq!(with_category.apply(&records), vec![2]);

        let with_search = FilterCriteria {
            search_text: "tackle".to_string(),
            ..Default::default()
        };
        assert!(!with_search.is_match_all());
        assert_eq!(with_search.apply(&records), vec![0]);
    }

    #[test]
    fn test_type_filter() {
        let records = sample();
        let criteria = FilterCriteria {
            types: BTreeSet::from([MoveType::Fire]),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&records), vec![1, 2, 5]);
    }

    #[test]
    fn test_type_and_category_combine() {
        let records = sample();
        let criteria = FilterCriteria {
            types: BTreeSet::from([MoveType::Fire]),
            categories: BTreeSet::from([MoveCategory::Physical]),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&records), vec![5]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_effect_and_name() {
        let records = sample();

        let burn = FilterCriteria {
            search_text: "burn".to_string(),
            ..Default::default()
        };
        assert_eq!(burn.apply(&records), vec![1, 2, 3]);

        let blitz = FilterCriteria {
            search_text: "BLITZ".to_string(),
            ..Default::default()
        };
        assert_eq!(blitz.apply(&records), vec![4, 5]);
    }

    #[test]
    fn test_search_is_plain_text() {
        let records = vec![record("Double-Edge", "Normal", "Physical", "Hits (recoil).")];
        for needle in ["(recoil)", ".", "-e", "[", "*"] {
            let criteria = FilterCriteria {
                search_text: needle.to_string(),
                ..Default::default()
            };
            let expected = if needle == "[" || needle == "*" { 0 } else { 1 };
            assert_eq!(criteria.apply(&records).len(), expected, "needle {needle:?}");
        }
    }

    #[test]
    fn test_unlisted_type_only_matches_all() {
        let records = sample();
        assert_eq!(records[4].move_type, Labeled::Unlisted("Shadow".to_string()));

        let any_type = FilterCriteria {
            types: MoveType::ALL.iter().copied().collect(),
            ..Default::default()
        };
        assert!(!any_type.apply(&records).contains(&4));
    }

    #[test]
    fn test_every_result_satisfies_criteria() {
        let records = sample();
        let criteria = FilterCriteria {
            search_text: "opp".to_string(),
            types: BTreeSet::from([MoveType::Fire, MoveType::Water]),
            categories: BTreeSet::from([MoveCategory::Special]),
        };

        let rows = criteria.apply(&records);
        let matcher = criteria.matcher();
        assert_eq!(rows, vec![1, 3]);
        for &i in &rows {
            let r = &records[i];
            assert!(criteria.types.contains(&r.move_type.known().unwrap()));
            assert!(criteria.categories.contains(&r.category.known().unwrap()));
            assert!(
                r.name.to_lowercase().contains("opp") || r.effect.to_lowercase().contains("opp")
            );
            assert!(matcher(r));
        }
    }

    #[test]
    fn test_selection_label() {
        assert_eq!(selection_label::<MoveType>(None), "All");
        assert_eq!(selection_label(Some(MoveCategory::ZMove)), "Z-Move");
    }
}
