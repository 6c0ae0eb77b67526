//! Defines the representation of sorting criteria for the moves table.
//! A single column is sorted at a time; its header click cycles the direction.

use crate::{MoveColumn, MoveRecord};

use std::fmt::Debug;

/// The sort direction of a column header.
///
/// This enum manages the click cycle:
/// None -> Ascending -> Descending -> None.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SortDirection {
    /// Rows keep their filtered (file) order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Calculates the next direction in the UI cycle for a header click.
    ///
    /// 1. `None`       -> `Ascending`
    /// 2. `Ascending`  -> `Descending`
    /// 3. `Descending` -> `None`
    pub fn cycle_next(&self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Returns the indicator drawn next to the column name.
    pub fn get_icon(&self) -> &'static str {
        match self {
            SortDirection::None => "-",
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort: one column and its direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortSpec {
    pub column: MoveColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Name ascending: the state the view starts in and returns to on Clear.
    fn default() -> Self {
        SortSpec {
            column: MoveColumn::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// The direction indicator for `column`. Only the active column can show
    /// anything other than `SortDirection::None`.
    pub fn direction_of(&self, column: MoveColumn) -> SortDirection {
        if column == self.column {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// Returns the spec after a click on `column`'s header.
    ///
    /// Clicking the active column advances its cycle; clicking any other column
    /// makes it the active one, starting from `None` (so it becomes `Ascending`).
    pub fn activate(&self, column: MoveColumn) -> Self {
        SortSpec {
            column,
            direction: self.direction_of(column).cycle_next(),
        }
    }

    /// Stably reorders `rows` (positions into `records`).
    ///
    /// `SortDirection::None` leaves `rows` untouched. Ties keep their prior
    /// relative order in both directions.
    pub fn apply(&self, records: &[MoveRecord], rows: &mut [usize]) {
        let column = self.column;
        match self.direction {
            SortDirection::None => {}
            SortDirection::Ascending => {
                rows.sort_by(|&a, &b| column.compare(&records[a], &records[b]));
            }
            SortDirection::Descending => {
                rows.sort_by(|&a, &b| column.compare(&records[b], &records[a]));
            }
        }
    }
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_sort
#[cfg(test)]
mod tests_sort {
    use super::*;

    fn record(name: &str, power: &str, accuracy: &str) -> MoveRecord {
        MoveRecord::from_cells([
            Some(name),
            Some("Normal"),
            Some("Physical"),
            Some(power),
            Some(accuracy),
            Some("35"),
            None,
            None,
        ])
    }

    fn names(records: &[MoveRecord], rows: &[usize]) -> Vec<String> {
        rows.iter().map(|&i| records[i].name.clone()).collect()
    }

    #[test]
    fn test_cycle_wraps_after_three_steps() {
        let start = SortDirection::None;
        let once = start.cycle_next();
        let twice = once.cycle_next();
        let thrice = twice.cycle_next();

        assert_eq!(once, SortDirection::Ascending);
        assert_eq!(twice, SortDirection::Descending);
        assert_eq!(thrice, SortDirection::None);
        assert_eq!(thrice.cycle_next(), SortDirection::Ascending);
    }

    #[test]
    fn test_icons() {
        assert_eq!(SortDirection::None.get_icon(), "-");
        assert_eq!(SortDirection::Ascending.get_icon(), "▲");
        assert_eq!(SortDirection::Descending.get_icon(), "▼");
    }

    #[test]
    fn test_activate_other_column_resets_previous() {
        let spec = SortSpec::default().activate(MoveColumn::Power);

        assert_eq!(spec.column, MoveColumn::Power);
        assert_eq!(spec.direction, SortDirection::Ascending);
        assert_eq!(spec.direction_of(MoveColumn::Name), SortDirection::None);

        let spec = spec.activate(MoveColumn::Accuracy);
        assert_eq!(spec.direction_of(MoveColumn::Power), SortDirection::None);
        assert_eq!(spec.direction_of(MoveColumn::Accuracy), SortDirection::Ascending);
    }

    #[test]
    fn test_activate_same_column_cycles() {
        let spec = SortSpec::default();
        assert_eq!(spec.direction_of(MoveColumn::Name), SortDirection::Ascending);

        let spec = spec.activate(MoveColumn::Name);
        assert_eq!(spec.direction, SortDirection::Descending);

        let spec = spec.activate(MoveColumn::Name);
        assert_eq!(spec.direction, SortDirection::None);
    }

    #[test]
    fn test_none_leaves_rows_untouched() {
        let records = vec![record("b", "1", "-"), record("a", "2", "-")];
        let mut rows = vec![1, 0];
        let spec = SortSpec {
            column: MoveColumn::Name,
            direction: SortDirection::None,
        };
        spec.apply(&records, &mut rows);
        assert_eq!(rows, vec![1, 0]);
    }

    #[test]
    fn test_power_sorts_numerically_and_descending_reverses() {
        let records = vec![
            record("Pound", "40", "100"),
            record("Hyper Beam", "150", "90"),
            record("Slam", "80", "75"),
            record("Growl", "-", "100"),
        ];

        let mut ascending: Vec<usize> = (0..records.len()).collect();
        SortSpec {
            column: MoveColumn::Power,
            direction: SortDirection::Ascending,
        }
        .apply(&records, &mut ascending);

        let mut descending: Vec<usize> = (0..records.len()).collect();
        SortSpec {
            column: MoveColumn::Power,
            direction: SortDirection::Descending,
        }
        .apply(&records, &mut descending);

        assert_eq!(
            names(&records, &ascending),
            ["Growl", "Pound", "Slam", "Hyper Beam"]
        );
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_ties_keep_prior_order_in_both_directions() {
        let records = vec![
            record("First", "40", "100"),
            record("Second", "90", "100"),
            record("Third", "40", "100"),
        ];

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut rows = vec![0, 1, 2];
            SortSpec {
                column: MoveColumn::Accuracy,
                direction,
            }
            .apply(&records, &mut rows);
            assert_eq!(rows, vec![0, 1, 2], "{direction:?}");
        }

        let mut rows = vec![0, 1, 2];
        SortSpec {
            column: MoveColumn::Power,
            direction: SortDirection::Descending,
        }
        .apply(&records, &mut rows);
        assert_eq!(names(&records, &rows), ["Second", "First", "Third"]);
    }

    #[test]
    fn test_text_columns_are_lexicographic() {
        // "100" < "75" < "90" as text.
        let records = vec![
            record("A", "0", "90"),
            record("B", "0", "100"),
            record("C", "0", "75"),
        ];
        let mut rows = vec![0, 1, 2];
        SortSpec {
            column: MoveColumn::Accuracy,
            direction: SortDirection::Ascending,
        }
        .apply(&records, &mut rows);
        assert_eq!(names(&records, &rows), ["B", "C", "A"]);
    }
}
