//! Defines a single row of move data and the columns it is displayed and sorted by.
//!
//! All cell coercion happens here, when a record is built from raw CSV cells:
//! a Power that does not parse becomes `0`, and any other blank cell becomes [`PLACEHOLDER`].

use crate::{MoveCategory, MoveType, Vocabulary};

use egui::Color32;
use std::{borrow::Cow, cmp::Ordering, fmt};

/// Text shown for a cell that has no value.
pub const PLACEHOLDER: &str = "-";

/// A cell whose value should belong to a closed vocabulary (`MoveType`, `MoveCategory`).
///
/// Values outside the vocabulary are kept verbatim so that nothing read from the
/// file is lost; they are displayed and sorted by their text and match only "All".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Labeled<T> {
    Known(T),
    Unlisted(String),
}

impl<T: Vocabulary> Labeled<T> {
    /// Classifies a raw cell. Blank cells become `Unlisted("-")`.
    pub fn parse(text: Option<&str>) -> Self {
        let text = non_blank(text);
        match T::from_label(text) {
            Some(value) => Labeled::Known(value),
            None => Labeled::Unlisted(text.to_string()),
        }
    }

    /// The displayed text of this cell.
    pub fn as_str(&self) -> &str {
        match self {
            Labeled::Known(value) => value.label(),
            Labeled::Unlisted(text) => text,
        }
    }

    /// The vocabulary member, if this cell holds one.
    pub fn known(&self) -> Option<T> {
        match self {
            Labeled::Known(value) => Some(*value),
            Labeled::Unlisted(_) => None,
        }
    }
}

impl<T: Vocabulary> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Labeled<MoveType> {
    /// Background color for a type cell; unlisted types fall back to a neutral gray.
    pub fn color(&self) -> Color32 {
        match self {
            Labeled::Known(move_type) => move_type.color(),
            Labeled::Unlisted(_) => crate::UNLISTED_TYPE_COLOR,
        }
    }
}

/// One row of the moves table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub name: String,
    pub move_type: Labeled<MoveType>,
    pub category: Labeled<MoveCategory>,
    pub power: i64,
    pub accuracy: String,
    pub pp: String,
    pub effect: String,
    pub probability: String,
}

impl MoveRecord {
    /// Builds a record from raw cells given in [`MoveColumn::ALL`] order.
    ///
    /// `None` stands for a null/missing cell.
    pub fn from_cells(cells: [Option<&str>; 8]) -> Self {
        let [name, move_type, category, power, accuracy, pp, effect, probability] = cells;

        MoveRecord {
            name: non_blank(name).to_string(),
            move_type: Labeled::parse(move_type),
            category: Labeled::parse(category),
            power: parse_power(power),
            accuracy: non_blank(accuracy).to_string(),
            pp: non_blank(pp).to_string(),
            effect: non_blank(effect).to_string(),
            probability: non_blank(probability).to_string(),
        }
    }

    /// Text of one cell as it is displayed (and as text columns are compared).
    pub fn cell(&self, column: MoveColumn) -> Cow<'_, str> {
        match column {
            MoveColumn::Name => Cow::Borrowed(&self.name),
            MoveColumn::Type => Cow::Borrowed(self.move_type.as_str()),
            MoveColumn::Category => Cow::Borrowed(self.category.as_str()),
            MoveColumn::Power => Cow::Owned(self.power.to_string()),
            MoveColumn::Accuracy => Cow::Borrowed(&self.accuracy),
            MoveColumn::Pp => Cow::Borrowed(&self.pp),
            MoveColumn::Effect => Cow::Borrowed(&self.effect),
            MoveColumn::Probability => Cow::Borrowed(&self.probability),
        }
    }

    /// All cells in column order.
    pub fn cells(&self) -> [Cow<'_, str>; 8] {
        MoveColumn::ALL.map(|column| self.cell(column))
    }
}

/// Converts the Power cell to an integer, defaulting to 0.
///
/// Accepts integers and finite decimals (truncated), e.g. `"40"`, `" 40 "`, `"40.0"`.
pub fn parse_power(text: Option<&str>) -> i64 {
    let Some(text) = text.map(str::trim) else {
        return 0;
    };

    if let Ok(value) = text.parse::<i64>() {
        return value;
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Returns the trimmed text, or [`PLACEHOLDER`] for null and whitespace-only cells.
fn non_blank(text: Option<&str>) -> &str {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => PLACEHOLDER,
    }
}

/// The displayed columns of the moves table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveColumn {
    #[default]
    Name,
    Type,
    Category,
    Power,
    Accuracy,
    Pp,
    Effect,
    Probability,
}

impl MoveColumn {
    pub const ALL: [MoveColumn; 8] = [
        MoveColumn::Name,
        MoveColumn::Type,
        MoveColumn::Category,
        MoveColumn::Power,
        MoveColumn::Accuracy,
        MoveColumn::Pp,
        MoveColumn::Effect,
        MoveColumn::Probability,
    ];

    /// The CSV header and table heading for this column.
    pub const fn header(self) -> &'static str {
        match self {
            MoveColumn::Name => "Name",
            MoveColumn::Type => "Type",
            MoveColumn::Category => "Cat.",
            MoveColumn::Power => "Power",
            MoveColumn::Accuracy => "Acc.",
            MoveColumn::Pp => "PP",
            MoveColumn::Effect => "Effect",
            MoveColumn::Probability => "Prob. (%)",
        }
    }

    /// Natural ordering of two records on this column.
    ///
    /// Power compares numerically; every other column compares its displayed text
    /// lexicographically (case-sensitive).
    pub fn compare(self, a: &MoveRecord, b: &MoveRecord) -> Ordering {
        match self {
            MoveColumn::Power => a.power.cmp(&b.power),
            _ => a.cell(self).cmp(&b.cell(self)),
        }
    }
}

impl fmt::Display for MoveColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_move_record
#[cfg(test)]
mod tests_move_record {
    use super::*;

    #[test]
    fn test_from_cells_complete_row() {
        let record = MoveRecord::from_cells([
            Some("Flamethrower"),
            Some("Fire"),
            Some("Special"),
            Some("90"),
            Some("100"),
            Some("15"),
            Some("May burn opponent."),
            Some("10"),
        ]);

        assert_eq!(record.name, "Flamethrower");
        assert_eq!(record.move_type, Labeled::Known(MoveType::Fire));
        assert_eq!(record.category, Labeled::Known(MoveCategory::Special));
        assert_eq!(record.power, 90);
        assert_eq!(record.accuracy, "100");
        assert_eq!(record.pp, "15");
        assert_eq!(record.effect, "May burn opponent.");
        assert_eq!(record.probability, "10");
    }

    #[test]
    fn test_from_cells_coerces_missing_values() {
        let record = MoveRecord::from_cells([
            Some("Swords Dance"),
            Some("Normal"),
            Some("Status"),
            None,
            Some("   "),
            Some("20"),
            Some("Sharply raises user's Attack."),
            None,
        ]);

        assert_eq!(record.power, 0);
        assert_eq!(record.accuracy, PLACEHOLDER);
        assert_eq!(record.probability, PLACEHOLDER);
    }

    #[test]
    fn test_parse_power() {
        assert_eq!(parse_power(Some("40")), 40);
        assert_eq!(parse_power(Some(" 120 ")), 120);
        assert_eq!(parse_power(Some("40.0")), 40);
        assert_eq!(parse_power(Some("abc")), 0);
        assert_eq!(parse_power(Some("—")), 0);
        assert_eq!(parse_power(Some("NaN")), 0);
        assert_eq!(parse_power(Some("")), 0);
        assert_eq!(parse_power(None), 0);
    }

    #[test]
    fn test_unlisted_type_keeps_text_and_uses_fallback_color() {
        let shadow: Labeled<MoveType> = Labeled::parse(Some("Shadow"));
        assert_eq!(shadow, Labeled::Unlisted("Shadow".to_string()));
        assert_eq!(shadow.as_str(), "Shadow");
        assert_eq!(shadow.known(), None);
        assert_eq!(shadow.color(), crate::UNLISTED_TYPE_COLOR);

        let blank: Labeled<MoveType> = Labeled::parse(None);
        assert_eq!(blank.as_str(), PLACEHOLDER);

        let water: Labeled<MoveType> = Labeled::parse(Some("water"));
        assert_eq!(water.as_str(), "Water");
        assert_eq!(water.color(), MoveType::Water.color());
    }

    #[test]
    fn test_compare_power_is_numeric_and_text_is_lexicographic() {
        let a = MoveRecord::from_cells([
            Some("tackle"),
            Some("Normal"),
            Some("Physical"),
            Some("9"),
            None,
            None,
            None,
            None,
        ]);
        let b = MoveRecord::from_cells([
            Some("Tackle"),
            Some("Normal"),
            Some("Physical"),
            Some("10"),
            None,
            None,
            None,
            None,
        ]);

        assert_eq!(MoveColumn::Power.compare(&a, &b), Ordering::Less);
        // Uppercase sorts before lowercase.
        assert_eq!(MoveColumn::Name.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_headers() {
        let headers: Vec<&str> = MoveColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            ["Name", "Type", "Cat.", "Power", "Acc.", "PP", "Effect", "Prob. (%)"]
        );
    }
}
