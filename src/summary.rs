use crate::{Labeled, MoveCategory, MoveRecord, MoveType, UNLISTED_TYPE_COLOR, Vocabulary};

use egui::{Color32, Frame, Grid, Response, RichText, Sense, Stroke, Ui, Vec2};

/// Counts over the displayed rows, shown in the side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSummary {
    /// Rows currently displayed.
    pub shown: usize,
    /// Rows in the dataset.
    pub total: usize,
    /// Non-zero counts per known type, in dropdown order.
    pub per_type: Vec<(MoveType, usize)>,
    /// Rows whose type is not one of the 18 known types.
    pub unlisted_types: usize,
    /// Non-zero counts per known category, in dropdown order.
    pub per_category: Vec<(MoveCategory, usize)>,
    /// Rows whose category is not one of the known categories.
    pub unlisted_categories: usize,
}

impl ViewSummary {
    /// Counts `rows` (the displayed records) out of `total`.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a MoveRecord>, total: usize) -> Self {
        let mut type_counts = vec![0usize; MoveType::ALL.len()];
        let mut category_counts = vec![0usize; MoveCategory::ALL.len()];
        let mut summary = ViewSummary {
            total,
            ..Default::default()
        };

        for record in rows {
            summary.shown += 1;

            match &record.move_type {
                Labeled::Known(move_type) => type_counts[position(*move_type)] += 1,
                Labeled::Unlisted(_) => summary.unlisted_types += 1,
            }
            match &record.category {
                Labeled::Known(category) => category_counts[position(*category)] += 1,
                Labeled::Unlisted(_) => summary.unlisted_categories += 1,
            }
        }

        summary.per_type = non_zero(&type_counts);
        summary.per_category = non_zero(&category_counts);
        summary
    }

    /// Renders the counts (shown/total, per type, per category) to the UI.
    pub fn render_summary(&self, ui: &mut Ui) {
        Frame::default()
            .stroke(Stroke::new(1.0, Color32::GRAY))
            .outer_margin(2.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                Grid::new("summary_totals_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("Shown:");
                        ui.label(format!("{} / {}", self.shown, self.total));
                        ui.end_row();
                    });
            });

        ui.collapsing("By type", |ui| {
            Grid::new("summary_type_grid")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for (move_type, count) in &self.per_type {
                        ui.horizontal(|ui| {
                            color_chip(ui, move_type.color())
                                .on_hover_text(chip_hover_text(*move_type));
                            ui.label(move_type.label());
                        });
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                    if self.unlisted_types > 0 {
                        ui.horizontal(|ui| {
                            color_chip(ui, UNLISTED_TYPE_COLOR);
                            ui.label(RichText::new("Other").italics());
                        });
                        ui.label(self.unlisted_types.to_string());
                        ui.end_row();
                    }
                });
        });

        ui.collapsing("By category", |ui| {
            Grid::new("summary_category_grid")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for (category, count) in &self.per_category {
                        ui.label(category.label());
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                    if self.unlisted_categories > 0 {
                        ui.label(RichText::new("Other").italics());
                        ui.label(self.unlisted_categories.to_string());
                        ui.end_row();
                    }
                });
        });
    }
}

/// Index of `value` in `T::ALL`.
fn position<T: Vocabulary>(value: T) -> usize {
    T::ALL
        .iter()
        .position(|&member| member == value)
        .unwrap_or_default()
}

fn non_zero<T: Vocabulary>(counts: &[usize]) -> Vec<(T, usize)> {
    T::ALL
        .iter()
        .copied()
        .zip(counts.iter().copied())
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// A small filled square in `color`.
fn color_chip(ui: &mut Ui, color: Color32) -> Response {
    let size = Vec2::splat(ui.text_style_height(&egui::TextStyle::Body) * 0.8);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    response
}

/// Tooltip of a type chip, e.g. `Fire #f08030`.
fn chip_hover_text(move_type: MoveType) -> String {
    format!("{} {}", move_type.label(), move_type.hex())
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_summary
#[cfg(test)]
mod tests_summary {
    use super::*;

    fn record(move_type: &str, category: &str) -> MoveRecord {
        MoveRecord::from_cells([
            Some("Move"),
            Some(move_type),
            Some(category),
            None,
            None,
            None,
            None,
            None,
        ])
    }

    #[test]
    fn test_counts_in_dropdown_order() {
        let records = vec![
            record("Water", "Special"),
            record("Fire", "Special"),
            record("Water", "Physical"),
            record("Shadow", "Physical"),
            record("Fire", "???"),
        ];

        let summary = ViewSummary::from_rows(&records, 10);

        assert_eq!(summary.shown, 5);
        assert_eq!(summary.total, 10);
        assert_eq!(
            summary.per_type,
            vec![(MoveType::Fire, 2), (MoveType::Water, 2)]
        );
        assert_eq!(summary.unlisted_types, 1);
        assert_eq!(
            summary.per_category,
            vec![(MoveCategory::Physical, 2), (MoveCategory::Special, 2)]
        );
        assert_eq!(summary.unlisted_categories, 1);
    }

    #[test]
    fn test_empty_view() {
        let records: Vec<MoveRecord> = Vec::new();
        let summary = ViewSummary::from_rows(&records, 42);
        assert_eq!(summary.shown, 0);
        assert_eq!(summary.total, 42);
        assert!(summary.per_type.is_empty());
        assert!(summary.per_category.is_empty());
    }

    #[test]
    fn test_counts_sum_to_shown() {
        let records: Vec<MoveRecord> = MoveType::ALL
            .iter()
            .map(|t| record(t.label(), "Status"))
            .collect();

        let summary = ViewSummary::from_rows(&records, records.len());

        let type_sum: usize = summary.per_type.iter().map(|(_, n)| n).sum();
        assert_eq!(type_sum + summary.unlisted_types, summary.shown);
        assert_eq!(summary.per_type.len(), 18);
        assert_eq!(summary.per_category, vec![(MoveCategory::Status, 18)]);
    }

    #[test]
    fn test_chip_hover_text_names_type_and_color() {
        assert_eq!(chip_hover_text(MoveType::Fire), "Fire #f08030");
        assert_eq!(chip_hover_text(MoveType::Fairy), "Fairy #e898e8");
    }
}
