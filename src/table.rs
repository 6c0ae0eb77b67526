//! Rendering of the moves table with `egui_extras::TableBuilder`.
//!
//! The table is rebuilt from the controller's derived rows on every frame. Header
//! clicks are reported back as a `ViewAction` instead of mutating anything here.

use crate::{MoveColumn, MoveRecord, SortableHeaderRenderer, ViewAction, ViewController};

use egui::{Align, Color32, Direction, Label, Layout, RichText, TextStyle, Ui};
use egui_extras::{Column, TableBuilder, TableRow};

/// Width of the Effect column, in points. Effect text wraps at this width.
pub const EFFECT_WRAP_WIDTH: f32 = 350.0;

/// Initial width of a column, in points. `None` fills the remaining space.
const fn initial_width(column: MoveColumn) -> Option<f32> {
    match column {
        MoveColumn::Name => Some(170.0),
        MoveColumn::Type => Some(90.0),
        MoveColumn::Category => Some(90.0),
        MoveColumn::Power => Some(70.0),
        MoveColumn::Accuracy => Some(60.0),
        MoveColumn::Pp => Some(50.0),
        MoveColumn::Effect => Some(EFFECT_WRAP_WIDTH),
        MoveColumn::Probability => None,
    }
}

/// Layout of a body cell: numbers centered, text left-aligned.
fn cell_layout(column: MoveColumn) -> Layout {
    match column {
        MoveColumn::Power | MoveColumn::Accuracy | MoveColumn::Pp | MoveColumn::Probability => {
            Layout::centered_and_justified(Direction::LeftToRight)
        }
        _ => Layout::left_to_right(Align::Center),
    }
}

/// Height of a row whose Effect text is `effect`: tall enough for every wrapped line,
/// and never below `min_height`.
fn row_height(ui: &Ui, effect: &str, min_height: f32) -> f32 {
    let font_id = TextStyle::Body.resolve(ui.style());
    let galley = ui
        .painter()
        .layout(effect.to_owned(), font_id, Color32::PLACEHOLDER, EFFECT_WRAP_WIDTH);
    let height = galley.size().y + 2.0 * ui.spacing().item_spacing.y;
    height.max(min_height)
}

/// Renders the header row and one row per displayed record.
///
/// ### Returns
/// `Some(ViewAction::ActivateSort(column))` when a header was clicked this frame.
pub fn render_table(controller: &ViewController, ui: &mut Ui) -> Option<ViewAction> {
    let mut action: Option<ViewAction> = None;
    let sort = controller.state().sort;

    let style = ui.style();
    let text_height = TextStyle::Body.resolve(style).size + 2.0 * style.spacing.item_spacing.y;
    let header_height = style.spacing.interact_size.y + 2.0 * style.spacing.item_spacing.y;
    let min_col_width = style.spacing.interact_size.x;

    let heights: Vec<f32> = controller
        .rows()
        .map(|record| row_height(ui, &record.effect, text_height))
        .collect();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .auto_shrink([false, false])
        .cell_layout(Layout::left_to_right(Align::Center));

    for column in MoveColumn::ALL {
        let table_column = match (column, initial_width(column)) {
            (MoveColumn::Effect, _) => Column::exact(EFFECT_WRAP_WIDTH),
            (_, Some(width)) => Column::initial(width)
                .at_least(min_col_width)
                .resizable(true),
            (_, None) => Column::remainder().at_least(min_col_width),
        };
        builder = builder.column(table_column.clip(true));
    }

    builder
        .header(header_height, |mut header| {
            for column in MoveColumn::ALL {
                header.col(|ui| {
                    let response =
                        ui.render_sortable_header(column.header(), sort.direction_of(column));
                    if response.clicked() {
                        action = Some(ViewAction::ActivateSort(column));
                    }
                });
            }
        })
        .body(|mut body| {
            for (record, height) in controller.rows().zip(heights) {
                body.row(height, |mut row| render_row(&mut row, record));
            }
        });

    if let Some(action) = &action {
        tracing::debug!("render_table(): header clicked, {action:?}");
    }

    action
}

/// Fills one table row from `record`.
fn render_row(row: &mut TableRow<'_, '_>, record: &MoveRecord) {
    for (column, cell) in MoveColumn::ALL.into_iter().zip(record.cells()) {
        let text = cell.into_owned();
        row.col(|ui| match column {
            MoveColumn::Name => {
                ui.label(RichText::new(text).strong());
            }
            MoveColumn::Type => {
                ui.painter()
                    .rect_filled(ui.max_rect(), 0.0, record.move_type.color());
                ui.with_layout(Layout::centered_and_justified(Direction::LeftToRight), |ui| {
                    ui.label(RichText::new(text).color(Color32::WHITE).strong());
                });
            }
            MoveColumn::Effect => {
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.add(Label::new(text).wrap());
                });
            }
            _ => {
                ui.with_layout(cell_layout(column).with_main_wrap(false), |ui| {
                    ui.label(text);
                });
            }
        });
    }
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_table
#[cfg(test)]
mod tests_table {
    use super::*;

    #[test]
    fn test_only_probability_fills_remaining_space() {
        let remainder: Vec<MoveColumn> = MoveColumn::ALL
            .into_iter()
            .filter(|&column| initial_width(column).is_none())
            .collect();
        assert_eq!(remainder, [MoveColumn::Probability]);
        assert_eq!(initial_width(MoveColumn::Effect), Some(EFFECT_WRAP_WIDTH));
    }

    #[test]
    fn test_long_effect_gets_taller_row() {
        let min_height = 10.0;
        let mut heights = (0.0, 0.0, 0.0);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let long = "Raises the user's Attack and Defense by one stage. ".repeat(8);
                heights = (
                    row_height(ui, "-", min_height),
                    row_height(ui, "May burn opponent.", min_height),
                    row_height(ui, &long, min_height),
                );
            });
        });

        let (placeholder, short, long) = heights;
        assert!(placeholder >= min_height);
        assert_eq!(placeholder, short);
        assert!(long > 2.0 * short, "long {long}, short {short}");
    }

    #[test]
    fn test_numeric_columns_are_centered() {
        let centered = Layout::centered_and_justified(Direction::LeftToRight);
        assert_eq!(cell_layout(MoveColumn::Power), centered);
        assert_eq!(cell_layout(MoveColumn::Pp), centered);
        assert_eq!(cell_layout(MoveColumn::Name), Layout::left_to_right(Align::Center));
    }
}
