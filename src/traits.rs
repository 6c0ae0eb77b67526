//! Defines custom traits, trait implementations for `egui` types, and general utility traits.
//!
//! This module centralizes extensions to existing types (`egui::Context`, `egui::Ui`, `std::path::Path`, `Vec`)
//! and defines interfaces (`Notification`, `SortableHeaderRenderer`, `Vocabulary`) for common patterns.
//! It interacts primarily with `layout.rs` (for styling, notifications) and `table.rs` (for header rendering).

use crate::SortDirection;

use egui::{
    Align, Color32, Context,
    FontFamily::Proportional,
    FontId, Frame, Layout, Response, RichText, Sense, Spacing, Stroke, Style,
    TextStyle::{self, Body, Button, Heading, Monospace, Small},
    Ui, Vec2, Visuals, Window,
    style::ScrollStyle,
};

use std::{collections::HashSet, ffi::OsStr, hash::Hash, path::Path};

/// Defines custom text styles for the egui context.
/// Used by `MyStyle::set_style_init`.
pub const CUSTOM_TEXT_STYLE: [(egui::TextStyle, egui::FontId); 5] = [
    (Heading, FontId::new(22.0, Proportional)),
    (Body, FontId::new(15.0, Proportional)),
    (Button, FontId::new(15.0, Proportional)),
    (Monospace, FontId::new(14.0, Proportional)),
    (Small, FontId::new(13.0, Proportional)),
];

/// A trait for applying custom styling to the `egui` context (`Context`).
/// Used once at startup by `layout.rs::MovesViewApp::new`.
pub trait MyStyle {
    /// Applies a pre-defined application style to the `egui` context.
    fn set_style_init(&self, visuals: Visuals);
}

impl MyStyle for Context {
    /// Configures the application's look and feel (theme, spacing, text styles) by modifying `egui::Style`.
    ///
    /// ### Logic
    /// 1. Define custom scrollbar settings (`ScrollStyle`).
    /// 2. Define custom widget spacing (`Spacing`).
    /// 3. Create a full `Style` struct incorporating `Visuals` (theme), `Spacing`, and `CUSTOM_TEXT_STYLE`.
    /// 4. Apply the constructed `Style` to the `egui::Context`.
    fn set_style_init(&self, visuals: Visuals) {
        // 1. Define ScrollStyle.
        let scroll = ScrollStyle {
            handle_min_length: 32.0,
            ..ScrollStyle::default()
        };

        // 2. Define Spacing. Padding between widgets lives here, not in the widgets.
        let spacing = Spacing {
            scroll,
            item_spacing: [8.0, 4.0].into(),
            ..Spacing::default()
        };

        // 3. Create the main Style struct.
        let style = Style {
            visuals,
            spacing,
            text_styles: CUSTOM_TEXT_STYLE.into(),
            ..Style::default()
        };

        // 4. Set the style on the egui Context.
        self.set_style(style);
    }
}

/// Trait for modal Notification windows (like errors).
/// Allows `layout.rs` to manage different notification types polymorphically via `Box<dyn Notification>`.
pub trait Notification: Send + Sync + 'static {
    /// Renders the notification window using `egui::Window`.
    ///
    /// ### Returns
    /// `true` if the window should remain open, `false` if closed.
    fn show(&mut self, ctx: &Context) -> bool;
}

/// Notification struct for displaying error messages. Implements `Notification`.
pub struct Error {
    /// The error message content. Set by the caller in `layout.rs`.
    pub message: String,
}

impl Notification for Error {
    /// Renders the Error notification window.
    ///
    /// ### Logic
    /// 1. Create an `egui::Window` named "Error", bound to a local `open` flag.
    /// 2. Layout content area (fixed width, alignment).
    /// 3. Display the error `message` within a red frame.
    /// 4. Return the `open` state.
    fn show(&mut self, ctx: &Context) -> bool {
        let mut open = true;

        Window::new("Error")
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let width_max = ui.available_width() * 0.80;
                ui.allocate_ui_with_layout(
                    Vec2::new(width_max, ui.available_height()),
                    Layout::top_down(Align::LEFT),
                    |ui| {
                        Frame::default()
                            .fill(Color32::from_rgb(255, 200, 200)) // Light red bg
                            .stroke(Stroke::new(1.0, Color32::DARK_RED))
                            .outer_margin(2.0)
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.colored_label(Color32::BLACK, &self.message);
                            });
                    },
                );
            });

        open
    }
}

/// Trait defining a widget for rendering a sortable table header cell.
/// Provides a consistent interface for `table.rs::render_table`.
pub trait SortableHeaderRenderer {
    /// Renders a table header cell with a clickable sort indicator followed by the column name.
    ///
    /// ### Arguments
    /// * `column_name`: The text label for the column.
    /// * `direction`: The sort direction currently shown for *this* column.
    ///
    /// ### Returns
    /// * `egui::Response`: Interaction response of the whole header cell.
    ///   The caller handles clicks.
    fn render_sortable_header(&mut self, column_name: &str, direction: SortDirection) -> Response;
}

impl SortableHeaderRenderer for Ui {
    /// Displays indicator and label horizontally.
    /// The indicator is drawn inside a container sized for the widest icon so labels do not shift.
    fn render_sortable_header(
        &mut self,
        column_name: &str,
        direction: SortDirection,
    ) -> Response {
        let column_name_color = get_column_header_text_color(self.visuals());
        let text_style = TextStyle::Button;
        let icon_container_size =
            calculate_icon_container_size_for_string(self, &text_style, "▼");

        let outer_response = self.horizontal_centered(|ui| {
            ui.style_mut().override_text_style = Some(text_style.clone());

            let icon_response = ui.add_sized(
                icon_container_size,
                egui::Label::new(direction.get_icon()).sense(Sense::click()),
            );

            let name_response = ui.add(
                egui::Label::new(RichText::new(column_name).color(column_name_color).strong())
                    .sense(Sense::click()),
            );

            icon_response.union(name_response)
        });

        outer_response
            .inner
            .on_hover_text(format!("Click to sort by: {column_name}"))
    }
}

/// Helper: Determines header text color based on theme for contrast.
fn get_column_header_text_color(visuals: &Visuals) -> Color32 {
    if visuals.dark_mode {
        Color32::from_rgb(160, 200, 255) // Lighter blue for dark mode
    } else {
        Color32::from_rgb(0, 80, 160) // Darker blue for light mode
    }
}

/// Helper: Calculates the size needed for the icon container from a sample string.
fn calculate_icon_container_size_for_string(
    ui: &Ui,
    text_style: &TextStyle,
    sample_str: &str,
) -> Vec2 {
    let text_height = ui.text_style_height(text_style);
    let font_id = text_style.resolve(ui.style());
    let galley = ui
        .painter()
        .layout_no_wrap(sample_str.to_string(), font_id, Color32::PLACEHOLDER);

    Vec2::new((galley.size().x + 2.0).ceil(), text_height)
}

/// A closed set of labelled values (move types, move categories).
///
/// Provides the dropdown entries and the text ↔ value mapping used when loading cells.
pub trait Vocabulary: Copy + Eq + Ord + Hash + Send + Sync + 'static {
    /// Every member, in dropdown order.
    const ALL: &'static [Self];

    /// The label shown in the table and in the dropdowns.
    fn label(self) -> &'static str;

    /// Looks up a member by label, ignoring ASCII case and surrounding whitespace.
    fn from_label(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.label().eq_ignore_ascii_case(text))
    }
}

/// Trait to extend `Path` with a convenient method for getting the lowercase file extension.
/// Used by `data_source.rs` to reject non-CSV files.
pub trait PathExtension {
    /// Returns the file extension as a lowercase `String`, or `None`.
    fn extension_as_lowercase(&self) -> Option<String>;
}

impl PathExtension for Path {
    fn extension_as_lowercase(&self) -> Option<String> {
        self.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
    }
}

/// A trait for deduplicating vectors while preserving the original order of elements.
/// Used by `data_source.rs` for delimiter guessing.
pub trait UniqueElements<T> {
    /// Removes duplicate elements in place, keeping the first occurrence.
    fn unique(&mut self)
    where
        T: Eq + Hash + Clone;
}

impl<T> UniqueElements<T> for Vec<T> {
    fn unique(&mut self)
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        // `insert` returns true only the first time an element is seen.
        self.retain(|x| seen.insert(x.clone()));
    }
}

// --- Unit Tests ---

#[cfg(test)]
mod tests_path_extension {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_as_lowercase_some() {
        let path = PathBuf::from("moves.CSV");
        assert_eq!(path.extension_as_lowercase(), Some("csv".to_string()));
    }

    #[test]
    fn test_extension_as_lowercase_none() {
        let path = PathBuf::from("scraped data/moves");
        assert_eq!(path.extension_as_lowercase(), None);
    }

    #[test]
    fn test_extension_as_lowercase_multiple_dots() {
        let path = PathBuf::from("moves.gen7.backup.csv");
        assert_eq!(path.extension_as_lowercase(), Some("csv".to_string()));
    }
}

#[cfg(test)]
mod tests_unique {
    use super::*;

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let mut delimiters = vec![b';', b',', b';', b'|', b'\t'];
        delimiters.unique();
        assert_eq!(delimiters, vec![b';', b',', b'|', b'\t']);
    }

    #[test]
    fn test_unique_empty() {
        let mut vec: Vec<u8> = vec![];
        vec.unique();
        assert!(vec.is_empty());
    }
}
