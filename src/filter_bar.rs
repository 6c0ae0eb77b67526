use crate::{ALL_LABEL, ViewAction, ViewState, Vocabulary, selection_label};

use egui::{ComboBox, Key, TextEdit, Ui};

/// Widgets above the table: search box, Type and Category dropdowns, Clear button.
///
/// The bar owns only the search text being typed. Everything else is read from the
/// current `ViewState` each frame, and every user change is reported as a `ViewAction`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBar {
    /// Text in the search box. Applied on Enter, or along with the next dropdown
    /// change or header click.
    pub search_draft: String,
}

impl FilterBar {
    /// Creates a bar whose search box shows the search text of `state`.
    pub fn new(state: &ViewState) -> Self {
        FilterBar {
            search_draft: state.filter.search_text.clone(),
        }
    }

    /// Renders the bar in a horizontal row.
    ///
    /// ### Returns
    /// * `Some(ViewAction)`: the change made by the user in this frame.
    /// * `None`: nothing was submitted, selected or clicked.
    pub fn render(&mut self, state: &ViewState, ui: &mut Ui) -> Option<ViewAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label("Search:");
            let search_edit = TextEdit::singleline(&mut self.search_draft)
                .hint_text("name or effect")
                .desired_width(220.0);
            let response = ui
                .add(search_edit)
                .on_hover_text("Press Enter to apply. Case-insensitive.");

            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                action = Some(ViewAction::SetSearchText(self.search_draft.clone()));
            }

            ui.separator();

            ui.label("Type:");
            if let Some(selection) = selection_combo("type_filter", state.type_selection(), ui) {
                action = Some(ViewAction::SetTypeFilter(selection));
            }

            ui.label("Category:");
            if let Some(selection) =
                selection_combo("category_filter", state.category_selection(), ui)
            {
                action = Some(ViewAction::SetCategoryFilter(selection));
            }

            ui.separator();

            if ui
                .button("Clear")
                .on_hover_text("Reset search, filters and sort")
                .clicked()
            {
                action = Some(ViewAction::Clear);
            }
        });

        if let Some(ViewAction::Clear) = action {
            self.search_draft.clear();
        }

        action
    }

    /// The actions to dispatch for `action`, preceded by the search box content when it
    /// was edited but not yet submitted.
    ///
    /// A dropdown change or a header click applies the search text as well, so the
    /// displayed rows always agree with what the search box shows.
    pub fn with_pending_search(&self, state: &ViewState, action: ViewAction) -> Vec<ViewAction> {
        let draft_pending = !matches!(action, ViewAction::SetSearchText(_) | ViewAction::Clear)
            && self.search_draft.trim() != state.filter.search_text;

        let mut actions = Vec::with_capacity(2);
        if draft_pending {
            actions.push(ViewAction::SetSearchText(self.search_draft.clone()));
        }
        actions.push(action);
        actions
    }
}

/// A dropdown with "All" followed by every vocabulary value.
///
/// Returns `Some(new_selection)` only if the user picked a different entry.
fn selection_combo<T: Vocabulary>(
    id: &str,
    current: Option<T>,
    ui: &mut Ui,
) -> Option<Option<T>> {
    let mut selected = current;

    ComboBox::from_id_salt(id)
        .selected_text(selection_label(selected))
        .height(400.0)
        .show_ui(ui, |ui| {
            for (value, label) in entries::<T>() {
                ui.selectable_value(&mut selected, value, label);
            }
        });

    (selected != current).then_some(selected)
}

/// Dropdown entries in display order: "All" (`None`) then every vocabulary value.
pub fn entries<T: Vocabulary>() -> impl Iterator<Item = (Option<T>, &'static str)> {
    std::iter::once((None, ALL_LABEL))
        .chain(T::ALL.iter().map(|&value| (Some(value), value.label())))
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//

/// Run tests with:
/// cargo test -- --show-output tests_filter_bar
#[cfg(test)]
mod tests_filter_bar {
    use super::*;

    use crate::{MoveCategory, MoveColumn, MoveType};

    #[test]
    fn test_type_entries_order() {
        let entries: Vec<(Option<MoveType>, &str)> = entries().collect();
        assert_eq!(entries.len(), 19);
        assert_eq!(entries[0], (None, "All"));
        assert_eq!(entries[1], (Some(MoveType::Normal), "Normal"));
        assert_eq!(entries[2], (Some(MoveType::Fire), "Fire"));
        assert_eq!(entries[18], (Some(MoveType::Fairy), "Fairy"));
    }

    #[test]
    fn test_category_entries_order() {
        let labels: Vec<&str> = entries::<MoveCategory>().map(|(_, label)| label).collect();
        assert_eq!(labels, ["All", "Physical", "Special", "Status", "Z-Move"]);
    }

    #[test]
    fn test_entry_labels_match_selection_labels() {
        for (value, label) in entries::<MoveType>() {
            assert_eq!(selection_label(value), label);
        }
    }

    #[test]
    fn test_new_bar_shows_state_search() {
        let state = ViewState::default().apply(ViewAction::SetSearchText(" burn ".into()));
        let bar = FilterBar::new(&state);
        assert_eq!(bar.search_draft, "burn");
    }

    #[test]
    fn test_unsubmitted_search_applies_with_dropdown_change() {
        let state = ViewState::default();
        let mut bar = FilterBar::new(&state);
        bar.search_draft = "burn".to_string();

        let actions =
            bar.with_pending_search(&state, ViewAction::SetTypeFilter(Some(MoveType::Fire)));

        assert_eq!(
            actions,
            vec![
                ViewAction::SetSearchText("burn".to_string()),
                ViewAction::SetTypeFilter(Some(MoveType::Fire)),
            ]
        );

        let state = actions.into_iter().fold(state, |state, a| state.apply(a));
        assert_eq!(state.filter.search_text, "burn");
        assert_eq!(state.type_selection(), Some(MoveType::Fire));
    }

    #[test]
    fn test_unsubmitted_search_applies_with_sort_click() {
        let state = ViewState::default();
        let mut bar = FilterBar::new(&state);
        bar.search_draft = "blitz ".to_string();

        let actions = bar.with_pending_search(&state, ViewAction::ActivateSort(MoveColumn::Power));

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], ViewAction::SetSearchText("blitz ".to_string()));
    }

    #[test]
    fn test_submitted_search_is_not_repeated() {
        let state = ViewState::default().apply(ViewAction::SetSearchText("burn".into()));
        let bar = FilterBar::new(&state);

        let action = ViewAction::SetCategoryFilter(Some(MoveCategory::Special));
        assert_eq!(bar.with_pending_search(&state, action.clone()), vec![action]);

        assert_eq!(
            bar.with_pending_search(&state, ViewAction::Clear),
            vec![ViewAction::Clear]
        );
    }
}
