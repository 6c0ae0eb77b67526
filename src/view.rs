//! The view state machine.
//!
//! `ViewState` is an explicit value; `ViewAction`s produce new states through
//! [`ViewState::apply`], and [`derive_view`] turns a dataset plus a state into the
//! displayed row order. `ViewController` glues these together for the UI: it owns
//! the current state, the derived rows, and a revision counter the display layer
//! watches to know when to redraw.

use crate::{Dataset, FilterCriteria, MoveCategory, MoveColumn, MoveRecord, MoveType, SortSpec};

use std::{collections::BTreeSet, sync::Arc};

/// A user interaction that changes the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Search box text, sent on Enter or ahead of a dropdown change or header click.
    SetSearchText(String),
    /// `None` selects "All".
    SetTypeFilter(Option<MoveType>),
    /// `None` selects "All".
    SetCategoryFilter(Option<MoveCategory>),
    /// A click on a column header.
    ActivateSort(MoveColumn),
    /// The Clear button.
    Clear,
}

/// Everything that determines which rows are shown and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: FilterCriteria,
    pub sort: SortSpec,
}

impl ViewState {
    /// Returns the state that results from `action`.
    pub fn apply(&self, action: ViewAction) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::SetSearchText(text) => {
                next.filter.search_text = text.trim().to_string();
            }
            ViewAction::SetTypeFilter(selection) => {
                next.filter.types = selection.into_iter().collect::<BTreeSet<_>>();
            }
            ViewAction::SetCategoryFilter(selection) => {
                next.filter.categories = selection.into_iter().collect::<BTreeSet<_>>();
            }
            ViewAction::ActivateSort(column) => {
                next.sort = self.sort.activate(column);
            }
            ViewAction::Clear => {
                next = ViewState::default();
            }
        }
        next
    }

    /// The single selected type, or `None` for "All".
    pub fn type_selection(&self) -> Option<MoveType> {
        single(&self.filter.types)
    }

    /// The single selected category, or `None` for "All".
    pub fn category_selection(&self) -> Option<MoveCategory> {
        single(&self.filter.categories)
    }
}

/// The only element of a one-element set. Empty or larger sets read as "All"
/// in a single-choice dropdown.
fn single<T: Copy>(set: &BTreeSet<T>) -> Option<T> {
    match set.len() {
        1 => set.iter().next().copied(),
        _ => None,
    }
}

/// Computes `sort(filter(dataset, state.filter), state.sort)` as dataset positions.
pub fn derive_view(records: &[MoveRecord], state: &ViewState) -> Vec<usize> {
    let mut rows = state.filter.apply(records);
    state.sort.apply(records, &mut rows);
    rows
}

/// Holds the current `ViewState` and the rows derived from it.
#[derive(Debug, Clone)]
pub struct ViewController {
    dataset: Arc<Dataset>,
    state: ViewState,
    rows: Vec<usize>,
    /// Incremented every time `rows` is recomputed.
    revision: u64,
}

impl ViewController {
    /// Creates a controller and computes its first view.
    pub fn new(dataset: Arc<Dataset>, state: ViewState) -> Self {
        let rows = derive_view(dataset.records(), &state);
        tracing::debug!(
            "ViewController::new(): {} of {} rows shown",
            rows.len(),
            dataset.len()
        );
        ViewController {
            dataset,
            state,
            rows,
            revision: 0,
        }
    }

    /// Applies `action`, then recomputes the rows from scratch.
    pub fn dispatch(&mut self, action: ViewAction) {
        tracing::debug!("dispatch(): {action:?}");
        self.state = self.state.apply(action);
        self.rows = derive_view(self.dataset.records(), &self.state);
        self.revision += 1;
        tracing::debug!(
            "revision {}: {} of {} rows shown, sort {:?}",
            self.revision,
            self.rows.len(),
            self.dataset.len(),
            self.state.sort
        );
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.dispatch(ViewAction::SetSearchText(text.into()));
    }

    pub fn set_type_filter(&mut self, selection: Option<MoveType>) {
        self.dispatch(ViewAction::SetTypeFilter(selection));
    }

    pub fn set_category_filter(&mut self, selection: Option<MoveCategory>) {
        self.dispatch(ViewAction::SetCategoryFilter(selection));
    }

    pub fn activate_sort(&mut self, column: MoveColumn) {
        self.dispatch(ViewAction::ActivateSort(column));
    }

    /// Resets the filters to "All", the search to empty and the sort to Name ascending.
    pub fn clear(&mut self) {
        self.dispatch(ViewAction::Clear);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Dataset positions of the displayed rows, in display order.
    pub fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    /// The displayed records, in display order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &MoveRecord> + '_ {
        let records = self.dataset.records();
        self.rows.iter().map(move |&index| &records[index])
    }
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//
