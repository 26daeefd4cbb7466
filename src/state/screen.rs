use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::{
    clear_selection, compute_average_prices, toggle_selection, AveragePriceView, Notice,
    SelectionState, ToggleOutcome,
};
use crate::error::{MenuError, Result};
use crate::models::{MealId, MealRecord};

/// One mounted menu screen: the catalog it shows and the selection it owns.
///
/// The selection lives exactly as long as the screen value.
pub struct MenuScreen<'a> {
    catalog: &'a Catalog,
    selection: SelectionState,
    /// Notice raised by the last tap and not yet taken.
    pending_notice: Option<Notice>,
    /// Meal whose rejection has already been surfaced.
    last_rejected: Option<MealId>,
}

impl<'a> MenuScreen<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            pending_notice: None,
            last_rejected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Toggle the catalog meal with the given id.
    pub fn tap(&mut self, id: MealId) -> Result<ToggleOutcome> {
        let catalog = self.catalog;
        let meal = catalog
            .get(id)
            .ok_or_else(|| MenuError::MealNotFound(id.to_string()))?;

        let selection = std::mem::take(&mut self.selection);
        let (selection, outcome) = toggle_selection(meal, selection);
        self.selection = selection;

        match outcome {
            ToggleOutcome::Rejected(notice) => {
                if self.last_rejected == Some(id) {
                    debug!(id = %id, "repeat rejection, notice suppressed");
                } else {
                    self.pending_notice = Some(notice);
                    self.last_rejected = Some(id);
                }
            }
            ToggleOutcome::Added | ToggleOutcome::Removed => {
                self.pending_notice = None;
                self.last_rejected = None;
            }
        }

        Ok(outcome)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = clear_selection(selection);
        self.pending_notice = None;
        self.last_rejected = None;
    }

    /// Take the notice to surface for the last tap, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.pending_notice.take()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_meals(&self) -> &[MealRecord] {
        self.selection.selected_meals()
    }

    /// Recomputed on every call.
    pub fn average_prices(&self) -> AveragePriceView {
        compute_average_prices(self.selection.selected_meals())
    }

    pub fn total_menu_items(&self) -> usize {
        self.catalog.len()
    }
}
