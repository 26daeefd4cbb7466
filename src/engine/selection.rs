use std::fmt;

use tracing::{debug, warn};

use crate::models::{MealId, MealRecord};

/// Most meals a user may hold selected at once.
pub const MAX_SELECTED_MEALS: usize = 4;

/// Meals currently chosen, in the order they were chosen.
///
/// Holds at most [`MAX_SELECTED_MEALS`] entries and never the same id twice.
/// Only [`toggle_selection`] and [`clear_selection`] produce new states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_meals: Vec<MealRecord>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_meals(&self) -> &[MealRecord] {
        &self.selected_meals
    }

    pub fn contains(&self, id: MealId) -> bool {
        self.selected_meals.iter().any(|m| m.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.selected_meals.len() >= MAX_SELECTED_MEALS
    }

    pub fn len(&self) -> usize {
        self.selected_meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_meals.is_empty()
    }
}

/// Non-fatal, user-facing message. The caller picks how to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CapacityExceeded,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::CapacityExceeded => "You can only select up to 4 meals.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection left untouched.
    Rejected(Notice),
}

impl ToggleOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ToggleOutcome::Rejected(notice) => Some(*notice),
            _ => None,
        }
    }

    pub fn changed_selection(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected(_))
    }
}

/// Select `meal` if it is absent, deselect it if present.
///
/// Adding to a full selection is refused with
/// [`Notice::CapacityExceeded`] and returns the state unchanged.
pub fn toggle_selection(
    meal: &MealRecord,
    mut state: SelectionState,
) -> (SelectionState, ToggleOutcome) {
    if let Some(pos) = state.selected_meals.iter().position(|m| m.id == meal.id) {
        state.selected_meals.remove(pos);
        debug!(meal = %meal.name, id = %meal.id, selected = state.len(), "meal deselected");
        return (state, ToggleOutcome::Removed);
    }

    if state.is_full() {
        warn!(meal = %meal.name, id = %meal.id, "selection full, meal not added");
        return (state, ToggleOutcome::Rejected(Notice::CapacityExceeded));
    }

    state.selected_meals.push(meal.clone());
    debug!(meal = %meal.name, id = %meal.id, selected = state.len(), "meal selected");
    (state, ToggleOutcome::Added)
}

/// Drop every selected meal. Clearing an empty selection is a no-op.
pub fn clear_selection(state: SelectionState) -> SelectionState {
    if !state.is_empty() {
        debug!(cleared = state.len(), "selection cleared");
    }
    SelectionState::new()
}
