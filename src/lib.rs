pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use catalog::Catalog;
pub use engine::{
    clear_selection, compute_average_prices, toggle_selection, AveragePriceView, Notice,
    SelectionState, ToggleOutcome, MAX_SELECTED_MEALS,
};
pub use error::{MenuError, Result};
pub use models::{Course, ImageRef, MealId, MealRecord, Price};
pub use state::MenuScreen;
