pub mod averages;
pub mod selection;

pub use averages::{compute_average_prices, AveragePriceView, CourseAverage};
pub use selection::{
    clear_selection, toggle_selection, Notice, SelectionState, ToggleOutcome, MAX_SELECTED_MEALS,
};
