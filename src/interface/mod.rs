pub mod prompts;
pub mod render;

pub use prompts::{prompt_action, prompt_meal_name, prompt_yes_no, ScreenAction};
pub use render::{
    average_price_lines, display_catalog, display_notice, display_screen, selected_meal_lines,
};
