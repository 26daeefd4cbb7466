use dialoguer::{Confirm, Input, Select};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::interface::render::CURRENCY;
use crate::models::MealId;
use crate::state::MenuScreen;

/// A single user action on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Toggle(MealId),
    SearchByName,
    Clear,
    Quit,
}

/// Show the menu with selection marks and ask what to do next.
pub fn prompt_action(screen: &MenuScreen<'_>) -> Result<ScreenAction> {
    let meals = screen.catalog().meals();

    let mut items: Vec<String> = meals
        .iter()
        .map(|meal| {
            let mark = if screen.selection().contains(meal.id) { "[x]" } else { "[ ]" };
            format!(
                "{} {} ({}) - {}{}",
                mark, meal.name, meal.course, CURRENCY, meal.price
            )
        })
        .collect();
    items.push("Find a meal by name".to_string());
    items.push("Clear Selections".to_string());
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("Select your meals (up to 4)")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection.checked_sub(meals.len()) {
        None => ScreenAction::Toggle(meals[selection].id),
        Some(0) => ScreenAction::SearchByName,
        Some(1) => ScreenAction::Clear,
        Some(_) => ScreenAction::Quit,
    })
}

/// Ask for a meal name and resolve it against the catalog.
///
/// Tries an exact (case-insensitive) match first, then fuzzy suggestions.
/// Returns `None` when nothing matched or the user declined.
pub fn prompt_meal_name(catalog: &Catalog) -> Result<Option<MealId>> {
    let input: String = Input::new()
        .with_prompt("Meal name (or press Enter to go back)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(meal) = catalog.find_by_name(input) {
        return Ok(Some(meal.id));
    }

    let candidates = catalog.suggest(input);

    match candidates.as_slice() {
        [] => {
            println!("No matching meal found for '{}'", input);
            Ok(None)
        }
        [meal] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", meal.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(meal.id))
        }
        _ => {
            let mut options: Vec<String> = candidates.iter().map(|m| m.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).map(|m| m.id))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
