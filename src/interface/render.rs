use crate::catalog::Catalog;
use crate::engine::{AveragePriceView, Notice};
use crate::models::MealRecord;
use crate::state::MenuScreen;

/// Currency symbol shown in front of prices.
pub const CURRENCY: &str = "R";

const NOTHING_SELECTED: &str = "No meals selected yet.";

/// Lines of the "Average Prices by Course" panel.
pub fn average_price_lines(view: &AveragePriceView) -> Vec<String> {
    let mut lines = vec!["Average Prices by Course:".to_string()];
    if view.is_empty() {
        lines.push(NOTHING_SELECTED.to_string());
    } else {
        lines.extend(
            view.iter()
                .map(|entry| format!("{}: {}{}", entry.course, CURRENCY, entry.average)),
        );
    }
    lines
}

/// Lines of the "Selected Meals" panel.
pub fn selected_meal_lines(selected: &[MealRecord]) -> Vec<String> {
    let mut lines = vec!["Selected Meals:".to_string()];
    if selected.is_empty() {
        lines.push(NOTHING_SELECTED.to_string());
    } else {
        lines.extend(selected.iter().map(|meal| meal.name.clone()));
    }
    lines
}

/// Render the whole screen: averages, menu size, and current selection.
pub fn display_screen(screen: &MenuScreen<'_>) {
    println!();
    for line in average_price_lines(&screen.average_prices()) {
        println!("{}", line);
    }
    println!();
    println!("Total Menu Items Available: {}", screen.total_menu_items());
    println!();
    for line in selected_meal_lines(screen.selected_meals()) {
        println!("{}", line);
    }
    println!();
}

/// Display the catalog as a table.
pub fn display_catalog(catalog: &Catalog) {
    let max_name_len = catalog
        .meals()
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Menu ({} items) ===", catalog.len());
    println!();

    for meal in catalog.meals() {
        println!(
            "{:>3}. {:<width$}  {:<10} {}{:>8}",
            meal.id,
            meal.name,
            meal.course,
            CURRENCY,
            meal.price.to_string(),
            width = max_name_len
        );
    }

    println!();
}

pub fn display_notice(notice: Notice) {
    println!("! {}", notice);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_average_prices;

    #[test]
    fn test_average_lines_empty() {
        let lines = average_price_lines(&AveragePriceView::default());
        assert_eq!(lines, ["Average Prices by Course:", "No meals selected yet."]);
    }

    #[test]
    fn test_average_lines_with_selection() {
        let catalog = Catalog::builtin();
        let view = compute_average_prices(&catalog.meals()[..2]);
        let lines = average_price_lines(&view);
        assert_eq!(
            lines,
            ["Average Prices by Course:", "Mains: R250.00", "Starters: R100.00"]
        );
    }

    #[test]
    fn test_selected_lines() {
        let catalog = Catalog::builtin();
        assert_eq!(selected_meal_lines(&[]), ["Selected Meals:", "No meals selected yet."]);
        assert_eq!(
            selected_meal_lines(&catalog.meals()[2..]),
            ["Selected Meals:", "Chocolate Cake", "Red Wine"]
        );
    }
}
