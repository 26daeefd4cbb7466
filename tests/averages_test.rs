#[macro_use]
extern crate assert_float_eq;

use std::io::Write;

use meal_picker_rs::catalog::{load_catalog, Catalog};
use meal_picker_rs::engine::compute_average_prices;
use meal_picker_rs::models::{ImageRef, MealId, MealRecord, Price, MAX_PRICE_CENTS};
use meal_picker_rs::state::MenuScreen;

fn meal(id: u32, name: &str, course: &str, price: f64) -> MealRecord {
    MealRecord::new(id, name, course, Price::from_major(price).unwrap(), ImageRef::default())
}

#[test]
fn test_empty_selection() {
    assert!(compute_average_prices(&[]).is_empty());
}

#[test]
fn test_steak_and_salad() {
    let catalog = Catalog::builtin();
    let selection = [
        catalog.get(MealId(1)).unwrap().clone(),
        catalog.get(MealId(2)).unwrap().clone(),
    ];

    let view = compute_average_prices(&selection);
    assert_eq!(view.len(), 2);
    assert_eq!(view.get("Mains").unwrap().to_string(), "250.00");
    assert_eq!(view.get("Starters").unwrap().to_string(), "100.00");
}

#[test]
fn test_four_distinct_courses_match_own_price() {
    let catalog = Catalog::builtin();
    let selection: Vec<MealRecord> = [1, 4, 3, 2]
        .into_iter()
        .map(|id| catalog.get(MealId(id)).unwrap().clone())
        .collect();

    let view = compute_average_prices(&selection);
    assert_eq!(view.len(), 4);
    for meal in &selection {
        assert_eq!(view.get(meal.course.as_str()), Some(meal.price));
    }
}

#[test]
fn test_two_mains_averaged() {
    let view = compute_average_prices(&[
        meal(1, "Steak", "Mains", 250.0),
        meal(5, "Fillet", "Mains", 150.0),
    ]);

    assert_eq!(view.len(), 1);
    let mains = view.get("Mains").unwrap();
    assert_eq!(mains.to_string(), "200.00");
    assert_float_absolute_eq!(mains.as_major(), 200.0, 1e-9);
}

#[test]
fn test_key_set_matches_selected_courses() {
    let view = compute_average_prices(&[
        meal(1, "Steak", "Mains", 250.0),
        meal(2, "Lager", "Drinks", 35.0),
        meal(3, "Red Wine", "Drinks", 50.0),
    ]);

    let mut courses: Vec<&str> = view.courses().map(|c| c.as_str()).collect();
    courses.sort_unstable();
    assert_eq!(courses, ["Drinks", "Mains"]);
    assert_float_absolute_eq!(view.get("Drinks").unwrap().as_major(), 42.5, 1e-9);
}

#[test]
fn test_half_cent_rounds_up() {
    let view = compute_average_prices(&[
        meal(1, "Tea", "Drinks", 10.00),
        meal(2, "Coffee", "Drinks", 10.01),
    ]);
    assert_eq!(view.get("Drinks").unwrap().to_string(), "10.01");
}

#[test]
fn test_screen_view_follows_taps() {
    let catalog = Catalog::builtin();
    let mut screen = MenuScreen::new(&catalog);

    screen.tap(MealId(1)).unwrap();
    screen.tap(MealId(4)).unwrap();
    assert_eq!(screen.average_prices().len(), 2);

    screen.tap(MealId(1)).unwrap();
    let view = screen.average_prices();
    assert_eq!(view.len(), 1);
    assert_eq!(view.get("Drinks").unwrap().to_string(), "50.00");

    screen.clear();
    assert!(screen.average_prices().is_empty());
}

#[test]
fn test_two_maximum_price_meals() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "name": "Steak", "course": "Mains", "price": 1000000000}},
            {{"id": 2, "name": "Wagyu", "course": "Mains", "price": 1000000000}}
        ]"#
    )
    .unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    let mut screen = MenuScreen::new(&catalog);
    screen.tap(MealId(1)).unwrap();
    screen.tap(MealId(2)).unwrap();

    let view = screen.average_prices();
    assert_eq!(view.get("Mains"), Some(Price::MAX));
    assert_eq!(Price::MAX.cents(), MAX_PRICE_CENTS);
}
