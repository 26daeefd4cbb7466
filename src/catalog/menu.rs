use std::collections::HashSet;

use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::{ImageRef, MealId, MealRecord, Price};

/// Minimum Jaro-Winkler similarity for a fuzzy name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// The fixed, ordered menu. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    meals: Vec<MealRecord>,
}

impl Catalog {
    /// Create a catalog, rejecting empty lists and duplicate ids.
    pub fn new(meals: Vec<MealRecord>) -> Result<Self> {
        if meals.is_empty() {
            return Err(MenuError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for meal in &meals {
            if !seen.insert(meal.id) {
                return Err(MenuError::DuplicateMealId(meal.id));
            }
        }

        Ok(Self { meals })
    }

    /// The default menu shipped with the app.
    pub fn builtin() -> Self {
        let meal = |id: u32, name: &str, course: &str, rands: u64| {
            MealRecord::new(
                id,
                name,
                course,
                Price::from_cents(rands * 100),
                ImageRef::new(format!("Images/Image {}.jpg", id)),
            )
        };

        Self {
            meals: vec![
                meal(1, "Steak", "Mains", 250),
                meal(2, "Caesar Salad", "Starters", 100),
                meal(3, "Chocolate Cake", "Desserts", 80),
                meal(4, "Red Wine", "Drinks", 50),
            ],
        }
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn get(&self, id: MealId) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Exact, case-insensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&MealRecord> {
        let wanted = name.trim().to_lowercase();
        self.meals.iter().find(|m| m.key() == wanted)
    }

    /// Fuzzy name suggestions, best match first.
    pub fn suggest(&self, query: &str) -> Vec<&MealRecord> {
        let query = query.trim().to_lowercase();

        let mut candidates: Vec<(&MealRecord, f64)> = self
            .meals
            .iter()
            .map(|m| (m, jaro_winkler(&m.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(m, _)| m)
            .collect()
    }

    /// Exact match if there is one, otherwise the single best fuzzy match.
    pub fn resolve_name(&self, name: &str) -> Result<&MealRecord> {
        self.find_by_name(name)
            .or_else(|| self.suggest(name).into_iter().next())
            .ok_or_else(|| MenuError::MealNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
