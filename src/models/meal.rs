use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Price;

/// Stable catalog identifier of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(pub u32);

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Course label such as "Mains" or "Drinks". The set is open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(String);

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Course {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Opaque handle to a meal's picture. Never opened or parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: MealId,
    pub name: String,
    pub course: Course,
    pub price: Price,
    #[serde(default)]
    pub image: ImageRef,
}

impl MealRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        course: impl Into<Course>,
        price: Price,
        image: ImageRef,
    ) -> Self {
        Self {
            id: MealId(id),
            name: name.into(),
            course: course.into(),
            price,
            image,
        }
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Two records are the same meal when their ids match.
impl PartialEq for MealRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MealRecord {}

impl std::hash::Hash for MealRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
