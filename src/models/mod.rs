mod meal;
mod price;

pub use meal::{Course, ImageRef, MealId, MealRecord};
pub use price::{Price, MAX_PRICE_CENTS};
