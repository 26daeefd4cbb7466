use thiserror::Error;

use crate::models::MealId;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Duplicate meal id in catalog: {0}")]
    DuplicateMealId(MealId),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Catalog has no meals")]
    EmptyCatalog,

    #[error("Unsupported catalog format: {0}")]
    UnsupportedCatalogFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
