mod menu;
mod persistence;

pub use menu::{Catalog, FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS};
pub use persistence::load_catalog;
