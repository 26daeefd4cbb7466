use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{MenuError, Result};
use crate::models::MealRecord;

/// Load a replacement catalog from a `.json` or `.csv` file.
///
/// JSON is an array of meal records; CSV has the header
/// `id,name,course,price,image`. The file is only ever read.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let meals = match extension.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        other => {
            return Err(MenuError::UnsupportedCatalogFormat(format!(
                "'{}' ({})",
                other,
                path.display()
            )))
        }
    };

    let catalog = Catalog::new(meals)?;
    info!(path = %path.display(), meals = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn read_json(path: &Path) -> Result<Vec<MealRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_csv(path: &Path) -> Result<Vec<MealRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut meals = Vec::new();
    for record in rdr.deserialize::<MealRecord>() {
        meals.push(record?);
    }
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealId;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"[
                {"id": 1, "name": "Soup", "course": "Starters", "price": 45, "image": "soup.png"},
                {"id": 2, "name": "Lamb", "course": "Mains", "price": 199.99}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(MealId(2)).unwrap().price.cents(), 19_999);
        assert_eq!(catalog.get(MealId(1)).unwrap().image.as_str(), "soup.png");
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp(
            ".csv",
            "id,name,course,price,image\n\
             10,Tiramisu,Desserts,65.5,tiramisu.jpg\n\
             11,Espresso,Drinks,25,\n",
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        let tiramisu = catalog.find_by_name("tiramisu").unwrap();
        assert_eq!(tiramisu.id, MealId(10));
        assert_eq!(tiramisu.price.to_string(), "65.50");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let file = write_temp(
            ".json",
            r#"[
                {"id": 1, "name": "Soup", "course": "Starters", "price": 45},
                {"id": 1, "name": "Bread", "course": "Starters", "price": 20}
            ]"#,
        );

        assert!(matches!(
            load_catalog(file.path()),
            Err(MenuError::DuplicateMealId(MealId(1)))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let file = write_temp(
            ".json",
            r#"[{"id": 1, "name": "Soup", "course": "Starters", "price": -1}]"#,
        );

        assert!(matches!(load_catalog(file.path()), Err(MenuError::Json(_))));
    }

    #[test]
    fn test_price_above_maximum_rejected() {
        let file = write_temp(
            ".json",
            r#"[
                {"id": 1, "name": "Steak", "course": "Mains", "price": 1e17},
                {"id": 2, "name": "Wagyu", "course": "Mains", "price": 1e17}
            ]"#,
        );

        assert!(matches!(load_catalog(file.path()), Err(MenuError::Json(_))));
    }

    #[test]
    fn test_price_above_maximum_rejected_in_csv() {
        let file = write_temp(
            ".csv",
            "id,name,course,price,image\n\
             1,Caviar,Starters,1e30,\n",
        );

        assert!(matches!(load_catalog(file.path()), Err(MenuError::Csv(_))));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = write_temp(".yaml", "- id: 1");
        assert!(matches!(
            load_catalog(file.path()),
            Err(MenuError::UnsupportedCatalogFormat(_))
        ));
    }
}
