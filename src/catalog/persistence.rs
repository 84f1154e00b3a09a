use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MealCatalogs;
use crate::error::{PlannerError, Result};
use crate::models::{Catalog, CatalogRecord, Meal};

/// On-disk layout: one record list per meal. A missing meal is an empty list.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    breakfast: Vec<CatalogRecord>,
    #[serde(default)]
    lunch: Vec<CatalogRecord>,
    #[serde(default)]
    dinner: Vec<CatalogRecord>,
}

/// Load meal catalogs from a JSON file.
///
/// Record order in the file is the catalog order. Duplicate names within a
/// meal are dropped, first occurrence wins.
pub fn load_catalogs<P: AsRef<Path>>(path: P) -> Result<MealCatalogs> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content).map_err(|e| {
        PlannerError::Configuration(format!("malformed catalog file {}: {}", path.display(), e))
    })?;

    let catalogs = MealCatalogs::new(
        Catalog::from_records(file.breakfast)?,
        Catalog::from_records(file.lunch)?,
        Catalog::from_records(file.dinner)?,
    );

    tracing::info!(
        path = %path.display(),
        items = catalogs.len(),
        "loaded meal catalogs"
    );

    Ok(catalogs)
}

/// Save meal catalogs to a JSON file in the layout `load_catalogs` reads.
pub fn save_catalogs<P: AsRef<Path>>(path: P, catalogs: &MealCatalogs) -> Result<()> {
    let records = |meal: Meal| -> Vec<CatalogRecord> {
        catalogs
            .get(meal)
            .items()
            .iter()
            .map(|item| CatalogRecord::new(&item.category, &item.name, item.calories as f64))
            .collect()
    };

    let file = CatalogFile {
        breakfast: records(Meal::Breakfast),
        lunch: records(Meal::Lunch),
        dinner: records(Meal::Dinner),
    };

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}
