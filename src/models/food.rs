use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A food item with a fixed calorie cost.
///
/// Category is informational only; selection never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodItem {
    pub name: String,
    pub category: String,
    pub calories: u32,
}

impl FoodItem {
    pub fn new(category: impl Into<String>, name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            calories,
        }
    }

    /// Canonical key for case-insensitive lookups (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// One row of a catalog file, before validation.
///
/// Calories are read as a float so that negative or fractional costs are
/// reported as invalid input instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub category: String,
    pub name: String,
    pub calories: f64,
}

impl CatalogRecord {
    pub fn new(category: &str, name: &str, calories: f64) -> Self {
        Self {
            category: category.to_string(),
            name: name.to_string(),
            calories,
        }
    }

    /// Validate the record into a `FoodItem`.
    pub fn into_item(self) -> Result<FoodItem> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidInput(
                "food item name must not be empty".to_string(),
            ));
        }

        if !self.calories.is_finite() {
            return Err(PlannerError::InvalidInput(format!(
                "{}: calorie cost is not a finite number",
                self.name
            )));
        }

        if self.calories < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "{}: calorie cost {} is negative",
                self.name, self.calories
            )));
        }

        if self.calories.fract() != 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "{}: calorie cost {} is not an integer",
                self.name, self.calories
            )));
        }

        if self.calories > u32::MAX as f64 {
            return Err(PlannerError::InvalidInput(format!(
                "{}: calorie cost {} is out of range",
                self.name, self.calories
            )));
        }

        Ok(FoodItem::new(self.category, self.name, self.calories as u32))
    }
}
