use crate::models::{Catalog, Meal};

/// The three disjoint per-meal catalogs, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct MealCatalogs {
    breakfast: Catalog,
    lunch: Catalog,
    dinner: Catalog,
}

impl MealCatalogs {
    pub fn new(breakfast: Catalog, lunch: Catalog, dinner: Catalog) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    /// Catalog for a meal.
    pub fn get(&self, meal: Meal) -> &Catalog {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }

    /// Total number of items across all meals.
    pub fn len(&self) -> usize {
        Meal::ALL.iter().map(|&meal| self.get(meal).len()).sum()
    }

    /// Check if every meal catalog is empty.
    pub fn is_empty(&self) -> bool {
        Meal::ALL.iter().all(|&meal| self.get(meal).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    #[test]
    fn test_get_returns_meal_catalog() {
        let catalogs = MealCatalogs::new(
            Catalog::from_items([FoodItem::new("fruits", "Apple", 95)]),
            Catalog::new(),
            Catalog::from_items([
                FoodItem::new("protein", "Salmon", 350),
                FoodItem::new("vegetables", "Broccoli", 55),
            ]),
        );

        assert_eq!(catalogs.get(Meal::Breakfast).len(), 1);
        assert!(catalogs.get(Meal::Lunch).is_empty());
        assert!(catalogs.get(Meal::Dinner).get("salmon").is_some());
        assert_eq!(catalogs.len(), 3);
        assert!(!catalogs.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(MealCatalogs::default().is_empty());
    }
}
