use serde::Serialize;

use crate::models::Meal;
use crate::models::food::FoodItem;

/// Items chosen for one meal and the calories they add up to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Chosen items in catalog order.
    pub items: Vec<FoodItem>,

    /// Sum of the chosen items' calories.
    pub achieved: u32,
}

impl Selection {
    /// Names of the chosen items, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single meal of a day plan.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    pub meal: Meal,

    /// Calorie ceiling handed to the selector.
    pub target: u32,

    pub selection: Selection,
}

impl MealPlan {
    /// Calories left unused under the target.
    pub fn gap(&self) -> u32 {
        self.target - self.selection.achieved
    }
}

/// Breakfast, lunch and dinner for one daily budget.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    /// Daily calorie budget the meal targets were derived from.
    pub daily_budget: f64,

    pub meals: Vec<MealPlan>,
}

impl DayPlan {
    pub fn total_achieved(&self) -> u32 {
        self.meals.iter().map(|m| m.selection.achieved).sum()
    }

    pub fn meal(&self, meal: Meal) -> Option<&MealPlan> {
        self.meals.iter().find(|m| m.meal == meal)
    }
}
