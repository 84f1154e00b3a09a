use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::Meal;
use crate::planner::constants::{BREAKFAST_RATIO, DINNER_RATIO, LUNCH_RATIO};

/// Per-meal calorie ceilings derived from one daily budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealTargets {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl MealTargets {
    /// Split a daily budget 1/2, 1/3, 1/6 across breakfast, lunch, dinner.
    ///
    /// Each share is rounded to the nearest calorie, halves rounding up.
    pub fn from_daily_budget(budget: f64) -> Result<Self> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "daily calorie budget must be a non-negative number, got {}",
                budget
            )));
        }

        Ok(Self {
            breakfast: round_calories(budget * BREAKFAST_RATIO)?,
            lunch: round_calories(budget * LUNCH_RATIO)?,
            dinner: round_calories(budget * DINNER_RATIO)?,
        })
    }

    pub fn for_meal(&self, meal: Meal) -> u32 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }
}

fn round_calories(value: f64) -> Result<u32> {
    let rounded = value.round();
    if rounded > u32::MAX as f64 {
        return Err(PlannerError::InvalidInput(format!(
            "meal target {} is out of range",
            value
        )));
    }
    Ok(rounded as u32)
}
