use rayon::prelude::*;

use crate::catalog::MealCatalogs;
use crate::error::Result;
use crate::models::{DayPlan, Meal, MealPlan};
use crate::planner::knapsack::{SelectorConfig, select_with};
use crate::planner::targets::MealTargets;

/// Fill breakfast, lunch and dinner for one daily budget.
///
/// The three selections share nothing and run in parallel. Any selector
/// error fails the whole plan; no partial plan is returned.
pub fn plan_day(
    daily_budget: f64,
    catalogs: &MealCatalogs,
    config: &SelectorConfig,
) -> Result<DayPlan> {
    let targets = MealTargets::from_daily_budget(daily_budget)?;

    tracing::info!(
        daily_budget,
        breakfast = targets.breakfast,
        lunch = targets.lunch,
        dinner = targets.dinner,
        "planning day"
    );

    let meals = Meal::ALL[..]
        .par_iter()
        .map(|&meal| plan_meal(meal, targets.for_meal(meal), catalogs, config))
        .collect::<Result<Vec<MealPlan>>>()?;

    Ok(DayPlan {
        daily_budget,
        meals,
    })
}

/// Run the selector for a single meal.
pub fn plan_meal(
    meal: Meal,
    target: u32,
    catalogs: &MealCatalogs,
    config: &SelectorConfig,
) -> Result<MealPlan> {
    let selection = select_with(target as i64, catalogs.get(meal), config)?;

    tracing::debug!(
        meal = meal.key(),
        target_calories = target,
        achieved = selection.achieved,
        "meal selected"
    );

    Ok(MealPlan {
        meal,
        target,
        selection,
    })
}
