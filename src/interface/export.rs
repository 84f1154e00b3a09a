use std::path::Path;

use crate::error::Result;
use crate::models::DayPlan;

/// Write the chosen items of a day plan to a CSV file.
///
/// One row per item, followed by a `total` row per meal.
pub fn write_plan_csv(plan: &DayPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "category", "item", "calories", "target"])?;

    for meal_plan in &plan.meals {
        let meal = meal_plan.meal.key();
        let target = meal_plan.target.to_string();

        for item in &meal_plan.selection.items {
            let calories = item.calories.to_string();
            wtr.write_record([
                meal,
                item.category.as_str(),
                item.name.as_str(),
                calories.as_str(),
                target.as_str(),
            ])?;
        }

        let achieved = meal_plan.selection.achieved.to_string();
        wtr.write_record([meal, "", "total", achieved.as_str(), target.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize a day plan as pretty JSON.
pub fn plan_to_json(plan: &DayPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
