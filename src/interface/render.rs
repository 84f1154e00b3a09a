use crate::models::{Catalog, DayPlan, Meal, MealPlan};

/// Greeting line shown above a plan.
pub fn greeting(name: &str) -> String {
    if name.trim().is_empty() {
        "Here is your meal plan for the day.".to_string()
    } else {
        format!("Hello {}! Here is your meal plan for the day.", name.trim())
    }
}

/// Display a full day plan, one section per meal.
pub fn display_day_plan(plan: &DayPlan, name: &str) {
    println!();
    println!("{}", greeting(name));
    println!("Your daily intake needs to have: {:.2} calories", plan.daily_budget);

    for meal_plan in &plan.meals {
        display_meal_plan(meal_plan);
    }

    println!("--- Summary ---");
    println!("Total calories: {}", plan.total_achieved());
    println!();
}

/// Display the items chosen for one meal.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== {} ===", plan.meal);
    println!("Calories for {}: {}", plan.meal, plan.target);
    println!();

    if plan.selection.is_empty() {
        println!("  (nothing fits within {} calories)", plan.target);
    } else {
        let width = plan
            .selection
            .items
            .iter()
            .map(|item| item.name.len())
            .max()
            .unwrap_or(10);

        for (i, item) in plan.selection.items.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} - {:>4} cal  [{}]",
                i + 1,
                item.name,
                item.calories,
                item.category,
                width = width
            );
        }
    }

    println!();
    println!(
        "Total Calories: {} ({} under target)",
        plan.selection.achieved,
        plan.gap()
    );
}

/// Display a meal catalog grouped by category.
pub fn display_catalog(meal: Meal, catalog: &Catalog) {
    if catalog.is_empty() {
        println!("{}: (none)", meal);
        return;
    }

    println!();
    println!(
        "=== {} ({} items, {} cal total) ===",
        meal,
        catalog.len(),
        catalog.total_calories()
    );

    for (category, items) in catalog.by_category() {
        println!();
        println!("  {}:", if category.is_empty() { "uncategorized" } else { category });
        for item in items {
            println!("    {} - {} cal", item.name, item.calories);
        }
    }

    println!();
}
