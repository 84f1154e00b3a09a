use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};
use crate::planner::{Anthropometrics, Sex, UnitSystem};

/// Who the plan is for.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub body: Anthropometrics,
}

/// Prompt for the user's name.
pub fn prompt_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Enter your name")
        .allow_empty(true)
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Prompt for a non-negative number.
pub fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "Expected a non-negative number, got {}",
            input
        )));
    }

    Ok(value)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Enter your age")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid age: {}", input)))
}

/// Prompt for the preferred unit system.
pub fn prompt_units() -> Result<UnitSystem> {
    let options = ["Metric (kg, cm)", "Imperial (lb, ft + in)"];
    let selection = Select::new()
        .with_prompt("Preferred units")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => UnitSystem::Imperial,
        _ => UnitSystem::Metric,
    })
}

/// Prompt for biological sex.
pub fn prompt_sex() -> Result<Sex> {
    let options = ["Male", "Female"];
    let selection = Select::new()
        .with_prompt("Choose your gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => Sex::Female,
        _ => Sex::Male,
    })
}

/// Collect everything needed to compute a daily calorie budget.
pub fn collect_user_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let units = prompt_units()?;

    let (weight, height, height_extra_in) = match units {
        UnitSystem::Metric => {
            let weight = prompt_number("Enter your weight (kg)", "70")?;
            let height = prompt_number("Enter your height (cm)", "170")?;
            (weight, height, 0.0)
        }
        UnitSystem::Imperial => {
            let weight = prompt_number("Enter your weight (lb)", "155")?;
            let feet = prompt_number("Enter your height (ft)", "5")?;
            let inches = prompt_number("Enter your height (in)", "7")?;
            (weight, feet, inches)
        }
    };

    let sex = prompt_sex()?;
    let body = Anthropometrics::from_units(units, weight, height, height_extra_in, age, sex)?;

    Ok(UserProfile { name, body })
}
