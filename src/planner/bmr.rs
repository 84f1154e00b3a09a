use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Biological sex selector used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    fn offset(&self) -> f64 {
        match self {
            Sex::Male => BMR_MALE_OFFSET,
            Sex::Female => BMR_FEMALE_OFFSET,
        }
    }
}

/// Measurement system the user enters weight and height in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds, feet and inches.
    Imperial,
}

/// User attributes in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anthropometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
}

impl Anthropometrics {
    pub fn metric(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Result<Self> {
        check_measure("weight", weight_kg)?;
        check_measure("height", height_cm)?;

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        })
    }

    /// Build from pounds and feet + inches.
    pub fn imperial(
        weight_lb: f64,
        height_ft: f64,
        height_in: f64,
        age_years: u32,
        sex: Sex,
    ) -> Result<Self> {
        check_measure("weight", weight_lb)?;
        check_measure("height (ft)", height_ft)?;
        check_measure("height (in)", height_in)?;

        let weight_kg = weight_lb * UNITS_LB_TO_KG;
        let height_cm = (height_ft * INCHES_PER_FOOT + height_in) * UNITS_IN_TO_CM;
        Self::metric(weight_kg, height_cm, age_years, sex)
    }

    /// Build from raw measurements in the given unit system.
    ///
    /// For imperial input `height` is feet and `height_extra_in` adds inches;
    /// for metric input `height` is centimeters and `height_extra_in` is ignored.
    pub fn from_units(
        units: UnitSystem,
        weight: f64,
        height: f64,
        height_extra_in: f64,
        age_years: u32,
        sex: Sex,
    ) -> Result<Self> {
        match units {
            UnitSystem::Metric => Self::metric(weight, height, age_years, sex),
            UnitSystem::Imperial => {
                Self::imperial(weight, height, height_extra_in, age_years, sex)
            }
        }
    }

    /// Basal metabolic rate in kcal/day. May be negative for implausible input.
    pub fn bmr(&self) -> f64 {
        BMR_WEIGHT_COEF * self.weight_kg + BMR_HEIGHT_COEF * self.height_cm
            - BMR_AGE_COEF * self.age_years as f64
            + self.sex.offset()
    }

    /// Daily calorie budget: the BMR, floored at zero.
    pub fn daily_budget(&self) -> f64 {
        self.bmr().max(0.0)
    }
}

fn check_measure(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            what, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_bmr() {
        let a = Anthropometrics::metric(70.0, 175.0, 30, Sex::Male).unwrap();
        // 699.3 + 1093.75 - 147.6 + 5
        assert!((a.bmr() - 1650.45).abs() < 1e-9);
    }

    #[test]
    fn test_female_offset() {
        let m = Anthropometrics::metric(60.0, 165.0, 40, Sex::Male).unwrap();
        let f = Anthropometrics::metric(60.0, 165.0, 40, Sex::Female).unwrap();
        assert!((m.bmr() - f.bmr() - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_floors_at_zero() {
        let a = Anthropometrics::metric(0.0, 0.0, 90, Sex::Female).unwrap();
        assert!(a.bmr() < 0.0);
        assert_eq!(a.daily_budget(), 0.0);
    }

    #[test]
    fn test_imperial_matches_metric() {
        // 70 kg, 175 cm expressed as lb and 5 ft + remaining inches
        let weight_lb = 70.0 * UNITS_KG_TO_LB;
        let extra_in = 175.0 * UNITS_CM_TO_IN - 60.0;
        let imperial = Anthropometrics::imperial(weight_lb, 5.0, extra_in, 30, Sex::Male).unwrap();
        let metric = Anthropometrics::metric(70.0, 175.0, 30, Sex::Male).unwrap();
        assert!((imperial.weight_kg - metric.weight_kg).abs() < 1e-9);
        assert!((imperial.height_cm - metric.height_cm).abs() < 1e-9);
        assert!((imperial.bmr() - metric.bmr()).abs() < 1e-6);
    }

    #[test]
    fn test_from_units_metric_ignores_inches() {
        let a = Anthropometrics::from_units(UnitSystem::Metric, 70.0, 175.0, 99.0, 30, Sex::Male)
            .unwrap();
        assert_eq!(a.height_cm, 175.0);
    }

    #[test]
    fn test_invalid_measure_rejected() {
        assert!(Anthropometrics::metric(-1.0, 170.0, 30, Sex::Male).is_err());
        assert!(Anthropometrics::metric(70.0, f64::NAN, 30, Sex::Male).is_err());
        assert!(Anthropometrics::imperial(150.0, 5.0, -2.0, 30, Sex::Male).is_err());
    }
}
