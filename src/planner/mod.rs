pub mod bmr;
pub mod constants;
pub mod day;
pub mod knapsack;
pub mod targets;

pub use bmr::{Anthropometrics, Sex, UnitSystem};
pub use constants::*;
pub use day::{plan_day, plan_meal};
pub use knapsack::{SelectorConfig, select, select_with};
pub use targets::MealTargets;
