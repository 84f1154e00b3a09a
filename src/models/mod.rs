pub mod catalog;
pub mod food;
pub mod meal;
pub mod plan;

pub use catalog::Catalog;
pub use food::{CatalogRecord, FoodItem};
pub use meal::Meal;
pub use plan::{DayPlan, MealPlan, Selection};
