mod builtin;
mod persistence;
mod store;

pub use builtin::{BREAKFAST_ITEMS, DINNER_ITEMS, LUNCH_ITEMS, builtin_catalogs, catalog_from_table};
pub use persistence::{load_catalogs, save_catalogs};
pub use store::MealCatalogs;
