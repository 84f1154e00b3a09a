pub mod export;
pub mod prompts;
pub mod render;

pub use export::{plan_to_json, write_plan_csv};
pub use prompts::{
    UserProfile, collect_user_profile, prompt_age, prompt_name, prompt_number, prompt_sex,
    prompt_units,
};
pub use render::{display_catalog, display_day_plan, display_meal_plan, greeting};
