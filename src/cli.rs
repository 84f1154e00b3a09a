use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::Meal;
use crate::planner::{DEFAULT_MAX_TARGET, MAX_TARGET_CEILING, Sex, UnitSystem};

/// Meal Basket — fills breakfast, lunch and dinner up to a calorie budget.
#[derive(Parser, Debug)]
#[command(name = "meal-basket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON catalog file. Uses the built-in catalogs when omitted.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Largest per-meal calorie target accepted.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_TARGET,
        value_parser = clap::value_parser!(u32).range(..=MAX_TARGET_CEILING as i64)
    )]
    pub max_target: u32,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a day plan from your body measurements.
    Plan(PlanArgs),

    /// Fill a single meal up to a raw calorie target.
    Select {
        /// Meal whose catalog to select from.
        #[arg(value_enum)]
        meal: Meal,

        /// Calorie target for the meal.
        #[arg(allow_negative_numbers = true)]
        target: i64,
    },

    /// List the catalog for one meal, or all meals.
    Catalog {
        /// Meal to list.
        #[arg(value_enum)]
        meal: Option<Meal>,

        /// Write the active catalogs to this JSON file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Measurements for `plan`. Any missing measurement switches to prompts.
#[derive(Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// Name used in the greeting.
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Unit system for weight and height.
    #[arg(long, value_enum, default_value_t = UnitSystem::Metric)]
    pub units: UnitSystem,

    /// Weight in kg (metric) or lb (imperial).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm (metric) or ft (imperial).
    #[arg(long)]
    pub height: Option<f64>,

    /// Extra inches on top of --height (imperial only).
    #[arg(long, default_value_t = 0.0)]
    pub height_in: f64,

    /// Biological sex for the BMR formula.
    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    /// Skip BMR and plan for this daily calorie budget.
    #[arg(long, conflicts_with_all = ["age", "weight", "height", "sex"])]
    pub budget: Option<f64>,

    /// Print the plan as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Also write the plan to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
