use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_basket_rs::catalog::{MealCatalogs, builtin_catalogs, load_catalogs, save_catalogs};
use meal_basket_rs::cli::{Cli, Command, PlanArgs};
use meal_basket_rs::error::Result;
use meal_basket_rs::interface::{
    collect_user_profile, display_catalog, display_day_plan, display_meal_plan, plan_to_json,
    write_plan_csv,
};
use meal_basket_rs::models::{Meal, MealPlan};
use meal_basket_rs::planner::{Anthropometrics, SelectorConfig, plan_day, select_with};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalogs = match &cli.catalog {
        Some(path) => {
            let loaded = load_catalogs(path)?;
            if loaded.is_empty() {
                tracing::warn!(path = %path.display(), "catalog file has no items; every meal will be empty");
            }
            loaded
        }
        None => builtin_catalogs(),
    };
    let config = SelectorConfig {
        max_target: cli.max_target,
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(args, &catalogs, &config),
        Command::Select { meal, target } => cmd_select(meal, target, &catalogs, &config),
        Command::Catalog { meal, export } => cmd_catalog(meal, export.as_deref(), &catalogs),
    }
}

/// Logs go to stderr so `--json` output stays clean. RUST_LOG overrides.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build and display a day plan.
fn cmd_plan(args: PlanArgs, catalogs: &MealCatalogs, config: &SelectorConfig) -> Result<()> {
    let (name, daily_budget) = match (args.budget, args.age, args.weight, args.height, args.sex) {
        (Some(budget), ..) => (args.name.unwrap_or_default(), budget),
        (None, Some(age), Some(weight), Some(height), Some(sex)) => {
            let body =
                Anthropometrics::from_units(args.units, weight, height, args.height_in, age, sex)?;
            (args.name.unwrap_or_default(), body.daily_budget())
        }
        _ => {
            let profile = collect_user_profile()?;
            (profile.name, profile.body.daily_budget())
        }
    };

    let plan = plan_day(daily_budget, catalogs, config)?;

    if args.json {
        println!("{}", plan_to_json(&plan)?);
    } else {
        display_day_plan(&plan, &name);
    }

    if let Some(path) = &args.csv {
        write_plan_csv(&plan, path)?;
        eprintln!("Wrote plan to {}", path.display());
    }

    Ok(())
}

/// Run the selector for one meal and a raw target.
fn cmd_select(
    meal: Meal,
    target: i64,
    catalogs: &MealCatalogs,
    config: &SelectorConfig,
) -> Result<()> {
    let selection = select_with(target, catalogs.get(meal), config)?;

    // select_with has already bounded target to 0..=max_target
    display_meal_plan(&MealPlan {
        meal,
        target: target as u32,
        selection,
    });
    println!();

    Ok(())
}

/// List catalogs and optionally export them.
fn cmd_catalog(meal: Option<Meal>, export: Option<&Path>, catalogs: &MealCatalogs) -> Result<()> {
    match meal {
        Some(meal) => display_catalog(meal, catalogs.get(meal)),
        None => {
            for meal in Meal::ALL {
                display_catalog(meal, catalogs.get(meal));
            }
        }
    }

    if let Some(path) = export {
        save_catalogs(path, catalogs)?;
        println!("Catalogs saved to {}", path.display());
    }

    Ok(())
}
