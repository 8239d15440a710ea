//! Footprint CLI - estimate annual CO2 emissions from lifestyle inputs

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use footprint_core::config;
use footprint_core::tips::tips_for;
use footprint_core::{assess_with_config, render_json, render_text, Category, RawInputs};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "footprint")]
#[command(about = "Annual CO2 emission estimator with breakdowns, badges, and offset costs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an assessment from lifestyle inputs
    Assess {
        /// Car miles per year
        #[arg(long, value_name = "VALUE")]
        car_miles: Option<String>,

        /// Flight hours per year
        #[arg(long, value_name = "VALUE")]
        flight_hours: Option<String>,

        /// Electricity in kWh per month
        #[arg(long, value_name = "VALUE")]
        electricity_kwh: Option<String>,

        /// Natural gas in therms per month
        #[arg(long, value_name = "VALUE")]
        gas_therms: Option<String>,

        /// Meat meals per week
        #[arg(long, value_name = "VALUE")]
        meat_meals: Option<String>,

        /// Dairy servings per day
        #[arg(long, value_name = "VALUE")]
        dairy_servings: Option<String>,

        /// Shopping dollars per month
        #[arg(long, value_name = "VALUE")]
        shopping_dollars: Option<String>,

        /// Household waste in kg per week
        #[arg(long, value_name = "VALUE")]
        waste_kg: Option<String>,

        /// Read inputs from a JSON file instead of flags
        #[arg(long, conflicts_with_all = [
            "car_miles", "flight_hours", "electricity_kwh", "gas_therms",
            "meat_meals", "dairy_servings", "shopping_dollars", "waste_kg",
        ])]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the reduction-tip catalog
    Tips {
        /// Only print one category
        #[arg(long)]
        category: Option<CategoryArg>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an assessment
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CategoryArg {
    Transport,
    Energy,
    Food,
    Lifestyle,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Transport => Category::Transport,
            CategoryArg::Energy => Category::Energy,
            CategoryArg::Food => Category::Food,
            CategoryArg::Lifestyle => Category::Lifestyle,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            car_miles,
            flight_hours,
            electricity_kwh,
            gas_therms,
            meat_meals,
            dairy_servings,
            shopping_dollars,
            waste_kg,
            input,
            format,
            config: config_path,
        } => {
            // Assemble the input snapshot: file, or flags with absent = empty
            let raw = if let Some(input_path) = input {
                load_inputs(&input_path)?
            } else {
                RawInputs {
                    car_miles: car_miles.unwrap_or_default(),
                    flight_hours: flight_hours.unwrap_or_default(),
                    electricity_kwh: electricity_kwh.unwrap_or_default(),
                    gas_therms: gas_therms.unwrap_or_default(),
                    meat_meals: meat_meals.unwrap_or_default(),
                    dairy_servings: dairy_servings.unwrap_or_default(),
                    shopping_dollars: shopping_dollars.unwrap_or_default(),
                    waste_kg: waste_kg.unwrap_or_default(),
                }
            };

            // Load configuration
            let cwd = std::env::current_dir()?;
            let resolved = config::load_and_resolve(&cwd, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(path) = &resolved.config_path {
                eprintln!("Using config: {}", path.display());
            }

            let report = assess_with_config(&raw, &resolved);

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&report));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&report));
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref())
                    .context("failed to load configuration")?;

                println!("Configuration:");
                if let Some(ref p) = resolved.config_path {
                    println!("  Source: {}", p.display());
                } else {
                    println!("  Source: defaults (no config file found)");
                }
                println!();
                println!("Factors (kg CO2 per unit):");
                println!("  car_per_mile: {}", resolved.factors.car_per_mile);
                println!("  flight_per_hour: {}", resolved.factors.flight_per_hour);
                println!(
                    "  electricity_per_kwh: {}",
                    resolved.factors.electricity_per_kwh
                );
                println!("  gas_per_therm: {}", resolved.factors.gas_per_therm);
                println!("  meat_per_meal: {}", resolved.factors.meat_per_meal);
                println!("  dairy_per_serving: {}", resolved.factors.dairy_per_serving);
                println!(
                    "  shopping_per_dollar: {}",
                    resolved.factors.shopping_per_dollar
                );
                println!("  waste_per_kg: {}", resolved.factors.waste_per_kg);
                println!();
                println!("Level thresholds (kg CO2/year):");
                println!("  excellent: {}", resolved.level_thresholds.excellent);
                println!("  good: {}", resolved.level_thresholds.good);
                println!("  average: {}", resolved.level_thresholds.average);
                println!();
                println!("Achievement thresholds (kg CO2/year):");
                println!(
                    "  transport: {}",
                    resolved.achievement_thresholds.transport
                );
                println!("  energy: {}", resolved.achievement_thresholds.energy);
                println!("  food: {}", resolved.achievement_thresholds.food);
                println!("  total: {}", resolved.achievement_thresholds.total);
                println!();
                println!("Offset rates ($/ton):");
                println!("  tree_planting: {}", resolved.offset_rates.tree_planting);
                println!(
                    "  renewable_energy: {}",
                    resolved.offset_rates.renewable_energy
                );
                println!(
                    "  direct_air_capture: {}",
                    resolved.offset_rates.direct_air_capture
                );
            }
        },
        Commands::Tips { category } => {
            let categories: Vec<Category> = match category {
                Some(arg) => vec![arg.into()],
                None => Category::ALL.to_vec(),
            };

            for category in categories {
                println!("{}:", category.as_str());
                for tip in tips_for(category) {
                    println!(
                        "  {:<42} {:<10} saves ~{:.0} kg CO2/year",
                        tip.action,
                        tip.impact.as_str(),
                        tip.savings_kg
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Load a raw input snapshot from a JSON file
fn load_inputs(path: &Path) -> anyhow::Result<RawInputs> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;
    let inputs: RawInputs = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse input file: {}", path.display()))?;
    Ok(inputs)
}
