//! Configuration file support
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.footprintrc.json` in the working directory
//! 3. `footprint.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::achievements::AchievementThresholds;
use crate::estimate::EmissionFactors;
use crate::level::LevelThresholds;
use crate::offset::OffsetRates;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Footprint configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FootprintConfig {
    /// Custom emission factors for the category calculators
    #[serde(default)]
    pub factors: Option<FactorConfig>,

    /// Custom emission-level band thresholds
    #[serde(default)]
    pub level_thresholds: Option<LevelThresholdConfig>,

    /// Custom achievement badge thresholds
    #[serde(default)]
    pub achievement_thresholds: Option<AchievementThresholdConfig>,

    /// Custom offset rates in dollars per ton
    #[serde(default)]
    pub offset_rates: Option<OffsetRateConfig>,
}

/// Custom emission factors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorConfig {
    /// kg CO2 per car mile (default: 0.4)
    pub car_per_mile: Option<f64>,
    /// kg CO2 per flight hour (default: 90)
    pub flight_per_hour: Option<f64>,
    /// kg CO2 per kWh (default: 0.5)
    pub electricity_per_kwh: Option<f64>,
    /// kg CO2 per therm (default: 2.2)
    pub gas_per_therm: Option<f64>,
    /// kg CO2 per meat meal (default: 6.6)
    pub meat_per_meal: Option<f64>,
    /// kg CO2 per dairy serving (default: 3.2)
    pub dairy_per_serving: Option<f64>,
    /// kg CO2 per shopping dollar (default: 0.5)
    pub shopping_per_dollar: Option<f64>,
    /// kg CO2 per kg waste (default: 0.8)
    pub waste_per_kg: Option<f64>,
}

/// Custom emission-level thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelThresholdConfig {
    /// Upper bound for excellent (default: 6000)
    pub excellent: Option<f64>,
    /// Upper bound for good (default: 12000)
    pub good: Option<f64>,
    /// Upper bound for average (default: 18000)
    pub average: Option<f64>,
}

/// Custom achievement thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementThresholdConfig {
    /// Eco Commuter transport bound (default: 2000)
    pub transport: Option<f64>,
    /// Energy Saver energy bound (default: 3000)
    pub energy: Option<f64>,
    /// Plant Hero food bound (default: 2500)
    pub food: Option<f64>,
    /// Climate Champion total bound (default: 8000)
    pub total: Option<f64>,
}

/// Custom offset rates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetRateConfig {
    /// Dollars per ton for tree planting (default: 15)
    pub tree_planting: Option<f64>,
    /// Dollars per ton for renewable energy (default: 25)
    pub renewable_energy: Option<f64>,
    /// Dollars per ton for direct air capture (default: 100)
    pub direct_air_capture: Option<f64>,
}

/// Resolved configuration with defaults filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    pub factors: EmissionFactors,
    pub level_thresholds: LevelThresholds,
    pub achievement_thresholds: AchievementThresholds,
    pub offset_rates: OffsetRates,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl FootprintConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        // Validate factors are non-negative
        if let Some(ref f) = self.factors {
            for (name, val) in [
                ("car_per_mile", f.car_per_mile),
                ("flight_per_hour", f.flight_per_hour),
                ("electricity_per_kwh", f.electricity_per_kwh),
                ("gas_per_therm", f.gas_per_therm),
                ("meat_per_meal", f.meat_per_meal),
                ("dairy_per_serving", f.dairy_per_serving),
                ("shopping_per_dollar", f.shopping_per_dollar),
                ("waste_per_kg", f.waste_per_kg),
            ] {
                if let Some(v) = val {
                    if v < 0.0 {
                        anyhow::bail!("factors.{} must be non-negative (got {})", name, v);
                    }
                }
            }
        }

        // Validate level thresholds are positive and ordered
        if let Some(ref t) = self.level_thresholds {
            let excellent = t.excellent.unwrap_or(6000.0);
            let good = t.good.unwrap_or(12000.0);
            let average = t.average.unwrap_or(18000.0);

            if excellent <= 0.0 {
                anyhow::bail!(
                    "level_thresholds.excellent must be positive (got {})",
                    excellent
                );
            }
            if excellent >= good {
                anyhow::bail!(
                    "level_thresholds.excellent ({}) must be less than level_thresholds.good ({})",
                    excellent,
                    good
                );
            }
            if good >= average {
                anyhow::bail!(
                    "level_thresholds.good ({}) must be less than level_thresholds.average ({})",
                    good,
                    average
                );
            }
        }

        // Validate achievement thresholds are positive
        if let Some(ref a) = self.achievement_thresholds {
            for (name, val) in [
                ("transport", a.transport),
                ("energy", a.energy),
                ("food", a.food),
                ("total", a.total),
            ] {
                if let Some(v) = val {
                    if v <= 0.0 {
                        anyhow::bail!(
                            "achievement_thresholds.{} must be positive (got {})",
                            name,
                            v
                        );
                    }
                }
            }
        }

        // Validate offset rates are non-negative
        if let Some(ref r) = self.offset_rates {
            for (name, val) in [
                ("tree_planting", r.tree_planting),
                ("renewable_energy", r.renewable_energy),
                ("direct_air_capture", r.direct_air_capture),
            ] {
                if let Some(v) = val {
                    if v < 0.0 {
                        anyhow::bail!("offset_rates.{} must be non-negative (got {})", name, v);
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolve config into a flat form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let defaults = EmissionFactors::default();
        let factors = match &self.factors {
            Some(f) => EmissionFactors {
                car_per_mile: f.car_per_mile.unwrap_or(defaults.car_per_mile),
                flight_per_hour: f.flight_per_hour.unwrap_or(defaults.flight_per_hour),
                electricity_per_kwh: f.electricity_per_kwh.unwrap_or(defaults.electricity_per_kwh),
                gas_per_therm: f.gas_per_therm.unwrap_or(defaults.gas_per_therm),
                meat_per_meal: f.meat_per_meal.unwrap_or(defaults.meat_per_meal),
                dairy_per_serving: f.dairy_per_serving.unwrap_or(defaults.dairy_per_serving),
                shopping_per_dollar: f.shopping_per_dollar.unwrap_or(defaults.shopping_per_dollar),
                waste_per_kg: f.waste_per_kg.unwrap_or(defaults.waste_per_kg),
            },
            None => defaults,
        };

        let level_thresholds = match &self.level_thresholds {
            Some(t) => LevelThresholds {
                excellent: t.excellent.unwrap_or(6000.0),
                good: t.good.unwrap_or(12000.0),
                average: t.average.unwrap_or(18000.0),
            },
            None => LevelThresholds::default(),
        };

        let achievement_thresholds = match &self.achievement_thresholds {
            Some(a) => AchievementThresholds {
                transport: a.transport.unwrap_or(2000.0),
                energy: a.energy.unwrap_or(3000.0),
                food: a.food.unwrap_or(2500.0),
                total: a.total.unwrap_or(8000.0),
            },
            None => AchievementThresholds::default(),
        };

        let offset_rates = match &self.offset_rates {
            Some(r) => OffsetRates {
                tree_planting: r.tree_planting.unwrap_or(15.0),
                renewable_energy: r.renewable_energy.unwrap_or(25.0),
                direct_air_capture: r.direct_air_capture.unwrap_or(100.0),
            },
            None => OffsetRates::default(),
        };

        Ok(ResolvedConfig {
            factors,
            level_thresholds,
            achievement_thresholds,
            offset_rates,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Self {
        ResolvedConfig::default()
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.footprintrc.json`
/// 2. `footprint.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(FootprintConfig, PathBuf)>> {
    // 1. .footprintrc.json
    let rc_path = dir.join(".footprintrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    // 2. footprint.config.json
    let config_path = dir.join("footprint.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<FootprintConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: FootprintConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a working directory
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the directory.
/// Returns default config if nothing is found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (FootprintConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
