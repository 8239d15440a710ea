//! Footprint core library - annual CO2 emission estimation and classification

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Assessment is a pure function of the input snapshot
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Malformed numeric input silently normalizes to zero, never errors
// - Identical input yields byte-for-byte identical output

pub mod achievements;
pub mod aggregate;
pub mod compare;
pub mod config;
pub mod estimate;
pub mod input;
pub mod level;
pub mod offset;
pub mod report;
pub mod tips;

pub use config::ResolvedConfig;
pub use estimate::{Category, EmissionBreakdown};
pub use input::RawInputs;
pub use report::{render_json, render_text, AssessmentReport};

/// Assess an input snapshot with default configuration.
pub fn assess(inputs: &RawInputs) -> AssessmentReport {
    assess_with_config(inputs, &ResolvedConfig::defaults())
}

/// Assess an input snapshot with resolved configuration.
///
/// This is the single entry point consumers need: normalize the raw
/// strings, run the category calculators, aggregate, classify. One shot,
/// idempotent, side-effect-free.
pub fn assess_with_config(inputs: &RawInputs, config: &ResolvedConfig) -> AssessmentReport {
    let normalized = inputs.normalized();
    let breakdown = estimate::estimate_breakdown_with_factors(&normalized, &config.factors);
    let total = breakdown.total();

    let level = level::assign_level_with_thresholds(total, &config.level_thresholds);

    AssessmentReport {
        breakdown,
        total,
        percent_of_global_average: aggregate::percent_of_global_average(total),
        shares: aggregate::category_shares(&breakdown),
        level: report::LevelReport {
            level,
            description: level.description(),
        },
        highest_category: breakdown.highest_category(),
        achievements: achievements::evaluate_achievements_with_thresholds(
            &breakdown,
            &config.achievement_thresholds,
        ),
        offsets: offset::estimate_offsets_with_rates(total, &config.offset_rates),
        countries: compare::compare_countries(total),
        benchmarks: compare::category_benchmarks(&breakdown),
        action_plan: tips::action_plan(&breakdown),
    }
}
