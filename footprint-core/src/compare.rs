//! Reference comparisons
//!
//! Fixed country averages and per-category global benchmarks, with the
//! user's footprint evaluated against each entry independently.

use crate::estimate::{Category, EmissionBreakdown};
use serde::Serialize;

/// Reference table of average annual footprints, kg CO2 per person.
const COUNTRY_AVERAGES: &[(&str, f64)] = &[
    ("Qatar", 37000.0),
    ("United States", 16000.0),
    ("Germany", 9000.0),
    ("China", 7000.0),
    ("Global Average", 4800.0),
    ("India", 1900.0),
];

/// Per-category global benchmarks, kg CO2 per person per year.
const CATEGORY_BENCHMARKS: &[(Category, f64)] = &[
    (Category::Transport, 4000.0),
    (Category::Energy, 5000.0),
    (Category::Food, 3500.0),
    (Category::Lifestyle, 3500.0),
];

/// One country comparison row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CountryComparison {
    pub country: &'static str,
    pub annual_kg: f64,
    /// Whether the assessed footprint is at or below this reference
    pub below: bool,
}

/// One category benchmark row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CategoryBenchmark {
    pub category: Category,
    pub benchmark_kg: f64,
    pub value_kg: f64,
}

/// Compare a total footprint against every country reference.
///
/// Each entry is evaluated independently with `total <= reference`, so a
/// footprint exactly at a reference counts as below it.
pub fn compare_countries(total: f64) -> Vec<CountryComparison> {
    COUNTRY_AVERAGES
        .iter()
        .map(|&(country, annual_kg)| CountryComparison {
            country,
            annual_kg,
            below: total <= annual_kg,
        })
        .collect()
}

/// Pair each category with its global benchmark and the assessed value.
pub fn category_benchmarks(breakdown: &EmissionBreakdown) -> Vec<CategoryBenchmark> {
    CATEGORY_BENCHMARKS
        .iter()
        .map(|&(category, benchmark_kg)| CategoryBenchmark {
            category,
            benchmark_kg,
            value_kg: breakdown.get(category),
        })
        .collect()
}
