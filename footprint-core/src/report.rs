//! Assessment report and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs
//! - Rounding happens only here, at display time

use crate::achievements::AchievementSet;
use crate::aggregate::CategoryShares;
use crate::compare::{CategoryBenchmark, CountryComparison};
use crate::estimate::{Category, EmissionBreakdown};
use crate::level::EmissionLevel;
use crate::offset::OffsetEstimate;
use crate::tips::ActionPlan;
use serde::Serialize;

/// Emission level in report format
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LevelReport {
    pub level: EmissionLevel,
    pub description: &'static str,
}

/// Complete assessment for one input snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AssessmentReport {
    pub breakdown: EmissionBreakdown,
    /// Exact, unrounded sum of the breakdown fields (kg CO2/year)
    pub total: f64,
    /// Footprint relative to the global average, percent in [0, 100]
    pub percent_of_global_average: f64,
    /// Per-category shares of the total; absent when the total is not positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<CategoryShares>,
    pub level: LevelReport,
    pub highest_category: Category,
    pub achievements: AchievementSet,
    pub offsets: OffsetEstimate,
    pub countries: Vec<CountryComparison>,
    pub benchmarks: Vec<CategoryBenchmark>,
    pub action_plan: ActionPlan,
}

/// Render a report as human-readable text
pub fn render_text(report: &AssessmentReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total: {:.1} kg CO2/year ({})\n",
        report.total,
        report.level.description
    ));
    output.push_str(&format!(
        "vs. global average: {:.0}%\n",
        report.percent_of_global_average
    ));
    output.push('\n');

    // Breakdown table
    output.push_str(&format!(
        "{:<12} {:>12} {:>8}\n",
        "CATEGORY", "KG CO2/YR", "SHARE"
    ));
    for category in Category::ALL {
        let value = report.breakdown.get(category);
        let share = match &report.shares {
            Some(shares) => format!(
                "{:.0}%",
                match category {
                    Category::Transport => shares.transport,
                    Category::Energy => shares.energy,
                    Category::Food => shares.food,
                    Category::Lifestyle => shares.lifestyle,
                }
            ),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<12} {:>12.1} {:>8}\n",
            category.as_str(),
            value,
            share
        ));
    }
    output.push('\n');

    // Achievements
    output.push_str(&format!(
        "Achievements ({}/{})\n",
        report.achievements.achieved_count,
        report.achievements.achievements.len()
    ));
    for achievement in &report.achievements.achievements {
        let mark = if achievement.achieved { "x" } else { " " };
        output.push_str(&format!(
            "  [{}] {:<18} under {:.0} kg\n",
            mark, achievement.title, achievement.threshold
        ));
    }
    output.push('\n');

    // Offsets
    output.push_str(&format!(
        "Offset {:.1} tons CO2:\n",
        report.offsets.tons
    ));
    for option in &report.offsets.options {
        let marker = if option.kind == report.offsets.recommended {
            " (recommended)"
        } else {
            ""
        };
        output.push_str(&format!(
            "  {:<18} ${:>8.0}  (${:.0}/ton){}\n",
            option.title, option.cost, option.rate_per_ton, marker
        ));
    }
    output.push('\n');

    // Country comparison
    output.push_str("Country comparison:\n");
    for row in &report.countries {
        let flag = if row.below { "below" } else { "above" };
        output.push_str(&format!(
            "  {:<16} {:>8.0} kg  {}\n",
            row.country, row.annual_kg, flag
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Focus area: {}\n",
        report.action_plan.priority.as_str()
    ));

    output
}

/// Render a report as JSON output
pub fn render_json(report: &AssessmentReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawInputs;

    fn sample_report() -> AssessmentReport {
        let inputs = RawInputs {
            car_miles: "12000".to_string(),
            flight_hours: "10".to_string(),
            electricity_kwh: "900".to_string(),
            gas_therms: "50".to_string(),
            ..RawInputs::default()
        };
        crate::assess(&inputs)
    }

    #[test]
    fn test_text_has_breakdown_rows() {
        let text = render_text(&sample_report());
        assert!(text.contains("transport"));
        assert!(text.contains("energy"));
        assert!(text.contains("food"));
        assert!(text.contains("lifestyle"));
        assert!(text.contains("5700.0"));
    }

    #[test]
    fn test_text_marks_recommended_offset() {
        let text = render_text(&sample_report());
        assert!(text.contains("(recommended)"));
    }

    #[test]
    fn test_zero_total_renders_dash_shares() {
        let report = crate::assess(&RawInputs::default());
        let text = render_text(&report);
        assert!(report.shares.is_none());
        assert!(text.contains('-'));
    }

    #[test]
    fn test_json_is_deterministic() {
        let json1 = render_json(&sample_report());
        let json2 = render_json(&sample_report());
        assert_eq!(json1, json2);
    }

    #[test]
    fn test_json_omits_absent_shares() {
        let report = crate::assess(&RawInputs::default());
        let json = render_json(&report);
        assert!(!json.contains("\"shares\""));
    }
}
