//! Derived aggregates over a breakdown
//!
//! Global invariants enforced:
//! - Aggregates are strictly derived (never stored, always computed)
//! - No division by zero: shares exist only for positive totals

use crate::estimate::EmissionBreakdown;
use serde::{Deserialize, Serialize};

/// Global average annual footprint, kg CO2 per person.
pub const GLOBAL_AVERAGE_KG: f64 = 16000.0;

/// Per-category share of the total, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CategoryShares {
    pub transport: f64,
    pub energy: f64,
    pub food: f64,
    pub lifestyle: f64,
}

/// Footprint relative to the global average, as a percentage clamped to
/// [0, 100]. The cap at 100 matches the progress-bar semantics this value
/// feeds; the floor guards against negative totals from negative inputs.
pub fn percent_of_global_average(total: f64) -> f64 {
    (total / GLOBAL_AVERAGE_KG * 100.0).clamp(0.0, 100.0)
}

/// Per-category percentage shares of the total.
///
/// Returns None when the total is not positive; callers must suppress the
/// share display rather than divide by zero.
pub fn category_shares(breakdown: &EmissionBreakdown) -> Option<CategoryShares> {
    let total = breakdown.total();
    if total <= 0.0 {
        return None;
    }
    Some(CategoryShares {
        transport: breakdown.transport / total * 100.0,
        energy: breakdown.energy / total * 100.0,
        food: breakdown.food / total * 100.0,
        lifestyle: breakdown.lifestyle / total * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_global_average() {
        assert_eq!(percent_of_global_average(0.0), 0.0);
        assert_eq!(percent_of_global_average(8000.0), 50.0);
        assert_eq!(percent_of_global_average(16000.0), 100.0);
    }

    #[test]
    fn test_percent_caps_at_100() {
        // 20000 / 16000 * 100 = 125, capped
        assert_eq!(percent_of_global_average(20000.0), 100.0);
    }

    #[test]
    fn test_percent_floors_at_0() {
        assert_eq!(percent_of_global_average(-500.0), 0.0);
    }

    #[test]
    fn test_percent_is_monotone() {
        let totals = [0.0, 100.0, 4800.0, 16000.0, 16001.0, 40000.0];
        let percents: Vec<f64> = totals.iter().map(|t| percent_of_global_average(*t)).collect();
        for pair in percents.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_category_shares() {
        let breakdown = EmissionBreakdown {
            transport: 500.0,
            energy: 300.0,
            food: 150.0,
            lifestyle: 50.0,
        };
        let shares = category_shares(&breakdown).unwrap();
        assert_eq!(shares.transport, 50.0);
        assert_eq!(shares.energy, 30.0);
        assert_eq!(shares.food, 15.0);
        assert_eq!(shares.lifestyle, 5.0);
    }

    #[test]
    fn test_shares_undefined_for_zero_total() {
        let breakdown = EmissionBreakdown {
            transport: 0.0,
            energy: 0.0,
            food: 0.0,
            lifestyle: 0.0,
        };
        assert!(category_shares(&breakdown).is_none());
    }
}
