//! Offset cost estimation
//!
//! Converts a total footprint to tons and prices it against the three
//! offset mechanisms.

use serde::{Deserialize, Serialize};

/// Kilograms per ton, used only for offset-cost conversion.
pub const KG_PER_TON: f64 = 1000.0;

/// Offset mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetKind {
    TreePlanting,
    RenewableEnergy,
    DirectAirCapture,
}

impl OffsetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetKind::TreePlanting => "tree-planting",
            OffsetKind::RenewableEnergy => "renewable-energy",
            OffsetKind::DirectAirCapture => "direct-air-capture",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OffsetKind::TreePlanting => "Tree Planting",
            OffsetKind::RenewableEnergy => "Renewable Energy",
            OffsetKind::DirectAirCapture => "Direct Air Capture",
        }
    }
}

/// Configurable offset rates in dollars per ton CO2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRates {
    pub tree_planting: f64,
    pub renewable_energy: f64,
    pub direct_air_capture: f64,
}

impl Default for OffsetRates {
    fn default() -> Self {
        OffsetRates {
            tree_planting: 15.0,
            renewable_energy: 25.0,
            direct_air_capture: 100.0,
        }
    }
}

/// One priced offset option.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OffsetOption {
    pub kind: OffsetKind,
    pub title: &'static str,
    /// Dollars per ton
    pub rate_per_ton: f64,
    /// Dollars to offset the full footprint
    pub cost: f64,
}

/// Full offset estimate for a footprint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OffsetEstimate {
    /// Footprint in tons CO2
    pub tons: f64,
    /// Options in fixed order: tree planting, renewable, direct capture
    pub options: Vec<OffsetOption>,
    /// Balanced cost-and-impact pick
    pub recommended: OffsetKind,
}

/// Price the three offset options with default rates.
pub fn estimate_offsets(total_kg: f64) -> OffsetEstimate {
    estimate_offsets_with_rates(total_kg, &OffsetRates::default())
}

/// Price the three offset options with custom rates.
pub fn estimate_offsets_with_rates(total_kg: f64, rates: &OffsetRates) -> OffsetEstimate {
    let tons = total_kg / KG_PER_TON;

    let options = vec![
        priced(OffsetKind::TreePlanting, rates.tree_planting, tons),
        priced(OffsetKind::RenewableEnergy, rates.renewable_energy, tons),
        priced(OffsetKind::DirectAirCapture, rates.direct_air_capture, tons),
    ];

    OffsetEstimate {
        tons,
        options,
        recommended: OffsetKind::RenewableEnergy,
    }
}

fn priced(kind: OffsetKind, rate_per_ton: f64, tons: f64) -> OffsetOption {
    OffsetOption {
        kind,
        title: kind.title(),
        rate_per_ton,
        cost: tons * rate_per_ton,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ton_conversion() {
        let estimate = estimate_offsets(8500.0);
        assert_eq!(estimate.tons, 8.5);
    }

    #[test]
    fn test_option_pricing() {
        let estimate = estimate_offsets(10000.0);
        assert_eq!(estimate.options.len(), 3);
        assert_eq!(estimate.options[0].kind, OffsetKind::TreePlanting);
        assert_eq!(estimate.options[0].cost, 150.0);
        assert_eq!(estimate.options[1].kind, OffsetKind::RenewableEnergy);
        assert_eq!(estimate.options[1].cost, 250.0);
        assert_eq!(estimate.options[2].kind, OffsetKind::DirectAirCapture);
        assert_eq!(estimate.options[2].cost, 1000.0);
    }

    #[test]
    fn test_zero_footprint_costs_nothing() {
        let estimate = estimate_offsets(0.0);
        assert_eq!(estimate.tons, 0.0);
        assert!(estimate.options.iter().all(|o| o.cost == 0.0));
    }

    #[test]
    fn test_recommended_option() {
        let estimate = estimate_offsets(5000.0);
        assert_eq!(estimate.recommended, OffsetKind::RenewableEnergy);
    }

    #[test]
    fn test_custom_rates() {
        let rates = OffsetRates {
            tree_planting: 20.0,
            ..OffsetRates::default()
        };
        let estimate = estimate_offsets_with_rates(2000.0, &rates);
        assert_eq!(estimate.options[0].cost, 40.0);
    }
}
