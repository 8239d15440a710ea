//! Category emission calculators
//!
//! Global invariants enforced:
//! - Deterministic estimation (same inputs, same breakdown)
//! - The breakdown is recomputed in full, never partially updated

use crate::input::NormalizedInputs;
use serde::{Deserialize, Serialize};

/// Emission category, in the canonical ordering used everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Food,
    Lifestyle,
}

impl Category {
    /// All categories in canonical order (also the argmax tie-break order)
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Energy,
        Category::Food,
        Category::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Lifestyle => "lifestyle",
        }
    }
}

/// Configurable emission factors for the category calculators.
///
/// The defaults are the canonical factor table. Note that the monthly
/// (electricity, gas, shopping), weekly (meat, waste), and daily (dairy)
/// inputs are weighted literally, with no period conversion to years. That
/// mirrors the model this estimator reproduces and is preserved for output
/// parity; it is a known modeling inconsistency, not a bug to fix here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactors {
    /// kg CO2 per car mile
    pub car_per_mile: f64,
    /// kg CO2 per flight hour
    pub flight_per_hour: f64,
    /// kg CO2 per kWh of electricity
    pub electricity_per_kwh: f64,
    /// kg CO2 per therm of natural gas
    pub gas_per_therm: f64,
    /// kg CO2 per meat meal
    pub meat_per_meal: f64,
    /// kg CO2 per dairy serving
    pub dairy_per_serving: f64,
    /// kg CO2 per dollar spent shopping
    pub shopping_per_dollar: f64,
    /// kg CO2 per kg of household waste
    pub waste_per_kg: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors {
            car_per_mile: 0.4,
            flight_per_hour: 90.0,
            electricity_per_kwh: 0.5,
            gas_per_therm: 2.2,
            meat_per_meal: 6.6,
            dairy_per_serving: 3.2,
            shopping_per_dollar: 0.5,
            waste_per_kg: 0.8,
        }
    }
}

/// Per-category annual CO2 emissions in kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct EmissionBreakdown {
    pub transport: f64,
    pub energy: f64,
    pub food: f64,
    pub lifestyle: f64,
}

impl EmissionBreakdown {
    /// Total annual emissions: the exact, unrounded sum of the four fields.
    pub fn total(&self) -> f64 {
        self.transport + self.energy + self.food + self.lifestyle
    }

    /// Value of one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Energy => self.energy,
            Category::Food => self.food,
            Category::Lifestyle => self.lifestyle,
        }
    }

    /// The category with the largest emissions.
    ///
    /// Ties keep the earlier category in canonical order (strictly-greater
    /// comparison), so an all-zero breakdown yields Transport.
    pub fn highest_category(&self) -> Category {
        let mut highest = Category::Transport;
        for category in Category::ALL {
            if self.get(category) > self.get(highest) {
                highest = category;
            }
        }
        highest
    }
}

/// Compute transport emissions (kg CO2/year)
pub fn estimate_transport(inputs: &NormalizedInputs, factors: &EmissionFactors) -> f64 {
    inputs.car_miles * factors.car_per_mile + inputs.flight_hours * factors.flight_per_hour
}

/// Compute home energy emissions (kg CO2/year)
pub fn estimate_energy(inputs: &NormalizedInputs, factors: &EmissionFactors) -> f64 {
    inputs.electricity_kwh * factors.electricity_per_kwh + inputs.gas_therms * factors.gas_per_therm
}

/// Compute diet emissions (kg CO2/year)
pub fn estimate_food(inputs: &NormalizedInputs, factors: &EmissionFactors) -> f64 {
    inputs.meat_meals * factors.meat_per_meal + inputs.dairy_servings * factors.dairy_per_serving
}

/// Compute consumption emissions (kg CO2/year)
pub fn estimate_lifestyle(inputs: &NormalizedInputs, factors: &EmissionFactors) -> f64 {
    inputs.shopping_dollars * factors.shopping_per_dollar + inputs.waste_kg * factors.waste_per_kg
}

/// Compute the full per-category breakdown with default factors.
pub fn estimate_breakdown(inputs: &NormalizedInputs) -> EmissionBreakdown {
    estimate_breakdown_with_factors(inputs, &EmissionFactors::default())
}

/// Compute the full per-category breakdown with custom factors.
pub fn estimate_breakdown_with_factors(
    inputs: &NormalizedInputs,
    factors: &EmissionFactors,
) -> EmissionBreakdown {
    EmissionBreakdown {
        transport: estimate_transport(inputs, factors),
        energy: estimate_energy(inputs, factors),
        food: estimate_food(inputs, factors),
        lifestyle: estimate_lifestyle(inputs, factors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_inputs() -> NormalizedInputs {
        NormalizedInputs {
            car_miles: 0.0,
            flight_hours: 0.0,
            electricity_kwh: 0.0,
            gas_therms: 0.0,
            meat_meals: 0.0,
            dairy_servings: 0.0,
            shopping_dollars: 0.0,
            waste_kg: 0.0,
        }
    }

    #[test]
    fn test_transport_estimate() {
        // 12000 * 0.4 + 10 * 90 = 4800 + 900 = 5700
        let inputs = NormalizedInputs {
            car_miles: 12000.0,
            flight_hours: 10.0,
            ..zero_inputs()
        };
        let transport = estimate_transport(&inputs, &EmissionFactors::default());
        assert_eq!(transport, 5700.0);
    }

    #[test]
    fn test_energy_estimate() {
        // 900 * 0.5 + 50 * 2.2 = 450 + 110 = 560
        let inputs = NormalizedInputs {
            electricity_kwh: 900.0,
            gas_therms: 50.0,
            ..zero_inputs()
        };
        let energy = estimate_energy(&inputs, &EmissionFactors::default());
        assert_eq!(energy, 560.0);
    }

    #[test]
    fn test_food_estimate() {
        // 7 * 6.6 + 3 * 3.2 = 46.2 + 9.6 = 55.8
        let inputs = NormalizedInputs {
            meat_meals: 7.0,
            dairy_servings: 3.0,
            ..zero_inputs()
        };
        let food = estimate_food(&inputs, &EmissionFactors::default());
        assert!((food - 55.8).abs() < 1e-9);
    }

    #[test]
    fn test_lifestyle_estimate() {
        // 500 * 0.5 + 20 * 0.8 = 250 + 16 = 266
        let inputs = NormalizedInputs {
            shopping_dollars: 500.0,
            waste_kg: 20.0,
            ..zero_inputs()
        };
        let lifestyle = estimate_lifestyle(&inputs, &EmissionFactors::default());
        assert_eq!(lifestyle, 266.0);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let breakdown = EmissionBreakdown {
            transport: 5700.0,
            energy: 560.0,
            food: 55.8,
            lifestyle: 266.0,
        };
        assert_eq!(
            breakdown.total(),
            5700.0 + 560.0 + 55.8 + 266.0
        );
    }

    #[test]
    fn test_zero_inputs_give_zero_breakdown() {
        let breakdown = estimate_breakdown(&zero_inputs());
        assert_eq!(breakdown.transport, 0.0);
        assert_eq!(breakdown.energy, 0.0);
        assert_eq!(breakdown.food, 0.0);
        assert_eq!(breakdown.lifestyle, 0.0);
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn test_highest_category() {
        let breakdown = EmissionBreakdown {
            transport: 100.0,
            energy: 900.0,
            food: 200.0,
            lifestyle: 300.0,
        };
        assert_eq!(breakdown.highest_category(), Category::Energy);
    }

    #[test]
    fn test_highest_category_tie_keeps_earlier() {
        let breakdown = EmissionBreakdown {
            transport: 500.0,
            energy: 500.0,
            food: 500.0,
            lifestyle: 500.0,
        };
        assert_eq!(breakdown.highest_category(), Category::Transport);

        let breakdown = EmissionBreakdown {
            transport: 100.0,
            energy: 500.0,
            food: 500.0,
            lifestyle: 200.0,
        };
        assert_eq!(breakdown.highest_category(), Category::Energy);
    }

    #[test]
    fn test_custom_factors() {
        let factors = EmissionFactors {
            car_per_mile: 1.0,
            ..EmissionFactors::default()
        };
        let inputs = NormalizedInputs {
            car_miles: 100.0,
            ..zero_inputs()
        };
        let breakdown = estimate_breakdown_with_factors(&inputs, &factors);
        assert_eq!(breakdown.transport, 100.0);
    }
}
