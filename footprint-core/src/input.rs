//! Raw form inputs and numeric normalization
//!
//! Global invariants enforced:
//! - Normalization is total: any string maps to a finite f64
//! - Malformed input is silently substituted with zero, never surfaced

use serde::{Deserialize, Serialize};

/// Raw string-valued inputs as collected by a form or CLI flags.
///
/// Each field is free text: either empty or a textual number. No unit
/// validation is performed here; units are fixed by the emission factors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct RawInputs {
    /// Car miles driven per year
    pub car_miles: String,
    /// Flight hours per year
    pub flight_hours: String,
    /// Electricity use in kWh per month
    pub electricity_kwh: String,
    /// Natural gas use in therms per month
    pub gas_therms: String,
    /// Meat meals per week
    pub meat_meals: String,
    /// Dairy servings per day
    pub dairy_servings: String,
    /// Shopping spend in dollars per month
    pub shopping_dollars: String,
    /// Household waste in kg per week
    pub waste_kg: String,
}

/// Inputs after numeric normalization, ready for the category calculators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub car_miles: f64,
    pub flight_hours: f64,
    pub electricity_kwh: f64,
    pub gas_therms: f64,
    pub meat_meals: f64,
    pub dairy_servings: f64,
    pub shopping_dollars: f64,
    pub waste_kg: f64,
}

/// Parse a raw field as f64.
///
/// Empty, unparseable, and non-finite (NaN, infinity) values all normalize
/// to 0.0. A parseable negative value is NOT clamped: negative quantities
/// propagate into the calculators unchanged.
pub fn normalize(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

impl RawInputs {
    /// Normalize all eight fields at once.
    pub fn normalized(&self) -> NormalizedInputs {
        NormalizedInputs {
            car_miles: normalize(&self.car_miles),
            flight_hours: normalize(&self.flight_hours),
            electricity_kwh: normalize(&self.electricity_kwh),
            gas_therms: normalize(&self.gas_therms),
            meat_meals: normalize(&self.meat_meals),
            dairy_servings: normalize(&self.dairy_servings),
            shopping_dollars: normalize(&self.shopping_dollars),
            waste_kg: normalize(&self.waste_kg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_numbers() {
        assert_eq!(normalize("12000"), 12000.0);
        assert_eq!(normalize("0"), 0.0);
        assert_eq!(normalize("3.25"), 3.25);
        assert_eq!(normalize("  900  "), 900.0);
    }

    #[test]
    fn test_normalize_empty_and_garbage() {
        assert_eq!(normalize(""), 0.0);
        assert_eq!(normalize("   "), 0.0);
        assert_eq!(normalize("abc"), 0.0);
        assert_eq!(normalize("12,000"), 0.0);
        assert_eq!(normalize("1.2.3"), 0.0);
    }

    #[test]
    fn test_normalize_non_finite() {
        assert_eq!(normalize("NaN"), 0.0);
        assert_eq!(normalize("inf"), 0.0);
        assert_eq!(normalize("-inf"), 0.0);
    }

    #[test]
    fn test_normalize_negative_passes_through() {
        // Negative quantities are deliberately not clamped
        assert_eq!(normalize("-50"), -50.0);
    }

    #[test]
    fn test_normalized_defaults_to_zero() {
        let inputs = RawInputs::default();
        let n = inputs.normalized();
        assert_eq!(n.car_miles, 0.0);
        assert_eq!(n.flight_hours, 0.0);
        assert_eq!(n.electricity_kwh, 0.0);
        assert_eq!(n.gas_therms, 0.0);
        assert_eq!(n.meat_meals, 0.0);
        assert_eq!(n.dairy_servings, 0.0);
        assert_eq!(n.shopping_dollars, 0.0);
        assert_eq!(n.waste_kg, 0.0);
    }

    #[test]
    fn test_raw_inputs_from_json() {
        let json = r#"{"car_miles": "12000", "flight_hours": "10"}"#;
        let inputs: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.car_miles, "12000");
        assert_eq!(inputs.flight_hours, "10");
        assert_eq!(inputs.electricity_kwh, "");
    }
}
