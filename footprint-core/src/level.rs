//! Emission level banding
//!
//! Global invariants enforced:
//! - Banding is a total function of the total emissions
//! - Band boundaries are half-open: [0, excellent) [excellent, good) ...

use serde::{Deserialize, Serialize};

/// Emission level band for a total annual footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionLevel {
    Excellent, // < 6000
    Good,      // < 12000
    Average,   // < 18000
    High,      // >= 18000
}

impl EmissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionLevel::Excellent => "excellent",
            EmissionLevel::Good => "good",
            EmissionLevel::Average => "average",
            EmissionLevel::High => "high",
        }
    }

    /// Human-readable positioning against the global average.
    pub fn description(&self) -> &'static str {
        match self {
            EmissionLevel::Excellent => "Well below global average!",
            EmissionLevel::Good => "Below global average",
            EmissionLevel::Average => "Around global average",
            EmissionLevel::High => "Above global average",
        }
    }
}

/// Configurable band thresholds (upper bounds, kg CO2/year).
///
/// The defaults are the canonical threshold table; tests pin it. The
/// alternative 8000/16000/24000 table seen in some deployments is reachable
/// through the config file, never as a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        LevelThresholds {
            excellent: 6000.0,
            good: 12000.0,
            average: 18000.0,
        }
    }
}

/// Assign the emission level with default thresholds.
pub fn assign_level(total: f64) -> EmissionLevel {
    assign_level_with_thresholds(total, &LevelThresholds::default())
}

/// Assign the emission level with custom thresholds.
pub fn assign_level_with_thresholds(total: f64, thresholds: &LevelThresholds) -> EmissionLevel {
    if total < thresholds.excellent {
        EmissionLevel::Excellent
    } else if total < thresholds.good {
        EmissionLevel::Good
    } else if total < thresholds.average {
        EmissionLevel::Average
    } else {
        EmissionLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        assert_eq!(assign_level(0.0), EmissionLevel::Excellent);
        assert_eq!(assign_level(5999.9), EmissionLevel::Excellent);
        assert_eq!(assign_level(6000.0), EmissionLevel::Good);
        assert_eq!(assign_level(11999.9), EmissionLevel::Good);
        assert_eq!(assign_level(12000.0), EmissionLevel::Average);
        assert_eq!(assign_level(17999.9), EmissionLevel::Average);
        assert_eq!(assign_level(18000.0), EmissionLevel::High);
        assert_eq!(assign_level(37000.0), EmissionLevel::High);
    }

    #[test]
    fn test_custom_thresholds() {
        // The alternative deployment table
        let thresholds = LevelThresholds {
            excellent: 8000.0,
            good: 16000.0,
            average: 24000.0,
        };
        assert_eq!(
            assign_level_with_thresholds(7000.0, &thresholds),
            EmissionLevel::Excellent
        );
        assert_eq!(
            assign_level_with_thresholds(20000.0, &thresholds),
            EmissionLevel::Average
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            EmissionLevel::Excellent.description(),
            "Well below global average!"
        );
        assert_eq!(EmissionLevel::High.description(), "Above global average");
    }
}
