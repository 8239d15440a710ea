//! Achievement badges
//!
//! Evaluates fixed-threshold badges against a breakdown.
//!
//! Global invariants enforced:
//! - Predicates are strict less-than against their thresholds
//! - Evaluation order is deterministic (the declaration order below)
//! - Each badge reads exactly one breakdown field (or the total)

use crate::estimate::EmissionBreakdown;
use serde::{Deserialize, Serialize};

/// Badge identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    EcoCommuter,
    EnergySaver,
    PlantHero,
    ClimateChampion,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::EcoCommuter => "eco-commuter",
            AchievementId::EnergySaver => "energy-saver",
            AchievementId::PlantHero => "plant-hero",
            AchievementId::ClimateChampion => "climate-champion",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::EcoCommuter => "Eco Commuter",
            AchievementId::EnergySaver => "Energy Saver",
            AchievementId::PlantHero => "Plant Hero",
            AchievementId::ClimateChampion => "Climate Champion",
        }
    }
}

/// Configurable badge thresholds (kg CO2/year, strict upper bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementThresholds {
    /// Eco Commuter: transport below this
    pub transport: f64,
    /// Energy Saver: energy below this
    pub energy: f64,
    /// Plant Hero: food below this
    pub food: f64,
    /// Climate Champion: total below this
    pub total: f64,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        AchievementThresholds {
            transport: 2000.0,
            energy: 3000.0,
            food: 2500.0,
            total: 8000.0,
        }
    }
}

/// One evaluated badge.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    /// Target the measured value must stay under
    pub threshold: f64,
    /// Value the predicate was evaluated against
    pub measured: f64,
    pub achieved: bool,
}

/// All badges for one assessment, in deterministic order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct AchievementSet {
    pub achievements: Vec<Achievement>,
    pub achieved_count: usize,
}

/// Evaluate all badges with default thresholds.
pub fn evaluate_achievements(breakdown: &EmissionBreakdown) -> AchievementSet {
    evaluate_achievements_with_thresholds(breakdown, &AchievementThresholds::default())
}

/// Evaluate all badges with custom thresholds.
pub fn evaluate_achievements_with_thresholds(
    breakdown: &EmissionBreakdown,
    thresholds: &AchievementThresholds,
) -> AchievementSet {
    let total = breakdown.total();
    let candidates = [
        (AchievementId::EcoCommuter, breakdown.transport, thresholds.transport),
        (AchievementId::EnergySaver, breakdown.energy, thresholds.energy),
        (AchievementId::PlantHero, breakdown.food, thresholds.food),
        (AchievementId::ClimateChampion, total, thresholds.total),
    ];

    let achievements: Vec<Achievement> = candidates
        .into_iter()
        .map(|(id, measured, threshold)| Achievement {
            id,
            title: id.title(),
            threshold,
            measured,
            achieved: measured < threshold,
        })
        .collect();

    let achieved_count = achievements.iter().filter(|a| a.achieved).count();

    AchievementSet {
        achievements,
        achieved_count,
    }
}
