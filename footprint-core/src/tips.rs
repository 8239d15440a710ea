//! Static reduction-tip catalog
//!
//! Fixed per-category advice with estimated savings. The priority section
//! follows the highest-emission category of the assessed breakdown.

use crate::estimate::{Category, EmissionBreakdown};
use serde::{Deserialize, Serialize};

/// Impact grade of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactGrade {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ImpactGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactGrade::VeryHigh => "very-high",
            ImpactGrade::High => "high",
            ImpactGrade::Medium => "medium",
            ImpactGrade::Low => "low",
        }
    }
}

/// One reduction tip
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Tip {
    pub action: &'static str,
    pub impact: ImpactGrade,
    /// Estimated annual savings in kg CO2
    pub savings_kg: f64,
}

const fn tip(action: &'static str, impact: ImpactGrade, savings_kg: f64) -> Tip {
    Tip {
        action,
        impact,
        savings_kg,
    }
}

const TRANSPORT_TIPS: &[Tip] = &[
    tip("Walk or bike for trips under 3 miles", ImpactGrade::High, 2400.0),
    tip("Use public transportation", ImpactGrade::High, 1800.0),
    tip("Work from home 2 days/week", ImpactGrade::Medium, 1200.0),
    tip("Combine errands into one trip", ImpactGrade::Medium, 600.0),
    tip("Maintain proper tire pressure", ImpactGrade::Low, 300.0),
    tip("Consider electric or hybrid vehicle", ImpactGrade::VeryHigh, 3500.0),
];

const ENERGY_TIPS: &[Tip] = &[
    tip("Switch to LED lighting", ImpactGrade::Medium, 400.0),
    tip("Use programmable thermostat", ImpactGrade::High, 800.0),
    tip("Air dry clothes instead of using dryer", ImpactGrade::Medium, 500.0),
    tip("Unplug electronics when not in use", ImpactGrade::Low, 200.0),
    tip("Improve home insulation", ImpactGrade::VeryHigh, 1500.0),
    tip("Install solar panels", ImpactGrade::VeryHigh, 2000.0),
];

const FOOD_TIPS: &[Tip] = &[
    tip("Reduce meat consumption by 50%", ImpactGrade::VeryHigh, 1200.0),
    tip("Buy local, seasonal produce", ImpactGrade::Medium, 500.0),
    tip("Reduce food waste by meal planning", ImpactGrade::High, 800.0),
    tip("Start a home compost bin", ImpactGrade::Medium, 300.0),
    tip("Choose organic when possible", ImpactGrade::Low, 200.0),
    tip("Grow your own herbs and vegetables", ImpactGrade::Low, 150.0),
];

const LIFESTYLE_TIPS: &[Tip] = &[
    tip("Buy second-hand clothing", ImpactGrade::Medium, 400.0),
    tip("Repair items instead of replacing", ImpactGrade::Medium, 600.0),
    tip("Use digital receipts and bills", ImpactGrade::Low, 100.0),
    tip("Choose quality over quantity", ImpactGrade::High, 800.0),
    tip("Share or rent instead of buying", ImpactGrade::Medium, 500.0),
    tip("Recycle electronics properly", ImpactGrade::Low, 200.0),
];

/// Tip section for one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TipSection {
    pub category: Category,
    pub tips: Vec<Tip>,
}

/// Personalized action plan: all sections, with the highest-emission
/// category flagged as the priority.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ActionPlan {
    pub priority: Category,
    pub sections: Vec<TipSection>,
}

/// The static tips for one category.
pub fn tips_for(category: Category) -> &'static [Tip] {
    match category {
        Category::Transport => TRANSPORT_TIPS,
        Category::Energy => ENERGY_TIPS,
        Category::Food => FOOD_TIPS,
        Category::Lifestyle => LIFESTYLE_TIPS,
    }
}

/// Build the action plan for a breakdown.
pub fn action_plan(breakdown: &EmissionBreakdown) -> ActionPlan {
    let sections = Category::ALL
        .iter()
        .map(|category| TipSection {
            category: *category,
            tips: tips_for(*category).to_vec(),
        })
        .collect();

    ActionPlan {
        priority: breakdown.highest_category(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_six_tips() {
        for category in Category::ALL {
            assert_eq!(tips_for(category).len(), 6);
        }
    }

    #[test]
    fn test_priority_follows_highest_category() {
        let breakdown = EmissionBreakdown {
            transport: 100.0,
            energy: 50.0,
            food: 4000.0,
            lifestyle: 10.0,
        };
        let plan = action_plan(&breakdown);
        assert_eq!(plan.priority, Category::Food);
        assert_eq!(plan.sections.len(), 4);
        assert_eq!(plan.sections[0].category, Category::Transport);
    }

    #[test]
    fn test_best_transport_saving() {
        let best = TRANSPORT_TIPS
            .iter()
            .max_by(|a, b| a.savings_kg.total_cmp(&b.savings_kg))
            .unwrap();
        assert_eq!(best.savings_kg, 3500.0);
        assert_eq!(best.impact, ImpactGrade::VeryHigh);
    }
}
