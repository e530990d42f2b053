//! Static result-view text keyed by risk tier.

use crate::models::RiskTier;

pub const DISCLAIMER: &str = "This assessment is for educational purposes only and should not \
     replace professional medical advice. Please consult with a healthcare provider for proper \
     diagnosis and treatment.";

#[derive(Debug, Clone, Copy)]
pub struct RiskSummary {
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

pub fn summary_for(tier: RiskTier) -> RiskSummary {
    match tier {
        RiskTier::Low => RiskSummary {
            title: "Low Risk",
            description: "Your diabetes risk appears to be low based on the provided data.",
            recommendations: &[
                "Maintain current healthy lifestyle",
                "Regular exercise and balanced diet",
                "Annual health checkups",
                "Monitor weight and blood pressure",
            ],
        },
        RiskTier::Moderate => RiskSummary {
            title: "Moderate Risk",
            description: "Some factors indicate a moderate risk. Consider lifestyle changes.",
            recommendations: &[
                "Increase physical activity",
                "Reduce refined sugar intake",
                "Monitor blood glucose regularly",
                "Consult healthcare provider for prevention plan",
            ],
        },
        RiskTier::High => RiskSummary {
            title: "High Risk",
            description: "Multiple factors suggest elevated diabetes risk. Consult a healthcare provider.",
            recommendations: &[
                "Immediate consultation with healthcare provider",
                "Comprehensive metabolic testing",
                "Lifestyle modification program",
                "Regular monitoring and follow-up",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_four_recommendations() {
        for tier in [RiskTier::Low, RiskTier::Moderate, RiskTier::High] {
            let summary = summary_for(tier);
            assert_eq!(summary.recommendations.len(), 4);
            assert!(!summary.title.is_empty());
            assert!(!summary.description.is_empty());
        }
    }
}
