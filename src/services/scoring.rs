//! Heuristic risk scorer.
//!
//! Pure and total: every `ClinicalRecord` maps to exactly one
//! `RiskAssessment`. Fixed point values are added when a threshold is
//! exceeded and the cumulative score is bucketed into a tier.

use crate::models::{ClinicalRecord, RiskAssessment, RiskTier};

const MODERATE_CUTOFF: u32 = 30;
const HIGH_CUTOFF: u32 = 60;

const BASE_CONFIDENCE: u32 = 85;
const CONFIDENCE_BOOST_CUTOFF: u32 = 50;
const MIN_CONFIDENCE: u32 = 65;
const MAX_CONFIDENCE: u32 = 95;

pub fn assess(record: &ClinicalRecord) -> RiskAssessment {
    let mut score = 0u32;
    let mut factors = Vec::new();

    if record.glucose > 140.0 {
        score += 30;
        factors.push(format!("High glucose level ({} mg/dL)", record.glucose));
    }

    if record.bmi > 30.0 {
        score += 25;
        factors.push(format!("High BMI ({})", record.bmi));
    }

    if record.age > 45.0 {
        score += 20;
        factors.push(format!("Advanced age ({} years)", record.age));
    }

    if record.blood_pressure > 80.0 {
        score += 15;
        factors.push(format!(
            "Elevated blood pressure ({} mmHg)",
            record.blood_pressure
        ));
    }

    if record.pregnancies > 3.0 {
        score += 10;
        factors.push(format!("Multiple pregnancies ({})", record.pregnancies));
    }

    if record.dpf > 0.8 {
        score += 15;
        factors.push(format!(
            "High diabetes pedigree function ({})",
            record.dpf
        ));
    }

    RiskAssessment {
        risk: tier_for(score),
        confidence: confidence_for(score),
        factors,
    }
}

pub fn tier_for(score: u32) -> RiskTier {
    if score < MODERATE_CUTOFF {
        RiskTier::Low
    } else if score < HIGH_CUTOFF {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

pub fn confidence_for(score: u32) -> u32 {
    let boost = if score > CONFIDENCE_BOOST_CUTOFF { 10 } else { 0 };
    (BASE_CONFIDENCE + boost).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
