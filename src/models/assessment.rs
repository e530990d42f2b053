use serde::{Deserialize, Serialize};

/// The eight clinical parameters collected by the assessment form.
/// Created fresh per submission, discarded after the response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalRecord {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub dpf: f64,
    pub age: f64,
}

impl Default for ClinicalRecord {
    // Initial values shown by the assessment form.
    fn default() -> Self {
        Self {
            pregnancies: 0.0,
            glucose: 120.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 32.0,
            dpf: 0.5,
            age: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Output of the heuristic scorer. `factors` keeps rule order:
/// glucose, bmi, age, blood pressure, pregnancies, dpf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk: RiskTier,
    pub confidence: u32,
    pub factors: Vec<String>,
}
