use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::models::{form_fields, ClinicalRecord, FieldSpec, RiskTier};
use crate::services::{recommendations, scoring, validation};
use crate::services::validation::AssessmentForm;

/// Result view returned for a successful assessment: the scoring output
/// plus the static text the result screen renders.
#[derive(Debug, Serialize)]
pub struct AssessmentView {
    pub risk: RiskTier,
    pub confidence: u32,
    pub factors: Vec<String>,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormTemplate {
    pub fields: &'static [FieldSpec],
    pub defaults: ClinicalRecord,
}

/// POST /api/assessments
pub async fn create_assessment(
    Json(form): Json<AssessmentForm>,
) -> Result<Json<AssessmentView>, ApiError> {
    let record = validation::parse_form(&form);
    validation::validate(&record)?;

    let result = scoring::assess(&record);
    let summary = recommendations::summary_for(result.risk);

    tracing::info!(risk = ?result.risk, factors = result.factors.len(), "Assessment completed");

    Ok(Json(AssessmentView {
        risk: result.risk,
        confidence: result.confidence,
        factors: result.factors,
        title: summary.title,
        description: summary.description,
        recommendations: summary.recommendations,
        disclaimer: recommendations::DISCLAIMER,
    }))
}

/// GET /api/assessments/form
pub async fn form_template() -> Json<FormTemplate> {
    Json(FormTemplate {
        fields: form_fields(),
        defaults: ClinicalRecord::default(),
    })
}
