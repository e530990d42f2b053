//! Form boundary: raw string fields in, `ClinicalRecord` out.
//!
//! Each field is parsed as a float with invalid input defaulting to 0,
//! matching the original form behavior. Only glucose and BMI carry hard
//! range checks; the remaining fields are bounded by widget hints alone.

use serde::Deserialize;
use thiserror::Error;

use crate::models::ClinicalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Glucose levels should be between 0-300 mg/dL")]
    GlucoseOutOfRange,
    #[error("BMI should be between 10-70")]
    BmiOutOfRange,
}

/// Raw form submission. Fields arrive as strings straight from the
/// input widgets; missing fields are treated as empty input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub dpf: String,
    pub age: String,
}

/// Parse a form field the way the original form boundary did: take the
/// longest leading float, so trailing garbage is ignored ("45abc" is 45)
/// and anything without a numeric prefix defaults to 0.
pub fn parse_field(raw: &str) -> f64 {
    float_prefix(raw.trim()).parse().unwrap_or(0.0)
}

fn float_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut seen_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return "";
    }

    let mut end = i;
    // Optional exponent, only kept when it has digits of its own.
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    &s[..end]
}

pub fn parse_form(form: &AssessmentForm) -> ClinicalRecord {
    ClinicalRecord {
        pregnancies: parse_field(&form.pregnancies),
        glucose: parse_field(&form.glucose),
        blood_pressure: parse_field(&form.blood_pressure),
        skin_thickness: parse_field(&form.skin_thickness),
        insulin: parse_field(&form.insulin),
        bmi: parse_field(&form.bmi),
        dpf: parse_field(&form.dpf),
        age: parse_field(&form.age),
    }
}

pub fn validate(record: &ClinicalRecord) -> Result<(), ValidationError> {
    if record.glucose < 0.0 || record.glucose > 300.0 {
        return Err(ValidationError::GlucoseOutOfRange);
    }

    if record.bmi < 10.0 || record.bmi > 70.0 {
        return Err(ValidationError::BmiOutOfRange);
    }

    Ok(())
}
