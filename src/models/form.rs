use serde::Serialize;

/// Input widget hints for one form field. Min/max/step are rendering
/// hints only; they are not enforced as hard errors on submission.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// The eight assessment form fields, in display order.
pub fn form_fields() -> &'static [FieldSpec] {
    static FIELDS: [FieldSpec; 8] = [
        FieldSpec {
            key: "pregnancies",
            label: "Number of Pregnancies",
            min: 0.0,
            max: 20.0,
            step: 1.0,
        },
        FieldSpec {
            key: "glucose",
            label: "Glucose Level (mg/dL)",
            min: 0.0,
            max: 300.0,
            step: 1.0,
        },
        FieldSpec {
            key: "bloodPressure",
            label: "Blood Pressure (mmHg)",
            min: 0.0,
            max: 200.0,
            step: 1.0,
        },
        FieldSpec {
            key: "skinThickness",
            label: "Skin Thickness (mm)",
            min: 0.0,
            max: 100.0,
            step: 1.0,
        },
        FieldSpec {
            key: "insulin",
            label: "Insulin Level (\u{3bc}U/mL)",
            min: 0.0,
            max: 900.0,
            step: 1.0,
        },
        FieldSpec {
            key: "bmi",
            label: "BMI",
            min: 10.0,
            max: 70.0,
            step: 0.1,
        },
        FieldSpec {
            key: "dpf",
            label: "Diabetes Pedigree Function",
            min: 0.0,
            max: 3.0,
            step: 0.01,
        },
        FieldSpec {
            key: "age",
            label: "Age (years)",
            min: 18.0,
            max: 120.0,
            step: 1.0,
        },
    ];
    &FIELDS
}
