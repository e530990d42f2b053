//! Static dataset statistics and insights shown alongside the form.
//!
//! The figures describe the reference diabetes dataset; nothing here is
//! computed from submissions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterStats {
    pub title: &'static str,
    pub mean: f64,
    pub median: f64,
    pub range: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub fn dataset_stats() -> &'static [ParameterStats] {
    static STATS: [ParameterStats; 4] = [
        ParameterStats {
            title: "Glucose Levels",
            mean: 120.9,
            median: 117.0,
            range: "0-199 mg/dL",
            description: "Blood glucose concentration",
        },
        ParameterStats {
            title: "BMI",
            mean: 31.99,
            median: 32.0,
            range: "18.5-67.1",
            description: "Body Mass Index",
        },
        ParameterStats {
            title: "Age Distribution",
            mean: 33.2,
            median: 29.0,
            range: "21-81 years",
            description: "Majority aged 20-30 years",
        },
        ParameterStats {
            title: "Blood Pressure",
            mean: 69.1,
            median: 72.0,
            range: "0-122 mmHg",
            description: "Diastolic blood pressure",
        },
    ];
    &STATS
}

pub fn insights() -> &'static [Insight] {
    static INSIGHTS: [Insight; 3] = [
        Insight {
            title: "High Variance Parameters",
            items: &["Insulin levels", "Skin thickness"],
            description: "These parameters show significant variation and many zero values",
            kind: "warning",
        },
        Insight {
            title: "Key Risk Indicators",
            items: &[
                "Higher BMI correlates with diabetes",
                "Glucose > 140 mg/dL indicates risk",
            ],
            description: "Critical factors for diabetes prediction",
            kind: "info",
        },
        Insight {
            title: "Age Factor",
            items: &[
                "Most patients are 20-30 years old",
                "Risk increases with age",
            ],
            description: "Age distribution in the dataset",
            kind: "success",
        },
    ];
    &INSIGHTS
}
