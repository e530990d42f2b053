pub mod assessment;
pub mod form;

pub use assessment::{ClinicalRecord, RiskAssessment, RiskTier};
pub use form::{form_fields, FieldSpec};
