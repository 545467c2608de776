//! Risk-factor input record.

use crate::profile::demographics::{CohortKey, Race, Sex};
use crate::profile::invalid::{InputField, InvalidInput};

/// One evaluation request.
///
/// Constructed once per evaluation and discarded after producing a result;
/// the engine never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    /// Age in years. The model is validated for 40–79.
    pub age_years: f64,
    pub sex: Sex,
    /// Boundary-level race; `Other` scores with the white/other coefficients.
    pub race: Race,
    /// Total cholesterol in mg/dL.
    pub total_cholesterol: f64,
    /// HDL cholesterol in mg/dL.
    pub hdl_cholesterol: f64,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: f64,
    /// True when on BP-lowering medication (treated SBP branch).
    pub on_bp_treatment: bool,
    /// True for a current smoker.
    pub smoker: bool,
    pub diabetic: bool,
}

impl RiskInput {
    /// The coefficient bucket this input resolves to.
    pub fn cohort(&self) -> CohortKey {
        CohortKey::new(self.sex, self.race)
    }

    /// Check every log-transformed field for a finite, strictly positive
    /// value.
    ///
    /// `ln()` of a non-positive value is undefined; the engine fails here
    /// rather than let NaN flow through the linear predictor. Non-finite
    /// values are rejected on the same path (fail-closed).
    pub fn check_log_domain(&self) -> Result<(), InvalidInput> {
        let log_fields = [
            (InputField::Age, self.age_years),
            (InputField::TotalCholesterol, self.total_cholesterol),
            (InputField::HdlCholesterol, self.hdl_cholesterol),
            (InputField::SystolicBp, self.systolic_bp),
        ];
        for (field, value) in log_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(InvalidInput::NonPositive { field, value });
            }
        }
        Ok(())
    }
}
