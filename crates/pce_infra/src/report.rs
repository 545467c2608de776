//! Presentation-facing report shape.
//!
//! The presentation layer consumes this as-is: clamped percentage, a
//! one-decimal display string, category token and label, the age advisory
//! when applicable, and the input fingerprint for audit correlation.

use serde::Serialize;

use pce_core::engine::{
    RiskAssessment, RiskCategory, VALIDATED_AGE_MAX_YEARS, VALIDATED_AGE_MIN_YEARS,
};
use pce_core::fingerprint::{compute_input_fingerprint, format_fingerprint};
use pce_core::profile::RiskInput;

/// Serializable result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Clamped 10-year risk percentage.
    pub risk_percent: f64,
    /// Percentage rounded to one decimal for display, e.g. "5.4".
    pub risk_percent_display: String,
    /// Category token: "low" | "borderline" | "intermediate" | "high".
    pub category: &'static str,
    /// Human-readable category label with the percentage band.
    pub category_label: &'static str,
    /// Advisory text when age is outside the validated 40–79 range.
    pub age_advisory: Option<String>,
    /// Stable hex fingerprint of the input fields.
    pub input_fingerprint: String,
}

impl RiskReport {
    /// Shape an engine assessment for the presentation layer.
    pub fn from_assessment(input: &RiskInput, assessment: &RiskAssessment) -> Self {
        let age_advisory = assessment.outside_validated_age_range.then(|| {
            format!(
                "the Pooled Cohort Equations were validated for ages {:.0}-{:.0}; \
                 age {} is outside that range, use the result with caution",
                VALIDATED_AGE_MIN_YEARS, VALIDATED_AGE_MAX_YEARS, input.age_years
            )
        });
        Self {
            risk_percent: assessment.risk_percent,
            risk_percent_display: format!("{:.1}", assessment.risk_percent),
            category: assessment.category.as_str(),
            category_label: category_label(assessment.category),
            age_advisory,
            input_fingerprint: format_fingerprint(compute_input_fingerprint(input)),
        }
    }
}

/// Display label for a category, matching the clinical banding.
pub fn category_label(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => "Low risk (<5%)",
        RiskCategory::Borderline => "Borderline risk (5-7.4%)",
        RiskCategory::Intermediate => "Intermediate risk (7.5-19.9%)",
        RiskCategory::High => "High risk (>=20%)",
    }
}
