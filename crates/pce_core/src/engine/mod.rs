//! The risk engine: cohort lookup, linear predictor, survival transform,
//! categorization, and the age-validity advisory.
//!
//! `compute_risk` is pure and deterministic. The only failure mode is
//! `InvalidInput`; extreme but positive inputs never fail — the percentage
//! is clamped, not rejected.

pub mod category;
pub mod linear_predictor;
pub mod survival;

pub use category::{
    BORDERLINE_MIN_PERCENT, HIGH_MIN_PERCENT, INTERMEDIATE_MIN_PERCENT, RiskCategory,
};
pub use linear_predictor::compute_linear_predictor;
pub use survival::{clamp_percent, ten_year_risk_percent};

use crate::coefficients::coefficient_set;
use crate::profile::{CohortKey, InvalidInput, RiskInput};

/// Lower bound of the age range the derivation cohorts validated.
pub const VALIDATED_AGE_MIN_YEARS: f64 = 40.0;
/// Upper bound of the age range the derivation cohorts validated.
pub const VALIDATED_AGE_MAX_YEARS: f64 = 79.0;

/// Output of one risk evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// 10-year risk as a percentage, clamped into [0, 100].
    pub risk_percent: f64,
    /// Ordinal category derived from `risk_percent`.
    pub category: RiskCategory,
    /// Coefficient bucket the input resolved to (after other→white aliasing).
    pub cohort: CohortKey,
    /// True when age falls outside the validated 40–79 range. The result is
    /// still computed; this is an advisory, not a failure.
    pub outside_validated_age_range: bool,
}

/// Outcome counters for engine evaluations.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    evaluated_total: u64,
    invalid_input_total: u64,
    outside_age_range_total: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluated_total(&self) -> u64 {
        self.evaluated_total
    }

    pub fn invalid_input_total(&self) -> u64 {
        self.invalid_input_total
    }

    pub fn outside_age_range_total(&self) -> u64 {
        self.outside_age_range_total
    }

    fn record_evaluated(&mut self) {
        self.evaluated_total += 1;
    }

    fn record_invalid_input(&mut self) {
        self.invalid_input_total += 1;
    }

    fn record_outside_age_range(&mut self) {
        self.outside_age_range_total += 1;
    }
}

/// Compute the 10-year ASCVD risk for one input.
///
/// Steps:
/// 1. Log-domain check on age, TC, HDL, and SBP.
/// 2. Cohort resolution → coefficient set (exhaustive four-bucket match).
/// 3. Log-linear predictor accumulation.
/// 4. Survival transform `1 − S10^exp(L − mean_terms)`, × 100, clamped
///    into [0, 100].
/// 5. Category derivation and age-validity advisory.
pub fn compute_risk(input: &RiskInput) -> Result<RiskAssessment, InvalidInput> {
    input.check_log_domain()?;

    let cohort = input.cohort();
    let set = coefficient_set(cohort);
    let predictor = compute_linear_predictor(input, set);
    let risk_percent = ten_year_risk_percent(predictor, set);
    let category = RiskCategory::from_percent(risk_percent);

    let outside_validated_age_range =
        !(VALIDATED_AGE_MIN_YEARS..=VALIDATED_AGE_MAX_YEARS).contains(&input.age_years);
    if outside_validated_age_range {
        tracing::warn!(
            "age {} outside validated range {}-{}; result is advisory only",
            input.age_years,
            VALIDATED_AGE_MIN_YEARS,
            VALIDATED_AGE_MAX_YEARS
        );
    }

    tracing::debug!(
        "RiskAssessment cohort={} risk_percent={:.4} category={:?}",
        cohort.as_str(),
        risk_percent,
        category
    );

    Ok(RiskAssessment {
        risk_percent,
        category,
        cohort,
        outside_validated_age_range,
    })
}

/// Evaluate one input and record outcome counters.
///
/// Same semantics as `compute_risk`; callers that track evaluation volume
/// pass their own `EngineMetrics`.
pub fn compute_risk_with_metrics(
    input: &RiskInput,
    metrics: &mut EngineMetrics,
) -> Result<RiskAssessment, InvalidInput> {
    match compute_risk(input) {
        Ok(assessment) => {
            metrics.record_evaluated();
            if assessment.outside_validated_age_range {
                metrics.record_outside_age_range();
            }
            Ok(assessment)
        }
        Err(err) => {
            metrics.record_invalid_input();
            Err(err)
        }
    }
}
