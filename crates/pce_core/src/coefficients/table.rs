//! Regression coefficients from the 2013 ACC/AHA Pooled Cohort Equations
//! (Goff et al.), carried verbatim.
//!
//! Exactly four sets exist, one per `CohortKey`. Selection is an exact
//! match; the only fallback in the model is the other→white race aliasing,
//! which happens before lookup.

use crate::profile::demographics::{CohortKey, ResolvedRace, Sex};

/// One cohort's regression coefficients plus the two model constants.
///
/// Coefficient naming follows the published terms: each field multiplies
/// the log-transformed risk factor (or product of factors) it names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    /// ln(age)
    pub age: f64,
    /// ln(age)²
    pub sq_age: f64,
    /// ln(total cholesterol)
    pub total_chol: f64,
    /// ln(age) · ln(total cholesterol)
    pub age_total_chol: f64,
    /// ln(HDL cholesterol)
    pub hdl_chol: f64,
    /// ln(age) · ln(HDL cholesterol)
    pub age_hdl_chol: f64,
    /// ln(SBP) when on BP-lowering medication
    pub treated_sbp: f64,
    /// ln(age) · ln(SBP) when on BP-lowering medication
    pub age_treated_sbp: f64,
    /// ln(SBP) when untreated
    pub untreated_sbp: f64,
    /// ln(age) · ln(SBP) when untreated
    pub age_untreated_sbp: f64,
    /// Current-smoker indicator
    pub smoker: f64,
    /// ln(age) · current-smoker indicator
    pub age_smoker: f64,
    /// Diabetes indicator
    pub diabetes: f64,
    /// Baseline 10-year event-free survival at the cohort mean (S10).
    pub baseline_survival: f64,
    /// Mean of the linear predictor in the derivation cohort.
    pub mean_terms: f64,
}

pub const FEMALE_WHITE: CoefficientSet = CoefficientSet {
    age: -29.799,
    sq_age: 4.884,
    total_chol: 13.54,
    age_total_chol: -3.114,
    hdl_chol: -13.578,
    age_hdl_chol: 3.149,
    treated_sbp: 2.019,
    age_treated_sbp: 0.0,
    untreated_sbp: 1.957,
    age_untreated_sbp: 0.0,
    smoker: 7.574,
    age_smoker: -1.665,
    diabetes: 0.661,
    baseline_survival: 0.9665,
    mean_terms: -29.18,
};

pub const FEMALE_BLACK: CoefficientSet = CoefficientSet {
    age: 17.114,
    sq_age: 0.0,
    total_chol: 0.94,
    age_total_chol: 0.0,
    hdl_chol: -18.92,
    age_hdl_chol: 4.475,
    treated_sbp: 29.291,
    age_treated_sbp: -6.432,
    untreated_sbp: 27.82,
    age_untreated_sbp: -6.087,
    smoker: 0.691,
    age_smoker: 0.0,
    diabetes: 0.874,
    baseline_survival: 0.9533,
    mean_terms: 86.61,
};

pub const MALE_WHITE: CoefficientSet = CoefficientSet {
    age: 12.344,
    sq_age: 0.0,
    total_chol: 11.853,
    age_total_chol: -2.664,
    hdl_chol: -7.99,
    age_hdl_chol: 1.769,
    treated_sbp: 1.797,
    age_treated_sbp: 0.0,
    untreated_sbp: 1.764,
    age_untreated_sbp: 0.0,
    smoker: 7.837,
    age_smoker: -1.795,
    diabetes: 0.658,
    baseline_survival: 0.9144,
    mean_terms: 61.18,
};

pub const MALE_BLACK: CoefficientSet = CoefficientSet {
    age: 2.469,
    sq_age: 0.0,
    total_chol: 0.302,
    age_total_chol: 0.0,
    hdl_chol: -0.307,
    age_hdl_chol: 0.0,
    treated_sbp: 1.916,
    age_treated_sbp: 0.0,
    untreated_sbp: 1.809,
    age_untreated_sbp: 0.0,
    smoker: 0.549,
    age_smoker: 0.0,
    diabetes: 0.645,
    baseline_survival: 0.8954,
    mean_terms: 19.54,
};

/// Select the coefficient set for a cohort.
///
/// The match is exhaustive over the four buckets; no input combination is
/// unmapped.
pub fn coefficient_set(cohort: CohortKey) -> &'static CoefficientSet {
    match (cohort.sex, cohort.race) {
        (Sex::Female, ResolvedRace::White) => &FEMALE_WHITE,
        (Sex::Female, ResolvedRace::Black) => &FEMALE_BLACK,
        (Sex::Male, ResolvedRace::White) => &MALE_WHITE,
        (Sex::Male, ResolvedRace::Black) => &MALE_BLACK,
    }
}
