//! Log-linear predictor accumulation.
//!
//! Each risk factor contributes an independent additive term. Treatment
//! status selects exactly one of the two SBP branches; smoker and diabetes
//! terms apply only when the corresponding flag is set.

use crate::coefficients::CoefficientSet;
use crate::profile::RiskInput;

/// Accumulate the linear predictor for an input already validated to be in
/// the log domain.
pub fn compute_linear_predictor(input: &RiskInput, set: &CoefficientSet) -> f64 {
    let ln_age = input.age_years.ln();
    let ln_tc = input.total_cholesterol.ln();
    let ln_hdl = input.hdl_cholesterol.ln();
    let ln_sbp = input.systolic_bp.ln();

    let mut predictor = set.age * ln_age
        + set.sq_age * ln_age * ln_age
        + set.total_chol * ln_tc
        + set.age_total_chol * ln_age * ln_tc
        + set.hdl_chol * ln_hdl
        + set.age_hdl_chol * ln_age * ln_hdl;

    // Treated vs untreated SBP: mutually exclusive, exactly one applies.
    predictor += if input.on_bp_treatment {
        set.treated_sbp * ln_sbp + set.age_treated_sbp * ln_age * ln_sbp
    } else {
        set.untreated_sbp * ln_sbp + set.age_untreated_sbp * ln_age * ln_sbp
    };

    if input.smoker {
        predictor += set.smoker + set.age_smoker * ln_age;
    }

    if input.diabetic {
        predictor += set.diabetes;
    }

    predictor
}
