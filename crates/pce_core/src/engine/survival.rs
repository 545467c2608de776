//! Survival-function transform from linear predictor to risk percentage.

use crate::coefficients::CoefficientSet;

/// 10-year risk percentage: `100 · (1 − S10^exp(L − mean_terms))`, clamped
/// into [0, 100].
pub fn ten_year_risk_percent(predictor: f64, set: &CoefficientSet) -> f64 {
    let exponent = (predictor - set.mean_terms).exp();
    let risk_fraction = 1.0 - set.baseline_survival.powf(exponent);
    clamp_percent(risk_fraction * 100.0)
}

/// Clamp a raw percentage into the closed interval [0, 100].
///
/// NaN would otherwise survive `f64::clamp`; it maps to 100.
pub fn clamp_percent(raw: f64) -> f64 {
    if raw.is_nan() {
        return 100.0;
    }
    raw.clamp(0.0, 100.0)
}
