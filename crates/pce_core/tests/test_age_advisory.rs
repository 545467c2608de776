//! Out-of-validated-age-range advisory: compute regardless, warn separately.

mod common;

use common::{assert_close, reference_input};
use pce_core::engine::compute_risk;
use pce_core::profile::{Race, RiskInput, Sex};

fn at_age(age_years: f64) -> RiskInput {
    let mut input = reference_input(Sex::Female, Race::White);
    input.age_years = age_years;
    input
}

// ─── Inside the validated range ─────────────────────────────────────────

#[test]
fn test_range_endpoints_are_not_flagged() {
    assert!(!compute_risk(&at_age(40.0)).unwrap().outside_validated_age_range);
    assert!(!compute_risk(&at_age(79.0)).unwrap().outside_validated_age_range);
    assert!(!compute_risk(&at_age(55.0)).unwrap().outside_validated_age_range);
}

// ─── Outside the validated range ────────────────────────────────────────

#[test]
fn test_younger_than_forty_is_flagged_but_computed() {
    let input = RiskInput {
        age_years: 39.0,
        sex: Sex::Female,
        race: Race::White,
        total_cholesterol: 180.0,
        hdl_cholesterol: 60.0,
        systolic_bp: 110.0,
        on_bp_treatment: false,
        smoker: false,
        diabetic: false,
    };
    let assessment = compute_risk(&input).unwrap();
    assert!(assessment.outside_validated_age_range);
    assert_close(assessment.risk_percent, 0.271376017003655);
}

#[test]
fn test_older_than_seventy_nine_is_flagged_but_computed() {
    let mut input = reference_input(Sex::Male, Race::Black);
    input.age_years = 80.0;
    let assessment = compute_risk(&input).unwrap();
    assert!(assessment.outside_validated_age_range);
    assert_close(assessment.risk_percent, 14.617690674894423);
}

#[test]
fn test_advisory_is_not_a_failure() {
    // Advisory never turns into an error, however far out the age is.
    let assessment = compute_risk(&at_age(120.0)).unwrap();
    assert!(assessment.outside_validated_age_range);
    assert!(assessment.risk_percent >= 0.0 && assessment.risk_percent <= 100.0);
}
