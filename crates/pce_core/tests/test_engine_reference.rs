//! Pinned regression fixtures per cohort.
//!
//! Expected values were computed once from the published coefficients and
//! are held to relative tolerance 1e-9.

mod common;

use common::{assert_close, loaded_input, reference_input};
use pce_core::engine::{RiskCategory, compute_risk};
use pce_core::profile::{Race, Sex};

// ─── Reference input (55 / TC 213 / HDL 50 / SBP 120, no flags) ─────────

#[test]
fn test_reference_female_white() {
    let assessment = compute_risk(&reference_input(Sex::Female, Race::White)).unwrap();
    assert_close(assessment.risk_percent, 2.052229820249485);
}

#[test]
fn test_reference_female_black() {
    let assessment = compute_risk(&reference_input(Sex::Female, Race::Black)).unwrap();
    assert_close(assessment.risk_percent, 3.0263293443192563);
}

#[test]
fn test_reference_male_white() {
    // Low single digits, just over the 5% borderline threshold.
    let assessment = compute_risk(&reference_input(Sex::Male, Race::White)).unwrap();
    assert_close(assessment.risk_percent, 5.3844219979087065);
    assert_eq!(assessment.category, RiskCategory::Borderline);
}

#[test]
fn test_reference_male_black() {
    let assessment = compute_risk(&reference_input(Sex::Male, Race::Black)).unwrap();
    assert_close(assessment.risk_percent, 6.073437294492523);
}

// ─── Loaded input (60 / TC 240 / HDL 45 / SBP 140, treated+smoker+dm) ───

#[test]
fn test_loaded_fixtures_all_cohorts() {
    let cases = [
        (Sex::Female, Race::White, 25.692673087827323),
        (Sex::Female, Race::Black, 44.4875947836947),
        (Sex::Male, Race::White, 39.490826066897085),
        (Sex::Male, Race::Black, 45.96538307568305),
    ];
    for (sex, race, expected) in cases {
        let assessment = compute_risk(&loaded_input(sex, race)).unwrap();
        assert_close(assessment.risk_percent, expected);
    }
}

// ─── Cohort reported back to the caller ─────────────────────────────────

#[test]
fn test_assessment_reports_resolved_cohort() {
    let assessment = compute_risk(&reference_input(Sex::Female, Race::Other)).unwrap();
    assert_eq!(assessment.cohort.as_str(), "female/white");
}
