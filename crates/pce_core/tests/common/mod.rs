#![allow(dead_code)]

//! Shared fixtures for engine tests.

use pce_core::profile::{Race, RiskInput, Sex};

/// Reference input: age 55, TC 213, HDL 50, SBP 120, all flags false.
pub fn reference_input(sex: Sex, race: Race) -> RiskInput {
    RiskInput {
        age_years: 55.0,
        sex,
        race,
        total_cholesterol: 213.0,
        hdl_cholesterol: 50.0,
        systolic_bp: 120.0,
        on_bp_treatment: false,
        smoker: false,
        diabetic: false,
    }
}

/// All-flags-on input: age 60, TC 240, HDL 45, SBP 140, treated, smoker,
/// diabetic.
pub fn loaded_input(sex: Sex, race: Race) -> RiskInput {
    RiskInput {
        age_years: 60.0,
        sex,
        race,
        total_cholesterol: 240.0,
        hdl_cholesterol: 45.0,
        systolic_bp: 140.0,
        on_bp_treatment: true,
        smoker: true,
        diabetic: true,
    }
}

/// Assert two percentages agree within relative tolerance 1e-9.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual {actual} differs from expected {expected} by more than {tolerance}"
    );
}
