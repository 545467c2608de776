//! Category boundary semantics: lower bounds inclusive at 5 / 7.5 / 20.

mod common;

use common::reference_input;
use pce_core::engine::{
    BORDERLINE_MIN_PERCENT, HIGH_MIN_PERCENT, INTERMEDIATE_MIN_PERCENT, RiskCategory, compute_risk,
};
use pce_core::profile::{Race, Sex};

// ─── Threshold edges on the percentage directly ─────────────────────────

#[test]
fn test_boundary_values_land_in_upper_band() {
    assert_eq!(
        RiskCategory::from_percent(BORDERLINE_MIN_PERCENT),
        RiskCategory::Borderline
    );
    assert_eq!(
        RiskCategory::from_percent(INTERMEDIATE_MIN_PERCENT),
        RiskCategory::Intermediate
    );
    assert_eq!(RiskCategory::from_percent(HIGH_MIN_PERCENT), RiskCategory::High);
}

#[test]
fn test_values_just_below_boundaries_land_in_lower_band() {
    assert_eq!(RiskCategory::from_percent(4.999), RiskCategory::Low);
    assert_eq!(RiskCategory::from_percent(7.499), RiskCategory::Borderline);
    assert_eq!(RiskCategory::from_percent(19.999), RiskCategory::Intermediate);
}

#[test]
fn test_band_extremes() {
    assert_eq!(RiskCategory::from_percent(0.0), RiskCategory::Low);
    assert_eq!(RiskCategory::from_percent(100.0), RiskCategory::High);
}

#[test]
fn test_category_tokens() {
    let cases = [
        (RiskCategory::Low, "low"),
        (RiskCategory::Borderline, "borderline"),
        (RiskCategory::Intermediate, "intermediate"),
        (RiskCategory::High, "high"),
    ];
    for (category, token) in cases {
        assert_eq!(category.as_str(), token);
    }
}

// ─── Engine inputs straddling each band ─────────────────────────────────
//
// Male/white reference vitals with age swept across the bands:
// age 50 → 3.384%, age 55 → 5.384%, age 61 → 8.854%, age 77 → 25.611%.

#[test]
fn test_engine_output_lands_in_expected_band() {
    let cases = [
        (50.0, RiskCategory::Low),
        (55.0, RiskCategory::Borderline),
        (61.0, RiskCategory::Intermediate),
        (77.0, RiskCategory::High),
    ];
    for (age, expected) in cases {
        let mut input = reference_input(Sex::Male, Race::White);
        input.age_years = age;
        let assessment = compute_risk(&input).unwrap();
        assert_eq!(
            assessment.category, expected,
            "age {age} produced {:.3}%",
            assessment.risk_percent
        );
    }
}

#[test]
fn test_engine_category_always_matches_percentage() {
    for sex in [Sex::Female, Sex::Male] {
        for race in [Race::White, Race::Black] {
            for age in (40..=79).step_by(3) {
                let mut input = reference_input(sex, race);
                input.age_years = f64::from(age);
                let assessment = compute_risk(&input).unwrap();
                assert_eq!(
                    assessment.category,
                    RiskCategory::from_percent(assessment.risk_percent)
                );
            }
        }
    }
}

#[test]
fn test_categories_are_ordered() {
    assert!(RiskCategory::Low < RiskCategory::Borderline);
    assert!(RiskCategory::Borderline < RiskCategory::Intermediate);
    assert!(RiskCategory::Intermediate < RiskCategory::High);
}
