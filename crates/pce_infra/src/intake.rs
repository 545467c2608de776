//! Intake boundary for presentation-layer callers.
//!
//! Pipeline: parse the JSON request, screen numeric fields against the
//! intake bounds, build a typed `RiskInput`, evaluate, and shape the result
//! into a `RiskReport`. Every error carries `Display` text meant to reach
//! the end user verbatim.

use std::fmt;

use serde::Deserialize;

use pce_core::engine::{EngineMetrics, compute_risk_with_metrics};
use pce_core::profile::{InvalidInput, Race, RiskInput, Sex};

use crate::config::IntakeBounds;
use crate::report::RiskReport;

/// Wire shape of one evaluation request.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub age_years: f64,
    pub sex: String,
    pub race: String,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub systolic_bp: f64,
    #[serde(default)]
    pub on_bp_treatment: bool,
    #[serde(default)]
    pub smoker: bool,
    #[serde(default)]
    pub diabetic: bool,
}

/// Intake failure surfaced to the caller.
#[derive(Debug)]
pub enum IntakeError {
    /// Request body is not valid JSON for the request shape.
    Malformed(serde_json::Error),
    /// Engine-level invalid input (unknown sex/race, non-positive field).
    Invalid(InvalidInput),
    /// Numeric field outside the configured intake bounds.
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Malformed(err) => write!(f, "malformed request: {err}"),
            IntakeError::Invalid(err) => write!(f, "invalid input: {err}"),
            IntakeError::OutOfBounds {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{field} {value} is outside the accepted range {min}-{max}"
                )
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Malformed(err) => Some(err),
            IntakeError::Invalid(err) => Some(err),
            IntakeError::OutOfBounds { .. } => None,
        }
    }
}

/// Parse a JSON request body.
pub fn parse_request(body: &str) -> Result<EvaluationRequest, IntakeError> {
    serde_json::from_str(body).map_err(IntakeError::Malformed)
}

/// Screen numeric fields against the intake bounds.
///
/// A well-behaved form cannot submit values outside its own widget ranges,
/// so anything out of bounds here is rejected outright.
pub fn screen_bounds(
    request: &EvaluationRequest,
    bounds: &IntakeBounds,
) -> Result<(), IntakeError> {
    let checks = [
        (
            "age_years",
            request.age_years,
            bounds.age_min_years,
            bounds.age_max_years,
        ),
        (
            "total_cholesterol",
            request.total_cholesterol,
            bounds.total_chol_min_mgdl,
            bounds.total_chol_max_mgdl,
        ),
        (
            "hdl_cholesterol",
            request.hdl_cholesterol,
            bounds.hdl_min_mgdl,
            bounds.hdl_max_mgdl,
        ),
        (
            "systolic_bp",
            request.systolic_bp,
            bounds.sbp_min_mmhg,
            bounds.sbp_max_mmhg,
        ),
    ];
    for (field, value, min, max) in checks {
        // NaN fails the containment check and is rejected here too.
        if !(min..=max).contains(&value) {
            return Err(IntakeError::OutOfBounds {
                field,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

/// Build a typed engine input from a parsed request.
pub fn build_input(request: &EvaluationRequest) -> Result<RiskInput, IntakeError> {
    let sex = Sex::parse(&request.sex).map_err(IntakeError::Invalid)?;
    let race = Race::parse(&request.race).map_err(IntakeError::Invalid)?;
    Ok(RiskInput {
        age_years: request.age_years,
        sex,
        race,
        total_cholesterol: request.total_cholesterol,
        hdl_cholesterol: request.hdl_cholesterol,
        systolic_bp: request.systolic_bp,
        on_bp_treatment: request.on_bp_treatment,
        smoker: request.smoker,
        diabetic: request.diabetic,
    })
}

/// Full intake pipeline for one request body.
pub fn evaluate_request(
    body: &str,
    bounds: &IntakeBounds,
    metrics: &mut EngineMetrics,
) -> Result<RiskReport, IntakeError> {
    let request = parse_request(body)?;
    screen_bounds(&request, bounds)?;
    let input = build_input(&request)?;
    let assessment = compute_risk_with_metrics(&input, metrics).map_err(IntakeError::Invalid)?;
    Ok(RiskReport::from_assessment(&input, &assessment))
}
