//! Intake bounds configuration.
//!
//! The presentation layer collects vitals through bounded form inputs; the
//! intake boundary screens requests against the same ranges. Every bound has
//! a built-in default; an explicit override wins, and invalid override
//! values fail-closed rather than widen the screen.

use std::fmt;

use serde::Deserialize;

/// Configurable intake bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsParam {
    AgeMinYears,
    AgeMaxYears,
    TotalCholMinMgdl,
    TotalCholMaxMgdl,
    HdlMinMgdl,
    HdlMaxMgdl,
    SbpMinMmhg,
    SbpMaxMmhg,
}

/// Error when a bound cannot be resolved to a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' rejected ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for ConfigError {}

/// Built-in default for a bound parameter (the standard intake form ranges).
pub fn bounds_default(param: BoundsParam) -> f64 {
    match param {
        BoundsParam::AgeMinYears => 20.0,
        BoundsParam::AgeMaxYears => 90.0,
        BoundsParam::TotalCholMinMgdl => 100.0,
        BoundsParam::TotalCholMaxMgdl => 400.0,
        BoundsParam::HdlMinMgdl => 10.0,
        BoundsParam::HdlMaxMgdl => 150.0,
        BoundsParam::SbpMinMmhg => 80.0,
        BoundsParam::SbpMaxMmhg => 250.0,
    }
}

/// Snake_case name for a bound parameter (matches the override file keys).
pub fn param_name(param: BoundsParam) -> &'static str {
    match param {
        BoundsParam::AgeMinYears => "age_min_years",
        BoundsParam::AgeMaxYears => "age_max_years",
        BoundsParam::TotalCholMinMgdl => "total_chol_min_mgdl",
        BoundsParam::TotalCholMaxMgdl => "total_chol_max_mgdl",
        BoundsParam::HdlMinMgdl => "hdl_min_mgdl",
        BoundsParam::HdlMaxMgdl => "hdl_max_mgdl",
        BoundsParam::SbpMinMmhg => "sbp_min_mmhg",
        BoundsParam::SbpMaxMmhg => "sbp_max_mmhg",
    }
}

/// Expected number of BoundsParam variants. Update when adding variants so
/// the completeness test catches a missing ALL_PARAMS entry.
pub const EXPECTED_PARAM_COUNT: usize = 8;

/// All known `BoundsParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[BoundsParam] = &[
    BoundsParam::AgeMinYears,
    BoundsParam::AgeMaxYears,
    BoundsParam::TotalCholMinMgdl,
    BoundsParam::TotalCholMaxMgdl,
    BoundsParam::HdlMinMgdl,
    BoundsParam::HdlMaxMgdl,
    BoundsParam::SbpMinMmhg,
    BoundsParam::SbpMaxMmhg,
];

/// Resolve one bound with fail-closed semantics.
///
/// - `Some(v)` with a finite, positive value wins over the default.
/// - `Some(v)` with a non-finite or non-positive value is an error.
/// - `None` falls back to the built-in default.
pub fn resolve_bounds_value(param: BoundsParam, value: Option<f64>) -> Result<f64, ConfigError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(ConfigError {
                param_name: param_name(param),
                reason: "value is non-finite (NaN or Infinity)",
            });
        }
        if v <= 0.0 {
            return Err(ConfigError {
                param_name: param_name(param),
                reason: "value must be strictly positive",
            });
        }
        return Ok(v);
    }
    Ok(bounds_default(param))
}

/// Partial override set, deserializable from a JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundsOverrides {
    pub age_min_years: Option<f64>,
    pub age_max_years: Option<f64>,
    pub total_chol_min_mgdl: Option<f64>,
    pub total_chol_max_mgdl: Option<f64>,
    pub hdl_min_mgdl: Option<f64>,
    pub hdl_max_mgdl: Option<f64>,
    pub sbp_min_mmhg: Option<f64>,
    pub sbp_max_mmhg: Option<f64>,
}

impl BoundsOverrides {
    fn value(&self, param: BoundsParam) -> Option<f64> {
        match param {
            BoundsParam::AgeMinYears => self.age_min_years,
            BoundsParam::AgeMaxYears => self.age_max_years,
            BoundsParam::TotalCholMinMgdl => self.total_chol_min_mgdl,
            BoundsParam::TotalCholMaxMgdl => self.total_chol_max_mgdl,
            BoundsParam::HdlMinMgdl => self.hdl_min_mgdl,
            BoundsParam::HdlMaxMgdl => self.hdl_max_mgdl,
            BoundsParam::SbpMinMmhg => self.sbp_min_mmhg,
            BoundsParam::SbpMaxMmhg => self.sbp_max_mmhg,
        }
    }
}

/// Resolved intake bounds, ready for request screening.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeBounds {
    pub age_min_years: f64,
    pub age_max_years: f64,
    pub total_chol_min_mgdl: f64,
    pub total_chol_max_mgdl: f64,
    pub hdl_min_mgdl: f64,
    pub hdl_max_mgdl: f64,
    pub sbp_min_mmhg: f64,
    pub sbp_max_mmhg: f64,
}

impl IntakeBounds {
    /// Bounds with every parameter at its built-in default.
    pub fn defaults() -> Self {
        Self {
            age_min_years: bounds_default(BoundsParam::AgeMinYears),
            age_max_years: bounds_default(BoundsParam::AgeMaxYears),
            total_chol_min_mgdl: bounds_default(BoundsParam::TotalCholMinMgdl),
            total_chol_max_mgdl: bounds_default(BoundsParam::TotalCholMaxMgdl),
            hdl_min_mgdl: bounds_default(BoundsParam::HdlMinMgdl),
            hdl_max_mgdl: bounds_default(BoundsParam::HdlMaxMgdl),
            sbp_min_mmhg: bounds_default(BoundsParam::SbpMinMmhg),
            sbp_max_mmhg: bounds_default(BoundsParam::SbpMaxMmhg),
        }
    }

    /// Resolve overrides into concrete bounds.
    ///
    /// Each min/max pair must stay strictly ordered after overrides.
    pub fn resolve(overrides: &BoundsOverrides) -> Result<Self, ConfigError> {
        let resolved = |param| resolve_bounds_value(param, overrides.value(param));

        let bounds = Self {
            age_min_years: resolved(BoundsParam::AgeMinYears)?,
            age_max_years: resolved(BoundsParam::AgeMaxYears)?,
            total_chol_min_mgdl: resolved(BoundsParam::TotalCholMinMgdl)?,
            total_chol_max_mgdl: resolved(BoundsParam::TotalCholMaxMgdl)?,
            hdl_min_mgdl: resolved(BoundsParam::HdlMinMgdl)?,
            hdl_max_mgdl: resolved(BoundsParam::HdlMaxMgdl)?,
            sbp_min_mmhg: resolved(BoundsParam::SbpMinMmhg)?,
            sbp_max_mmhg: resolved(BoundsParam::SbpMaxMmhg)?,
        };

        let pairs = [
            (
                bounds.age_min_years,
                bounds.age_max_years,
                param_name(BoundsParam::AgeMaxYears),
            ),
            (
                bounds.total_chol_min_mgdl,
                bounds.total_chol_max_mgdl,
                param_name(BoundsParam::TotalCholMaxMgdl),
            ),
            (
                bounds.hdl_min_mgdl,
                bounds.hdl_max_mgdl,
                param_name(BoundsParam::HdlMaxMgdl),
            ),
            (
                bounds.sbp_min_mmhg,
                bounds.sbp_max_mmhg,
                param_name(BoundsParam::SbpMaxMmhg),
            ),
        ];
        for (min, max, name) in pairs {
            if min >= max {
                return Err(ConfigError {
                    param_name: name,
                    reason: "min bound is not below max bound",
                });
            }
        }

        Ok(bounds)
    }
}
