//! Ordinal risk categories for clinical communication.
//!
//! Bands over the clamped percentage `r`:
//! - `r < 5` → Low
//! - `5 <= r < 7.5` → Borderline
//! - `7.5 <= r < 20` → Intermediate
//! - `r >= 20` → High

/// Lower bound of the Borderline band, in percent (inclusive).
pub const BORDERLINE_MIN_PERCENT: f64 = 5.0;
/// Lower bound of the Intermediate band, in percent (inclusive).
pub const INTERMEDIATE_MIN_PERCENT: f64 = 7.5;
/// Lower bound of the High band, in percent (inclusive).
pub const HIGH_MIN_PERCENT: f64 = 20.0;

/// Ordinal risk bucket derived from the clamped percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskCategory {
    Low,
    Borderline,
    Intermediate,
    High,
}

impl RiskCategory {
    /// Derive the category from a clamped percentage. Lower bounds are
    /// inclusive.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HIGH_MIN_PERCENT {
            RiskCategory::High
        } else if percent >= INTERMEDIATE_MIN_PERCENT {
            RiskCategory::Intermediate
        } else if percent >= BORDERLINE_MIN_PERCENT {
            RiskCategory::Borderline
        } else {
            RiskCategory::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Borderline => "borderline",
            RiskCategory::Intermediate => "intermediate",
            RiskCategory::High => "high",
        }
    }
}
