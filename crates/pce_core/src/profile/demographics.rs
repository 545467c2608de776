//! Demographic cohort selection.
//!
//! The 2013 Pooled Cohort Equations define coefficient sets for exactly four
//! cohorts keyed by sex and race. "Other" race is an alias for the
//! white/other coefficient set; the published model has no separate
//! coefficients for other ancestries.

use crate::profile::invalid::{InputField, InvalidInput};

/// Patient sex as recognized by the published model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    /// Parse a caller-supplied value. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, InvalidInput> {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(InvalidInput::UnknownEnumValue {
                field: InputField::Sex,
                value: value.to_string(),
            }),
        }
    }
}

/// Patient race as accepted at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    White,
    Black,
    Other,
}

impl Race {
    pub fn as_str(self) -> &'static str {
        match self {
            Race::White => "white",
            Race::Black => "black",
            Race::Other => "other",
        }
    }

    /// Parse a caller-supplied value. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, InvalidInput> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Race::White),
            "black" => Ok(Race::Black),
            "other" => Ok(Race::Other),
            _ => Err(InvalidInput::UnknownEnumValue {
                field: InputField::Race,
                value: value.to_string(),
            }),
        }
    }

    /// Resolve to the race axis of the coefficient table.
    /// `Other` uses the white/other coefficients.
    pub fn resolve(self) -> ResolvedRace {
        match self {
            Race::White | Race::Other => ResolvedRace::White,
            Race::Black => ResolvedRace::Black,
        }
    }
}

/// Race after other→white aliasing: the coefficient-table axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedRace {
    White,
    Black,
}

impl ResolvedRace {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedRace::White => "white",
            ResolvedRace::Black => "black",
        }
    }
}

/// Key selecting one of the four published coefficient sets.
///
/// Every `RiskInput` resolves to exactly one key; after aliasing the
/// 2 × 2 grid is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CohortKey {
    pub sex: Sex,
    pub race: ResolvedRace,
}

impl CohortKey {
    /// Build a key from boundary-level demographics, applying aliasing.
    pub fn new(sex: Sex, race: Race) -> Self {
        Self {
            sex,
            race: race.resolve(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match (self.sex, self.race) {
            (Sex::Female, ResolvedRace::White) => "female/white",
            (Sex::Female, ResolvedRace::Black) => "female/black",
            (Sex::Male, ResolvedRace::White) => "male/white",
            (Sex::Male, ResolvedRace::Black) => "male/black",
        }
    }
}

/// All four cohorts, for exhaustive iteration in tests.
pub const COHORT_REGISTRY: &[CohortKey] = &[
    CohortKey {
        sex: Sex::Female,
        race: ResolvedRace::White,
    },
    CohortKey {
        sex: Sex::Female,
        race: ResolvedRace::Black,
    },
    CohortKey {
        sex: Sex::Male,
        race: ResolvedRace::White,
    },
    CohortKey {
        sex: Sex::Male,
        race: ResolvedRace::Black,
    },
];
