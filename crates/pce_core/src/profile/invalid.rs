//! The engine's single recoverable error kind.
//!
//! `InvalidInput` covers (a) sex/race values outside the supported
//! enumerations and (b) non-positive values in log-transformed fields.
//! `Display` text is written to be surfaced verbatim to the end user.

use std::fmt;

/// Input field cited by an `InvalidInput` rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Age,
    Sex,
    Race,
    TotalCholesterol,
    HdlCholesterol,
    SystolicBp,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            InputField::Age => "age",
            InputField::Sex => "sex",
            InputField::Race => "race",
            InputField::TotalCholesterol => "total_cholesterol",
            InputField::HdlCholesterol => "hdl_cholesterol",
            InputField::SystolicBp => "systolic_bp",
        }
    }
}

/// Rejection raised synchronously at the point of computation.
///
/// No other failure mode exists: valid enumeration values with positive
/// log-domain fields always produce a result, however extreme.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// Sex or race value outside the supported enumeration.
    UnknownEnumValue { field: InputField, value: String },
    /// Log-transformed field holding a non-positive or non-finite value.
    NonPositive { field: InputField, value: f64 },
}

impl InvalidInput {
    /// The offending field.
    pub fn field(&self) -> InputField {
        match self {
            InvalidInput::UnknownEnumValue { field, .. } => *field,
            InvalidInput::NonPositive { field, .. } => *field,
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::UnknownEnumValue {
                field: InputField::Sex,
                value,
            } => {
                write!(f, "sex must be 'male' or 'female' (got '{value}')")
            }
            InvalidInput::UnknownEnumValue {
                field: InputField::Race,
                value,
            } => {
                write!(f, "race must be 'white', 'black', or 'other' (got '{value}')")
            }
            InvalidInput::UnknownEnumValue { field, value } => {
                write!(f, "'{}' is not a valid {}", value, field.as_str())
            }
            InvalidInput::NonPositive { field, value } => {
                write!(
                    f,
                    "{} must be strictly positive (got {})",
                    field.as_str(),
                    value
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
