//! Patient profile: demographic axes, the input record, and input rejection.

pub mod demographics;
pub mod input;
pub mod invalid;

pub use demographics::{COHORT_REGISTRY, CohortKey, Race, ResolvedRace, Sex};
pub use input::RiskInput;
pub use invalid::{InputField, InvalidInput};
