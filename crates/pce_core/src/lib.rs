#![forbid(unsafe_code)]

pub mod coefficients;
pub mod engine;
pub mod fingerprint;
pub mod profile;
