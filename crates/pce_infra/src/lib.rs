#![forbid(unsafe_code)]

pub mod config;
pub mod intake;
pub mod report;
