//! Published coefficient sets for the 2013 Pooled Cohort Equations.

pub mod table;

pub use table::{CoefficientSet, coefficient_set};
