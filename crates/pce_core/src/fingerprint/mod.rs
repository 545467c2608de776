//! Input fingerprinting for audit logs and caller-side deduplication.

pub mod hash;

pub use hash::{compute_input_fingerprint, format_fingerprint};
