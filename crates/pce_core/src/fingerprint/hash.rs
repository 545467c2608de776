//! Stable xxhash64 fingerprint over the canonical input fields.
//!
//! No timestamps and no derived values participate: identical inputs always
//! produce identical fingerprints. The fingerprint identifies the request as
//! submitted, so `race=other` and `race=white` hash differently even though
//! they score identically.

use xxhash_rust::xxh64::xxh64;

use crate::profile::RiskInput;

/// Compute a stable fingerprint of one input record.
pub fn compute_input_fingerprint(input: &RiskInput) -> u64 {
    // Separator byte 0xFF cannot appear in UTF-8 strings, preventing
    // field-boundary ambiguity. Floats enter via their bit pattern.
    let mut buf = Vec::with_capacity(64);

    buf.extend_from_slice(&input.age_years.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(input.sex.as_str().as_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(input.race.as_str().as_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&input.total_cholesterol.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&input.hdl_cholesterol.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.extend_from_slice(&input.systolic_bp.to_bits().to_le_bytes());
    buf.push(0xFF);
    buf.push(u8::from(input.on_bp_treatment));
    buf.push(u8::from(input.smoker));
    buf.push(u8::from(input.diabetic));

    xxh64(&buf, 0)
}

/// Format a fingerprint as a 16-character hex string.
pub fn format_fingerprint(hash: u64) -> String {
    format!("{hash:016x}")
}
