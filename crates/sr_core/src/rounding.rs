//! Output rounding policy.
//!
//! Intermediate arithmetic stays in full `f64` precision; each money field
//! of a report entry is rounded exactly once, at report build. No per-line
//! or per-record rounding exists anywhere in the engine.

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
