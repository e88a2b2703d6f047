//! Rounding policy shared by the emission and credit calculations.
//!
//! Emission masses and currency amounts round half-up at the 2nd decimal;
//! carbon credits round at the 4th, since credit fractions stay meaningful at
//! small scale.

/// Round half-up to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round half-up to four decimal places.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
