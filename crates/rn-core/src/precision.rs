//! Fixed-point scale shared by every coordinate producer and consumer.
//!
//! Latitude and longitude are stored as `degrees × COORDINATE_PRECISION`
//! rounded to `i32`.  With a scale of 1e6 one unit is ~0.11 m at the
//! equator, and ±180° fits comfortably in 28 bits.

/// Number of fixed-point units per degree.
pub const COORDINATE_PRECISION: f64 = 1_000_000.0;

/// Integer form of [`COORDINATE_PRECISION`] for range checks.
pub(crate) const PRECISION_UNITS: i32 = 1_000_000;

/// Degrees → fixed-point units, rounded to the nearest unit.
#[inline]
pub fn to_fixed(degrees: f64) -> i32 {
    (degrees * COORDINATE_PRECISION).round() as i32
}

/// Fixed-point units → degrees.
#[inline]
pub fn to_degrees(fixed: i32) -> f64 {
    f64::from(fixed) / COORDINATE_PRECISION
}
