//! Fixed-point geographic coordinate.
//!
//! `Coordinate` stores latitude and longitude as integers scaled by
//! [`COORDINATE_PRECISION`](crate::COORDINATE_PRECISION).  Integer storage
//! keeps node positions compact and makes equality exact, which the
//! projection code relies on for its degenerate-segment tie-break.
//!
//! A default-constructed coordinate is *unset*: both fields hold `i32::MIN`.
//! Unset coordinates must be filtered out by callers before they reach the
//! distance, bearing, or projection functions; those functions only check
//! this with `debug_assert!`.

use crate::precision::{PRECISION_UNITS, to_degrees, to_fixed};

/// A WGS-84 position in fixed-point degrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: i32,
    pub lon: i32,
}

impl Coordinate {
    /// Sentinel meaning "no position": both fields equal `i32::MIN`.
    pub const UNSET: Coordinate = Coordinate { lat: i32::MIN, lon: i32::MIN };

    /// Construct from fixed-point values.
    ///
    /// In debug builds a field wider than 30 bits of magnitude is logged at
    /// `debug` level.  The value is still accepted; use
    /// [`is_valid`](Self::is_valid) to reject it.
    pub fn new(lat: i32, lon: i32) -> Self {
        if cfg!(debug_assertions) {
            if lat.unsigned_abs() >> 30 != 0 {
                tracing::debug!(lat, bits = %format!("{lat:032b}"), "broken lat");
            }
            if lon.unsigned_abs() >> 30 != 0 {
                tracing::debug!(lon, bits = %format!("{lon:032b}"), "broken lon");
            }
        }
        Self { lat, lon }
    }

    /// Construct from floating-point degrees, rounding to the nearest unit.
    #[inline]
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(to_fixed(lat), to_fixed(lon))
    }

    #[inline]
    pub fn lat_degrees(self) -> f64 {
        to_degrees(self.lat)
    }

    #[inline]
    pub fn lon_degrees(self) -> f64 {
        to_degrees(self.lon)
    }

    /// `false` only for the [`UNSET`](Self::UNSET) sentinel.
    ///
    /// A coordinate with just one field at `i32::MIN` reports set, yet the
    /// distance functions still reject it in debug builds: they check each
    /// field on its own.  It is never [valid](Self::is_valid) either.
    #[inline]
    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }

    /// Bounds check: `|lat| ≤ 90°` and `|lon| ≤ 180°`.
    ///
    /// Does not consult [`is_set`](Self::is_set), though the sentinel is
    /// out of range and therefore never valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90 * PRECISION_UNITS..=90 * PRECISION_UNITS).contains(&self.lat)
            && (-180 * PRECISION_UNITS..=180 * PRECISION_UNITS).contains(&self.lon)
    }

    /// Restore the unset sentinel.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::UNSET;
    }
}

impl Default for Coordinate {
    /// Returns the `UNSET` sentinel so uninitialized coordinates are visibly unset.
    #[inline]
    fn default() -> Self {
        Self::UNSET
    }
}
