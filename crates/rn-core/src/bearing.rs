//! Initial compass bearing between two coordinates.
//!
//! Single precision, like the rest of the per-edge hot path.  Results are
//! degrees clockwise from north in `[0, 360)`.

use crate::Coordinate;

/// Initial bearing when travelling from `from` toward `to`.
pub fn bearing(from: Coordinate, to: Coordinate) -> f32 {
    debug_assert!(from.is_set() && to.is_set(), "unset coordinate passed to bearing");

    let d_lon = ((to.lon_degrees() - from.lon_degrees()) as f32).to_radians();
    let lat1 = (from.lat_degrees() as f32).to_radians();
    let lat2 = (to.lat_degrees() as f32).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Fold an angle into `[0, 360)`.
///
/// `atan2` output needs at most one wrap, but `x + 360.0` can round up to
/// exactly `360.0` for tiny negative `x`, so both directions are looped.
#[inline]
pub(crate) fn normalize_degrees(mut deg: f32) -> f32 {
    while deg < 0.0 {
        deg += 360.0;
    }
    while deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

impl Coordinate {
    /// Bearing from `other` toward `self`.
    #[inline]
    pub fn bearing_from(self, other: Coordinate) -> f32 {
        bearing(other, self)
    }
}
