//! Distance metrics between fixed-point coordinates.
//!
//! Two precisions on purpose:
//!
//! - [`approximate_distance`] is an `f64` Haversine, used where a distance is
//!   reported to a caller.
//! - [`approximate_euclidean_distance`] is an `f32` equirectangular
//!   approximation, used on the projection hot path.  Only accurate over
//!   short distances (segment snapping), not across continents.

use crate::Coordinate;
use crate::precision::COORDINATE_PRECISION;

/// Earth radius in metres used by both metrics.
///
/// Sits between the polar (6,356,750 m) and equatorial (6,378,137 m) radii.
pub const EARTH_RADIUS_M: f64 = 6_372_797.560856;

const DEG_TO_RAD: f64 = 0.017_453_292_519_943_295;

#[inline]
fn debug_assert_set(lat1: i32, lon1: i32, lat2: i32, lon2: i32) {
    debug_assert!(lat1 != i32::MIN, "unset latitude passed to distance");
    debug_assert!(lon1 != i32::MIN, "unset longitude passed to distance");
    debug_assert!(lat2 != i32::MIN, "unset latitude passed to distance");
    debug_assert!(lon2 != i32::MIN, "unset longitude passed to distance");
}

/// Haversine great-circle distance in metres.
#[inline]
pub fn approximate_distance(a: Coordinate, b: Coordinate) -> f64 {
    approximate_distance_raw(a.lat, a.lon, b.lat, b.lon)
}

/// [`approximate_distance`] over raw fixed-point fields.
///
/// Swapping the two points yields a bit-identical result: the deltas only
/// enter through `sin²` and the cosine product is commutative.
pub fn approximate_distance_raw(lat1: i32, lon1: i32, lat2: i32, lon2: i32) -> f64 {
    debug_assert_set(lat1, lon1, lat2, lon2);

    let lat1 = f64::from(lat1) / COORDINATE_PRECISION * DEG_TO_RAD;
    let lon1 = f64::from(lon1) / COORDINATE_PRECISION * DEG_TO_RAD;
    let lat2 = f64::from(lat2) / COORDINATE_PRECISION * DEG_TO_RAD;
    let lon2 = f64::from(lon2) / COORDINATE_PRECISION * DEG_TO_RAD;

    let d_lon = lon1 - lon2;
    let d_lat = lat1 - lat2;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Equirectangular distance in metres, single precision.
#[inline]
pub fn approximate_euclidean_distance(a: Coordinate, b: Coordinate) -> f32 {
    approximate_euclidean_distance_raw(a.lat, a.lon, b.lat, b.lon)
}

/// [`approximate_euclidean_distance`] over raw fixed-point fields.
///
/// The longitude delta is scaled by the cosine of the mean latitude, then
/// combined with the latitude delta by Pythagoras.
pub fn approximate_euclidean_distance_raw(lat1: i32, lon1: i32, lat2: i32, lon2: i32) -> f32 {
    debug_assert_set(lat1, lon1, lat2, lon2);

    let lat1 = (f64::from(lat1) / COORDINATE_PRECISION * DEG_TO_RAD) as f32;
    let lon1 = (f64::from(lon1) / COORDINATE_PRECISION * DEG_TO_RAD) as f32;
    let lat2 = (f64::from(lat2) / COORDINATE_PRECISION * DEG_TO_RAD) as f32;
    let lon2 = (f64::from(lon2) / COORDINATE_PRECISION * DEG_TO_RAD) as f32;

    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;
    (x * x + y * y).sqrt() * EARTH_RADIUS_M as f32
}
