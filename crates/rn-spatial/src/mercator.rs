//! Latitude ↔ planar-y helpers used by the projection code.
//!
//! Both directions work in degrees: `lat_to_y` maps a latitude to a
//! Mercator ordinate scaled so that it is comparable with longitude degrees
//! (`y ≈ lat` near the equator).  Longitude needs no transform.
//!
//! Implementations must be pure; [`Projector`](crate::Projector) calls them
//! from any thread without synchronisation.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use rn_core::COORDINATE_PRECISION;

/// Forward/inverse latitude projection.
pub trait Mercator {
    /// Latitude in degrees → planar ordinate.
    fn lat_to_y(&self, lat: f64) -> f64;

    /// Planar ordinate → latitude in degrees.
    fn y_to_lat(&self, y: f64) -> f64;
}

/// Largest latitude fed to the forward map: a tenth of a fixed-point unit
/// short of the pole.
///
/// Every distinct fixed-point latitude still maps to a distinct ordinate;
/// only ±90° itself is pulled in.
pub const MAX_MERCATOR_LAT: f64 = 90.0 - 0.1 / COORDINATE_PRECISION;

/// Spherical Mercator in degree units.
///
/// The poles map to large finite ordinates (about ±1195) instead of ±∞.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebMercator;

impl Mercator for WebMercator {
    #[inline]
    fn lat_to_y(&self, lat: f64) -> f64 {
        let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln().to_degrees()
    }

    #[inline]
    fn y_to_lat(&self, y: f64) -> f64 {
        (2.0 * y.to_radians().exp().atan() - FRAC_PI_2).to_degrees()
    }
}

/// Identity projection (plate carrée).
///
/// Treats latitude degrees as the planar ordinate.  Useful as a mock when
/// checking projection geometry without Mercator stretch.
#[derive(Copy, Clone, Debug, Default)]
pub struct Equirectangular;

impl Mercator for Equirectangular {
    #[inline]
    fn lat_to_y(&self, lat: f64) -> f64 {
        lat
    }

    #[inline]
    fn y_to_lat(&self, y: f64) -> f64 {
        y
    }
}

impl<M: Mercator + ?Sized> Mercator for &M {
    #[inline]
    fn lat_to_y(&self, lat: f64) -> f64 {
        (**self).lat_to_y(lat)
    }

    #[inline]
    fn y_to_lat(&self, y: f64) -> f64 {
        (**self).y_to_lat(y)
    }
}
