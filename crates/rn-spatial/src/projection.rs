//! Perpendicular projection of a query point onto a road segment.
//!
//! # Planar frame
//!
//! Each call maps the segment and query into a local plane: longitude
//! degrees on the x axis, Mercator ordinate (see [`Mercator`]) on the y axis,
//! both measured from the segment source.  The offsets are formed in `f64`
//! and then narrowed, so the projection itself runs in `f32` without losing
//! the precision that absolute degree values would eat.
//!
//! In that frame the source sits at the origin and the target at `(c, d)`.
//! The foot of the perpendicular `(p, q)` comes from the point-to-line
//! projection formula, with a dedicated branch for vertical segments.
//!
//! # Ratio policy
//!
//! `ratio` is the position of the foot along the segment: 0 at the source,
//! 1 at the target.  It is measured along whichever planar axis the segment
//! spans more of.  Coincident endpoints give `0/0` or `x/0`; that never
//! escapes as NaN; the ratio becomes 1 if the query equals the *target*
//! exactly, else 0.  Values within `f32::EPSILON` of 0 or 1 snap to it.
//!
//! # Ordered approximation
//!
//! [`Projector::ordered_perpendicular_distance`] returns the integer norm of
//! the fixed-point delta to the clamped foot.  It is not a distance in any
//! unit; longitude is not scaled by latitude.  For points tested against the
//! same segment it ranks candidates like
//! [`Projector::perpendicular_distance`] does, up to that scaling: two
//! candidates are ordered correctly once their true distances differ by more
//! than a factor of `1 / cos(lat)`.  Near the equator that is exact ranking;
//! at 60° it takes a factor of 2.

use rn_core::precision::to_fixed;
use rn_core::{COORDINATE_PRECISION, Coordinate, approximate_euclidean_distance};

use crate::mercator::{Mercator, WebMercator};

/// Foot offsets below one fixed-point unit (in degrees) are zeroed.
const OFFSET_SNAP: f32 = (1.0 / COORDINATE_PRECISION) as f32;

/// Result of [`Projector::project`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerpendicularProjection {
    /// Equirectangular distance in metres from the query to `nearest`.
    pub distance: f32,
    /// Closest point on the segment.
    pub nearest: Coordinate,
    /// Position of `nearest` along the segment, in `[0, 1]`.
    pub ratio: f32,
}

// ── Planar frame ──────────────────────────────────────────────────────────────

/// Query `(x, y)` and target `(c, d)` relative to the source at the origin.
struct Planar {
    x0: f64,
    y0: f64,
    x: f32,
    y: f32,
    c: f32,
    d: f32,
}

/// Foot of the perpendicular plus its offset from the source along the
/// segment's dominant axis and the segment's extent on that axis.
struct Foot {
    p: f32,
    q: f32,
    offset: f32,
    span: f32,
}

impl Planar {
    /// `vertical_eps` is the largest x extent still treated as vertical.
    fn foot(&self, vertical_eps: f32) -> Foot {
        let Planar { x, y, c, d, .. } = *self;
        if c.abs() > vertical_eps {
            if c.abs() >= d.abs() {
                let m = d / c;
                let p = (x + m * y) / (1.0 + m * m);
                let q = m * p;
                Foot { p, q, offset: p, span: c }
            } else {
                // Steep: project along y so the slope stays within ±1.
                let k = c / d;
                let q = (y + k * x) / (1.0 + k * k);
                let p = k * q;
                Foot { p, q, offset: q, span: d }
            }
        } else {
            Foot { p: c, q: y, offset: y, span: d }
        }
    }
}

#[inline]
fn degenerate_ratio(point: Coordinate, target: Coordinate) -> f32 {
    // Only equality with the target counts.
    let ratio = if point == target { 1.0 } else { 0.0 };
    tracing::trace!(%point, %target, ratio, "zero-length segment");
    ratio
}

// ── Projector ─────────────────────────────────────────────────────────────────

/// Segment projection parameterised by the latitude projection.
///
/// Stateless apart from the injected [`Mercator`]; share one instance freely
/// across threads.
///
/// # Example
///
/// ```
/// use rn_core::Coordinate;
/// use rn_spatial::{Projector, WebMercator};
///
/// let projector = Projector::new(WebMercator);
/// let source = Coordinate::new(0, 0);
/// let target = Coordinate::new(0, 1_000_000);
/// let hit = projector.project(source, target, Coordinate::new(0, 500_000));
/// assert!((hit.ratio - 0.5).abs() < 1e-6);
/// assert_eq!(hit.nearest, Coordinate::new(0, 500_000));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Projector<M = WebMercator> {
    mercator: M,
}

impl<M> Projector<M> {
    pub const fn new(mercator: M) -> Self {
        Self { mercator }
    }

    pub fn mercator(&self) -> &M {
        &self.mercator
    }
}

impl<M: Mercator> Projector<M> {
    fn planar(&self, point: Coordinate, source: Coordinate, target: Coordinate) -> Planar {
        let x0 = source.lon_degrees();
        let y0 = self.mercator.lat_to_y(source.lat_degrees());
        let relative = |c: Coordinate| {
            (
                (c.lon_degrees() - x0) as f32,
                (self.mercator.lat_to_y(c.lat_degrees()) - y0) as f32,
            )
        };
        let (x, y) = relative(point);
        let (c, d) = relative(target);
        Planar { x0, y0, x, y, c, d }
    }

    /// Back from the planar frame to fixed-point degrees, kept inside the
    /// segment's bounding box.
    fn unproject(
        &self,
        planar: &Planar,
        foot: &Foot,
        source: Coordinate,
        target: Coordinate,
    ) -> Coordinate {
        let lat = to_fixed(self.mercator.y_to_lat(planar.y0 + f64::from(foot.q)));
        let lon = to_fixed(planar.x0 + f64::from(foot.p));
        Coordinate::new(
            lat.clamp(source.lat.min(target.lat), source.lat.max(target.lat)),
            lon.clamp(source.lon.min(target.lon), source.lon.max(target.lon)),
        )
    }

    /// Distance in metres from `point` to the closest point of the segment.
    ///
    /// All three coordinates must be set (checked in debug builds).  Unlike
    /// [`project`](Self::project), the query is not required to be valid.
    #[inline]
    pub fn perpendicular_distance(
        &self,
        point: Coordinate,
        source: Coordinate,
        target: Coordinate,
    ) -> f32 {
        debug_assert!(
            source.is_set() && target.is_set() && point.is_set(),
            "unset coordinate passed to perpendicular_distance"
        );
        self.solve(source, target, point).distance
    }

    /// Closest point on `source → target` to `point`, its distance, and its
    /// position along the segment.
    ///
    /// All three coordinates must be set and `point` must be valid; both are
    /// checked only in debug builds.
    pub fn project(
        &self,
        source: Coordinate,
        target: Coordinate,
        point: Coordinate,
    ) -> PerpendicularProjection {
        debug_assert!(
            source.is_set() && target.is_set() && point.is_set(),
            "unset coordinate passed to project"
        );
        debug_assert!(point.is_valid(), "query {point} out of range");
        self.solve(source, target, point)
    }

    fn solve(
        &self,
        source: Coordinate,
        target: Coordinate,
        point: Coordinate,
    ) -> PerpendicularProjection {
        let planar = self.planar(point, source, target);
        let foot = planar.foot(f32::EPSILON);

        let mut offset = foot.offset;
        if offset.abs() < OFFSET_SNAP {
            offset = 0.0;
        }

        let mut ratio = offset / foot.span;
        if !ratio.is_finite() {
            ratio = degenerate_ratio(point, target);
        } else if ratio.abs() <= f32::EPSILON {
            ratio = 0.0;
        } else if (ratio - 1.0).abs() <= f32::EPSILON {
            ratio = 1.0;
        }

        let nearest = if ratio <= 0.0 {
            source
        } else if ratio >= 1.0 {
            target
        } else {
            self.unproject(&planar, &foot, source, target)
        };
        debug_assert!(nearest.is_valid(), "projection of {point} left the globe: {nearest}");

        let distance = approximate_euclidean_distance(point, nearest);
        debug_assert!(distance >= 0.0);

        PerpendicularProjection {
            distance,
            nearest,
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    /// Integer ranking key for `point` against `source → target`.
    ///
    /// Cheaper than [`perpendicular_distance`](Self::perpendicular_distance)
    /// and only meaningful when compared with other keys for the same
    /// segment.
    pub fn ordered_perpendicular_distance(
        &self,
        point: Coordinate,
        source: Coordinate,
        target: Coordinate,
    ) -> i32 {
        debug_assert!(
            source.is_set() && target.is_set() && point.is_set(),
            "unset coordinate passed to ordered_perpendicular_distance"
        );

        let planar = self.planar(point, source, target);
        let foot = planar.foot(0.0);

        let mut ratio = foot.offset / foot.span;
        if !ratio.is_finite() {
            ratio = degenerate_ratio(point, target);
        }

        let nearest = if ratio <= 0.0 {
            source
        } else if ratio >= 1.0 {
            target
        } else {
            self.unproject(&planar, &foot, source, target)
        };

        let dx = i64::from(point.lon) - i64::from(nearest.lon);
        let dy = i64::from(point.lat) - i64::from(nearest.lat);
        ((dx * dx + dy * dy) as f64).sqrt() as i32
    }
}

// ── Free functions (spherical Mercator) ───────────────────────────────────────

const WEB_MERCATOR: Projector<WebMercator> = Projector::new(WebMercator);

/// [`Projector::perpendicular_distance`] with [`WebMercator`].
#[inline]
pub fn perpendicular_distance(point: Coordinate, source: Coordinate, target: Coordinate) -> f32 {
    WEB_MERCATOR.perpendicular_distance(point, source, target)
}

/// [`Projector::project`] with [`WebMercator`].
#[inline]
pub fn project(source: Coordinate, target: Coordinate, point: Coordinate) -> PerpendicularProjection {
    WEB_MERCATOR.project(source, target, point)
}

/// [`Projector::ordered_perpendicular_distance`] with [`WebMercator`].
#[inline]
pub fn ordered_perpendicular_distance(
    point: Coordinate,
    source: Coordinate,
    target: Coordinate,
) -> i32 {
    WEB_MERCATOR.ordered_perpendicular_distance(point, source, target)
}
