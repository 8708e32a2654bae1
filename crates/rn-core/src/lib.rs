//! `rn-core`: fixed-point coordinates and the geometry that needs no map
//! projection.
//!
//! This crate is a dependency of `rn-spatial`.  It has no `rn-*`
//! dependencies and minimal external ones (`thiserror` and `tracing`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`precision`]   | `COORDINATE_PRECISION`, degree ↔ fixed conversion     |
//! | [`coordinate`]  | `Coordinate` (fixed-point lat/lon, `UNSET` sentinel)  |
//! | [`distance`]    | Haversine and equirectangular distance                |
//! | [`bearing`]     | Initial compass bearing                               |
//! | [`format`]      | `lon,lat` / `lat,lon` text layout and parsing         |
//! | [`error`]       | `CoordError`, `CoordResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Coordinate`.            |

pub mod bearing;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod format;
pub mod precision;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bearing::bearing;
pub use coordinate::Coordinate;
pub use distance::{
    EARTH_RADIUS_M, approximate_distance, approximate_distance_raw,
    approximate_euclidean_distance, approximate_euclidean_distance_raw,
};
pub use error::{CoordError, CoordResult};
pub use format::format_fixed;
pub use precision::COORDINATE_PRECISION;
