//! `rn-spatial`: snapping query points onto road segments.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`mercator`]   | `Mercator` trait, `WebMercator`, `Equirectangular`         |
//! | [`projection`] | `Projector`, `PerpendicularProjection`, free functions     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod mercator;
pub mod projection;


pub use mercator::{Equirectangular, Mercator, WebMercator};
pub use projection::{
    PerpendicularProjection, Projector, ordered_perpendicular_distance, perpendicular_distance,
    project,
};
