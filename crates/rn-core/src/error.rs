//! Coordinate error type.
//!
//! The geometry functions never fail (their preconditions are debug
//! assertions); only text parsing produces a `CoordError`.

use thiserror::Error;

/// Errors produced by `rn-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    #[error("expected two comma-separated values, got {0:?}")]
    Malformed(String),

    #[error("invalid number {value:?}: {source}")]
    Number {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("non-finite number {0:?}")]
    NotFinite(String),

    #[error("coordinate out of range: lat {lat}, lon {lon}")]
    OutOfRange { lat: i32, lon: i32 },
}

/// Shorthand result type for `rn-*` crates.
pub type CoordResult<T> = Result<T, CoordError>;
