//! Text layout for coordinates.
//!
//! Geometry export writes each fixed-point field as a sign, the integer
//! degrees, and exactly six fractional digits: `13.388860`, `-0.500000`.
//! The widest valid value, `-180.000000`, is 11 characters.  Two joined
//! orders exist, `lon,lat` (GeoJSON-style) and `lat,lon`.

use std::fmt;

use crate::precision::PRECISION_UNITS;
use crate::{CoordError, CoordResult, Coordinate};

/// Render one fixed-point field with six fractional digits.
pub fn format_fixed(value: i32) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = i64::from(value).unsigned_abs();
    let units = PRECISION_UNITS as u64;
    format!("{sign}{}.{:06}", abs / units, abs % units)
}

/// Parse one field, rounding to the nearest fixed-point unit.
fn parse_fixed(text: &str) -> CoordResult<i32> {
    let text = text.trim();
    let degrees: f64 = text.parse().map_err(|source| CoordError::Number {
        value: text.to_owned(),
        source,
    })?;
    if !degrees.is_finite() {
        return Err(CoordError::NotFinite(text.to_owned()));
    }
    // Out-of-range degrees saturate in the cast and are rejected by is_valid.
    Ok(crate::precision::to_fixed(degrees))
}

fn split_pair(text: &str) -> CoordResult<(&str, &str)> {
    let mut parts = text.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(CoordError::Malformed(text.to_owned())),
    }
}

fn checked(lat: i32, lon: i32) -> CoordResult<Coordinate> {
    let coord = Coordinate::new(lat, lon);
    if coord.is_valid() {
        Ok(coord)
    } else {
        Err(CoordError::OutOfRange { lat, lon })
    }
}

impl Coordinate {
    /// `lon,lat`, e.g. `13.388860,52.517037`.
    pub fn to_lon_lat_string(self) -> String {
        format!("{},{}", format_fixed(self.lon), format_fixed(self.lat))
    }

    /// `lat,lon`, e.g. `52.517037,13.388860`.
    pub fn to_lat_lon_string(self) -> String {
        format!("{},{}", format_fixed(self.lat), format_fixed(self.lon))
    }

    /// Inverse of [`to_lon_lat_string`](Self::to_lon_lat_string).
    pub fn parse_lon_lat(text: &str) -> CoordResult<Coordinate> {
        let (lon, lat) = split_pair(text)?;
        checked(parse_fixed(lat)?, parse_fixed(lon)?)
    }

    /// Inverse of [`to_lat_lon_string`](Self::to_lat_lon_string).
    pub fn parse_lat_lon(text: &str) -> CoordResult<Coordinate> {
        let (lat, lon) = split_pair(text)?;
        checked(parse_fixed(lat)?, parse_fixed(lon)?)
    }
}

impl fmt::Display for Coordinate {
    /// `(lat,lon)` in degrees; the unset sentinel prints as `(unset)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return f.write_str("(unset)");
        }
        write!(f, "({},{})", format_fixed(self.lat), format_fixed(self.lon))
    }
}
