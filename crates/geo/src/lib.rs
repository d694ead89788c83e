//! Geospatial utilities for Nearbite.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Human-readable distance formatting
//! - Batch distance computation with optional parallelism
//!
//! Nothing here validates coordinate ranges. Out-of-range or non-finite
//! values produce a defined (if meaningless) number; callers that need
//! range checks use [`Coordinate::validated`].
//!
//! # Example
//!
//! ```
//! use nearbite_geo::{format_distance, haversine_distance, Coordinate};
//!
//! let san_francisco = Coordinate::new(37.7749, -122.4194);
//! let los_angeles = Coordinate::new(34.0522, -118.2437);
//!
//! let km = haversine_distance(&san_francisco, &los_angeles);
//! assert!(km > 550.0 && km < 570.0);
//! assert_eq!(format_distance(0.5), "500m");
//! ```

mod haversine;
mod format;
pub mod batch;
mod error;

use std::fmt;
use std::str::FromStr;

pub use haversine::{distance_km, haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use format::format_distance;
pub use batch::{calculate_distances, Located};
pub use error::{GeoError, GeoErrorCode, Result};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No range check is performed.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting values outside the valid ranges.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` (whitespace around either number is allowed).
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("expected 'lat,lng', got '{}'", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::InvalidCoordinate(format!("'{}': {}", part.trim(), e)))
        };

        Ok(Self::new(parse(lat)?, parse(lng)?))
    }
}
