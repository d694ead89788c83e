//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes. It is valid everywhere on
//! the globe, including across the antimeridian and at the poles.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers. Identical points yield exactly `0.0`; non-finite
/// inputs yield a non-finite result.
///
/// # Example
/// ```
/// use nearbite_geo::{haversine_distance, Coordinate};
///
/// let houston = Coordinate::new(29.7604, -95.3698);
/// let galleria = Coordinate::new(29.7389, -95.4619);
///
/// let distance = haversine_distance(&houston, &galleria);
/// assert!(distance > 8.0 && distance < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Flat-argument form of [`haversine_distance`], in kilometers.
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    // Differences are taken in degrees first so that a == b gives exactly 0.
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    // Rounding can push `a` just past 1 for near-antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}
