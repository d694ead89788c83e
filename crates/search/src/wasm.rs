//! WASM bindings for the search pipeline.
//!
//! Records cross the boundary as JSON strings, the same shape the data
//! files use.

use crate::{RankedRestaurant, SearchCriteria};
use nearbite_geo::Coordinate;
use wasm_bindgen::prelude::*;

/// Great-circle distance in kilometers.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    nearbite_geo::distance_km(lat1, lng1, lat2, lng2)
}

/// Render kilometers for display ("500m", "1.0 km").
#[wasm_bindgen]
pub fn format_km(km: f64) -> String {
    nearbite_geo::format_distance(km)
}

/// Resolve free text to `{"latitude": .., "longitude": ..}`.
#[wasm_bindgen]
pub fn resolve_location(text: &str) -> String {
    let coord = crate::resolve_location(text);
    serde_json::json!({
        "latitude": coord.latitude,
        "longitude": coord.longitude
    })
    .to_string()
}

/// Rank restaurants around an origin.
///
/// # Arguments
/// * `origin_lat` / `origin_lng` - Search origin
/// * `restaurants_json` - `[...]` or `{"restaurants": [...]}`
/// * `criteria_json` - Optional `{"cuisine", "minRating", "priceRange"}`
/// * `limit` - Result cap; zero or negative returns nothing
///
/// # Returns
/// JSON array of restaurants with an added `distance` field
#[wasm_bindgen]
pub fn search_restaurants(
    origin_lat: f64,
    origin_lng: f64,
    restaurants_json: &str,
    criteria_json: Option<String>,
    limit: i32,
) -> Result<String, JsValue> {
    let restaurants = crate::restaurants_from_json(restaurants_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let criteria: Option<SearchCriteria> = criteria_json
        .as_deref()
        .map(serde_json::from_str::<SearchCriteria>)
        .transpose()
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let limit = usize::try_from(limit).unwrap_or(0);
    let ranked: Vec<RankedRestaurant> = crate::search(
        &Coordinate::new(origin_lat, origin_lng),
        &restaurants,
        criteria.as_ref(),
        limit,
    );

    serde_json::to_string(&ranked)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
