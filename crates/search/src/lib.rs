//! Restaurant search for Nearbite.
//!
//! This crate provides the location-resolution-and-ranking pipeline:
//! - Free-text location resolution against an ordered gazetteer
//! - Attribute filtering (cuisine, minimum rating, price tier)
//! - Distance ranking with a bounded result size
//! - JSON record decoding and optional WASM bindings
//!
//! Every pipeline operation is total: unknown places fall back to the
//! default location, empty filter results are empty vectors, and
//! malformed coordinates surface as non-finite distances.
//!
//! # Example
//!
//! ```
//! use nearbite_search::{resolve_location, search, Restaurant, SearchCriteria};
//!
//! let restaurants = vec![
//!     Restaurant::new("1", "Pho Saigon", "Vietnamese", 4.5, "$", 29.7067, -95.5067),
//!     Restaurant::new("2", "Hugo's", "Mexican", 4.7, "$$$", 29.7425, -95.3889),
//! ];
//!
//! let origin = resolve_location("Bellaire Blvd, Chinatown");
//! let criteria = SearchCriteria::default().with_min_rating(4.0);
//! let ranked = search(&origin, &restaurants, Some(&criteria), 5);
//!
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].distance <= ranked[1].distance);
//! ```

pub mod gazetteer;
pub mod filter;
pub mod ranking;
pub mod records;
mod model;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use gazetteer::{resolve_location, Gazetteer, Resolution, DEFAULT_LOCATION};
pub use ranking::{search, search_address, search_coordinates, SearchRequest, DEFAULT_LIMIT};
pub use model::{RankedRestaurant, Restaurant, SearchCriteria, PRICE_TIERS};
pub use records::restaurants_from_json;
pub use error::{Result, SearchError, SearchErrorCode};

pub use nearbite_geo::{distance_km, format_distance, Coordinate};
