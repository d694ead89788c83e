//! Restaurant records, ranked results and search criteria.

use nearbite_geo::{Coordinate, Located};
use serde::{Deserialize, Serialize};

/// Price tiers used by the restaurant records, cheapest first.
pub const PRICE_TIERS: [&str; 4] = ["$", "$$", "$$$", "$$$$"];

/// A restaurant record as supplied by the data store.
///
/// Only `cuisine`, `rating`, `price_range` and the coordinates take part in
/// search; the remaining fields ride along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    /// 0.0 to 5.0
    pub rating: f64,
    /// One of [`PRICE_TIERS`]
    pub price_range: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 24-hour "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    /// 24-hour "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours_display: Option<String>,
}

impl Restaurant {
    /// Creates a record with only the searchable attributes set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        rating: f64,
        price_range: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            rating,
            price_range: price_range.into(),
            latitude,
            longitude,
            address: None,
            phone: None,
            description: None,
            opening_hours: None,
            closing_hours: None,
            operating_hours_display: None,
        }
    }
}

impl Located for Restaurant {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A restaurant annotated with its distance from the search origin.
///
/// Serializes as the restaurant's own fields plus `distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    /// Kilometers from the origin. Non-finite if the record's coordinates are.
    pub distance: f64,
}

impl RankedRestaurant {
    /// Distance rendered for display, e.g. `"850m"` or `"3.2 km"`.
    pub fn formatted_distance(&self) -> String {
        nearbite_geo::format_distance(self.distance)
    }
}

/// Optional attribute predicates, applied conjunctively.
///
/// Empty strings and a NaN rating count as absent, matching how a request
/// layer hands over blank query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Case-insensitive exact cuisine match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Keep restaurants with `rating >= min_rating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Exact price tier match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

impl SearchCriteria {
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        self.cuisine().is_none() && self.min_rating().is_none() && self.price_range().is_none()
    }

    /// Returns true if the restaurant satisfies every present predicate.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(cuisine) = self.cuisine() {
            if restaurant.cuisine.to_lowercase() != cuisine.to_lowercase() {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating() {
            // A NaN rating never passes
            let passes = restaurant.rating >= min_rating;
            if !passes {
                return false;
            }
        }
        if let Some(price_range) = self.price_range() {
            if restaurant.price_range != price_range {
                return false;
            }
        }
        true
    }

    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|c| !c.is_empty())
    }

    fn min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|r| !r.is_nan())
    }

    fn price_range(&self) -> Option<&str> {
        self.price_range.as_deref().filter(|p| !p.is_empty())
    }
}
