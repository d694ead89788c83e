//! Distance ranking of filtered restaurants.
//!
//! Steps, in order: filter, annotate each survivor with its distance from the
//! origin, stable-sort ascending by distance, truncate to the limit. Equal
//! distances keep their filtered order. Non-finite distances sort after every
//! finite one and are never dropped.

use crate::filter;
use crate::gazetteer::{self, Gazetteer};
use crate::model::{RankedRestaurant, Restaurant, SearchCriteria};
use nearbite_geo::{calculate_distances, Coordinate};
use std::cmp::Ordering;

/// Result cap used when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks `candidates` by distance from `origin`.
///
/// Returns at most `limit` entries; `limit == 0` returns nothing.
pub fn search(
    origin: &Coordinate,
    candidates: &[Restaurant],
    criteria: Option<&SearchCriteria>,
    limit: usize,
) -> Vec<RankedRestaurant> {
    let filtered = filter::apply(candidates, criteria);
    if limit == 0 || filtered.is_empty() {
        tracing::debug!(candidates = candidates.len(), filtered = filtered.len(), limit, "Nothing to rank");
        return Vec::new();
    }

    let distances = calculate_distances(origin, &filtered);

    let mut ranked: Vec<(f64, &Restaurant)> = distances.into_iter().zip(filtered).collect();
    // `sort_by` is stable
    ranked.sort_by(|a, b| compare_distance(a.0, b.0));
    ranked.truncate(limit);

    tracing::debug!(
        origin = %origin,
        candidates = candidates.len(),
        returned = ranked.len(),
        limit,
        "Ranked restaurants"
    );

    ranked
        .into_iter()
        .map(|(distance, restaurant)| RankedRestaurant {
            restaurant: restaurant.clone(),
            distance,
        })
        .collect()
}

/// [`search`] with the origin given as separate latitude and longitude.
pub fn search_coordinates(
    origin_lat: f64,
    origin_lng: f64,
    candidates: &[Restaurant],
    criteria: Option<&SearchCriteria>,
    limit: usize,
) -> Vec<RankedRestaurant> {
    search(&Coordinate::new(origin_lat, origin_lng), candidates, criteria, limit)
}

/// [`search`] from a free-text location, resolved with the built-in gazetteer.
pub fn search_address(
    address: &str,
    candidates: &[Restaurant],
    criteria: Option<&SearchCriteria>,
    limit: usize,
) -> Vec<RankedRestaurant> {
    search(&gazetteer::resolve_location(address), candidates, criteria, limit)
}

/// Ascending, with NaN after everything else.
fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// A reusable search description: origin, criteria and limit.
///
/// ```
/// use nearbite_search::{Restaurant, SearchCriteria, SearchRequest};
///
/// let restaurants = vec![
///     Restaurant::new("1", "Theodore Rex", "American", 4.8, "$$$$", 29.7578, -95.3631),
///     Restaurant::new("2", "Lankford Grocery", "American", 4.5, "$", 29.7475, -95.3905),
/// ];
///
/// let ranked = SearchRequest::near_address("downtown")
///     .criteria(SearchCriteria::default().with_cuisine("american"))
///     .limit(1)
///     .execute(&restaurants);
///
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].restaurant.name, "Theodore Rex");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    origin: Coordinate,
    criteria: SearchCriteria,
    limit: usize,
}

impl SearchRequest {
    /// Search around a known coordinate.
    pub fn near(origin: Coordinate) -> Self {
        Self {
            origin,
            criteria: SearchCriteria::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Search around free text, resolved with the built-in gazetteer.
    pub fn near_address(address: &str) -> Self {
        Self::near(gazetteer::resolve_location(address))
    }

    /// Search around free text, resolved with a custom gazetteer.
    pub fn near_address_in(gazetteer: &Gazetteer, address: &str) -> Self {
        Self::near(gazetteer.resolve(address))
    }

    pub fn criteria(mut self, criteria: SearchCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Runs the search over `candidates`.
    pub fn execute(&self, candidates: &[Restaurant]) -> Vec<RankedRestaurant> {
        search(&self.origin, candidates, Some(&self.criteria), self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::DEFAULT_LOCATION;
    use proptest::prelude::*;

    const GALLERIA: Coordinate = Coordinate::new(29.7389, -95.4619);

    fn create_test_restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::new("1", "Musaafer", "Modern Indian", 4.6, "$$$", 29.7389, -95.4619),
            Restaurant::new("2", "Pondicheri", "Modern South Indian", 4.3, "$$", 29.7425, -95.4185),
            Restaurant::new("3", "Udipi Cafe", "South Indian", 4.2, "$", 29.7119, -95.5136),
            Restaurant::new("4", "Xochi", "Mexican", 4.7, "$$$", 29.7548, -95.3621),
            Restaurant::new("5", "Himalaya", "Pakistani", 4.7, "$$", 29.7130, -95.5110),
            Restaurant::new("6", "Bludorn", "American", 4.8, "$$$$", 29.7530, -95.4020),
            Restaurant::new("7", "Crawfish & Noodles", "Vietnamese Cajun", 4.4, "$$", 29.7060, -95.5430),
        ]
    }

    fn names(ranked: &[RankedRestaurant]) -> Vec<&str> {
        ranked.iter().map(|r| r.restaurant.name.as_str()).collect()
    }

    #[test]
    fn test_default_limit() {
        let restaurants = create_test_restaurants();
        let ranked = search(&DEFAULT_LOCATION, &restaurants, None, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_sorted_by_distance() {
        let restaurants = create_test_restaurants();
        let ranked = search(&DEFAULT_LOCATION, &restaurants, None, 10);

        assert_eq!(ranked.len(), restaurants.len());
        for window in ranked.windows(2) {
            assert!(window[0].distance <= window[1].distance);
        }
        assert_eq!(ranked[0].restaurant.name, "Xochi");
        assert!(ranked.iter().all(|r| r.distance >= 0.0));
    }

    #[test]
    fn test_zero_distance_at_restaurant() {
        let restaurants = create_test_restaurants();
        let ranked = search(&GALLERIA, &restaurants, None, 1);
        assert_eq!(names(&ranked), ["Musaafer"]);
        assert_eq!(ranked[0].distance, 0.0);
    }

    #[test]
    fn test_limit_zero_is_empty() {
        let restaurants = create_test_restaurants();
        assert!(search(&DEFAULT_LOCATION, &restaurants, None, 0).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let restaurants = create_test_restaurants();
        let criteria = SearchCriteria::default().with_cuisine("NonExistentCuisine");
        assert!(search(&DEFAULT_LOCATION, &restaurants, Some(&criteria), 5).is_empty());
    }

    #[test]
    fn test_min_rating_respected() {
        let restaurants = create_test_restaurants();
        let criteria = SearchCriteria::default().with_min_rating(4.3);
        let ranked = search(&DEFAULT_LOCATION, &restaurants, Some(&criteria), 5);
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|r| r.restaurant.rating >= 4.3));
    }

    #[test]
    fn test_combined_filters() {
        let restaurants = create_test_restaurants();
        let criteria = SearchCriteria::default().with_min_rating(4.0).with_price_range("$$");
        let ranked = search(&DEFAULT_LOCATION, &restaurants, Some(&criteria), 5);
        assert_eq!(names(&ranked), ["Pondicheri", "Himalaya", "Crawfish & Noodles"]);
    }

    #[test]
    fn test_origin_changes_leading_distance() {
        let restaurants = create_test_restaurants();
        let downtown = search(&DEFAULT_LOCATION, &restaurants, None, 5);
        let galleria = search(&GALLERIA, &restaurants, None, 5);
        assert_ne!(downtown[0].distance, galleria[0].distance);
    }

    #[test]
    fn test_ties_keep_filtered_order() {
        let at = Coordinate::new(29.75, -95.40);
        let restaurants = vec![
            Restaurant::new("a", "First", "Thai", 4.0, "$", 29.76, -95.40),
            Restaurant::new("b", "Second", "Thai", 4.0, "$", 29.76, -95.40),
            Restaurant::new("c", "Third", "Thai", 4.0, "$", 29.76, -95.40),
        ];
        let ranked = search(&at, &restaurants, None, 5);
        assert_eq!(names(&ranked), ["First", "Second", "Third"]);
    }

    #[test]
    fn test_non_finite_coordinates_sort_last() {
        let mut restaurants = create_test_restaurants();
        restaurants.insert(0, Restaurant::new("x", "Ghost Kitchen", "Unknown", 3.0, "$", f64::NAN, f64::NAN));
        let ranked = search(&DEFAULT_LOCATION, &restaurants, None, 100);

        assert_eq!(ranked.len(), restaurants.len());
        let last = ranked.last().unwrap();
        assert_eq!(last.restaurant.name, "Ghost Kitchen");
        assert!(last.distance.is_nan());
    }

    #[test]
    fn test_negative_nan_sorts_last() {
        let neg_nan = -f64::NAN;
        assert!(neg_nan.is_sign_negative());
        assert_eq!(compare_distance(neg_nan, 0.0), Ordering::Greater);
        assert_eq!(compare_distance(0.0, neg_nan), Ordering::Less);
        assert_eq!(compare_distance(neg_nan, f64::NAN), Ordering::Equal);

        let mut distances = vec![neg_nan, 2.0, f64::NAN, 0.5];
        distances.sort_by(|a, b| compare_distance(*a, *b));
        assert_eq!(&distances[..2], &[0.5, 2.0]);
        assert!(distances[2..].iter().all(|d| d.is_nan()));
    }

    #[test]
    fn test_source_records_untouched() {
        let restaurants = create_test_restaurants();
        let before = restaurants.clone();
        let _ = search(&GALLERIA, &restaurants, None, 3);
        assert_eq!(restaurants, before);
    }

    #[test]
    fn test_search_address_resolves_first() {
        let restaurants = create_test_restaurants();
        let by_text = search_address("galleria", &restaurants, None, 3);
        let by_coords = search_coordinates(29.7389, -95.4619, &restaurants, None, 3);
        assert_eq!(by_text, by_coords);
    }

    #[test]
    fn test_request_builder() {
        let restaurants = create_test_restaurants();
        let request = SearchRequest::near_address("Chinatown")
            .criteria(SearchCriteria::default().with_price_range("$$"))
            .limit(2);

        assert_eq!(request.origin(), Coordinate::new(29.7067, -95.5067));
        assert_eq!(names(&request.execute(&restaurants)), ["Himalaya", "Crawfish & Noodles"]);
    }

    #[test]
    fn test_request_with_custom_gazetteer() {
        let gazetteer = Gazetteer::empty(GALLERIA);
        let request = SearchRequest::near_address_in(&gazetteer, "anywhere");
        assert_eq!(request.origin(), GALLERIA);
    }

    fn arb_restaurant() -> impl Strategy<Value = Restaurant> {
        (0.0f64..=5.0, 0usize..4, 29.5f64..30.0, -95.8f64..-95.1).prop_map(|(rating, tier, lat, lng)| {
            Restaurant::new("p", "Prop", "Any", rating, crate::PRICE_TIERS[tier], lat, lng)
        })
    }

    proptest! {
        #[test]
        fn prop_bounded_sorted_prefix(
            restaurants in prop::collection::vec(arb_restaurant(), 0..40),
            limit in 0usize..10,
            min_rating in 0.0f64..=5.0,
        ) {
            let criteria = SearchCriteria::default().with_min_rating(min_rating);
            let ranked = search(&DEFAULT_LOCATION, &restaurants, Some(&criteria), limit);

            let eligible = restaurants.iter().filter(|r| r.rating >= min_rating).count();
            prop_assert_eq!(ranked.len(), eligible.min(limit));
            prop_assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
            prop_assert!(ranked.iter().all(|r| r.distance >= 0.0 && r.restaurant.rating >= min_rating));
        }
    }
}
