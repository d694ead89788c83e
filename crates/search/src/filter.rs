//! Attribute filtering of candidate restaurants.

use crate::model::{Restaurant, SearchCriteria};

/// Applies `criteria` to `candidates`, preserving input order.
///
/// `None` (or criteria with no populated field) returns every candidate.
/// A filter that matches nothing returns an empty vector.
///
/// ```
/// use nearbite_search::{filter, Restaurant, SearchCriteria};
///
/// let candidates = vec![
///     Restaurant::new("1", "Nobie's", "American", 4.6, "$$$", 29.73, -95.40),
///     Restaurant::new("2", "Tacos Tierra", "Mexican", 4.1, "$", 29.76, -95.36),
/// ];
/// let cheap = SearchCriteria::default().with_price_range("$");
///
/// let kept = filter::apply(&candidates, Some(&cheap));
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "Tacos Tierra");
/// ```
pub fn apply<'a>(candidates: &'a [Restaurant], criteria: Option<&SearchCriteria>) -> Vec<&'a Restaurant> {
    match criteria.filter(|c| !c.is_empty()) {
        Some(criteria) => candidates.iter().filter(|r| criteria.matches(r)).collect(),
        None => candidates.iter().collect(),
    }
}
