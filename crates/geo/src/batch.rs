//! Batch distance calculations with optional parallelism.
//!
//! Ranking computes one distance per surviving candidate; with the
//! `parallel` feature the work is spread over rayon's pool. Output order
//! always matches input order.

use crate::{haversine_distance, Coordinate};

/// Anything that sits at a fixed point on the map.
pub trait Located {
    /// The item's position.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

/// Calculate distances (km) from `origin` to every item.
///
/// # Example
/// ```
/// use nearbite_geo::{calculate_distances, Coordinate};
///
/// let origin = Coordinate::new(29.7604, -95.3698);
/// let points = [origin, Coordinate::new(29.7389, -95.4619)];
///
/// let distances = calculate_distances(&origin, &points);
/// assert_eq!(distances.len(), 2);
/// assert_eq!(distances[0], 0.0);
/// ```
pub fn calculate_distances<T: Located + Sync>(origin: &Coordinate, items: &[T]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| haversine_distance(origin, &item.coordinate()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| haversine_distance(origin, &item.coordinate()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stop {
        name: &'static str,
        at: Coordinate,
    }

    impl Located for Stop {
        fn coordinate(&self) -> Coordinate {
            self.at
        }
    }

    fn create_test_stops() -> Vec<Stop> {
        vec![
            Stop { name: "montrose", at: Coordinate::new(29.7396, -95.3929) },
            Stop { name: "downtown", at: Coordinate::new(29.7589, -95.3677) },
            Stop { name: "chinatown", at: Coordinate::new(29.7067, -95.5067) },
            Stop { name: "broken", at: Coordinate::new(f64::NAN, f64::NAN) },
        ]
    }

    #[test]
    fn test_batch_distances_preserve_order() {
        let origin = Coordinate::new(29.7604, -95.3698);
        let stops = create_test_stops();
        let distances = calculate_distances(&origin, &stops);

        assert_eq!(distances.len(), stops.len());
        for (stop, distance) in stops.iter().zip(&distances).take(3) {
            assert_eq!(*distance, haversine_distance(&origin, &stop.at), "{}", stop.name);
        }
    }

    #[test]
    fn test_batch_non_finite_propagates() {
        let origin = Coordinate::new(29.7604, -95.3698);
        let distances = calculate_distances(&origin, &create_test_stops());
        assert!(distances[3].is_nan());
    }

    #[test]
    fn test_batch_over_references() {
        let origin = Coordinate::new(29.7604, -95.3698);
        let stops = create_test_stops();
        let refs: Vec<&Stop> = stops.iter().take(2).collect();
        let distances = calculate_distances(&origin, &refs);
        assert!(distances[1] < distances[0]);
    }

    #[test]
    fn test_batch_empty() {
        let origin = Coordinate::new(0.0, 0.0);
        let none: [Coordinate; 0] = [];
        assert!(calculate_distances(&origin, &none).is_empty());
    }
}
