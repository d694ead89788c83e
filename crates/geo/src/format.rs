//! Display formatting for distances.

/// Formats a distance given in kilometers for display.
///
/// Distances under one kilometer are shown in whole meters (`"500m"`),
/// everything else in kilometers with one decimal (`"5.5 km"`).
///
/// # Example
/// ```
/// use nearbite_geo::format_distance;
///
/// assert_eq!(format_distance(0.0), "0m");
/// assert_eq!(format_distance(0.999), "999m");
/// assert_eq!(format_distance(1.0), "1.0 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_meters() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.999), "999m");
        assert_eq!(format_distance(0.0124), "12m");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_distance(0.0), "0m");
    }

    #[test]
    fn test_format_kilometers() {
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(5.5), "5.5 km");
        assert_eq!(format_distance(559.12), "559.1 km");
    }

    #[test]
    fn test_format_rounds_up_to_thousand_meters() {
        // Still under 1 km, so the meter branch applies
        assert_eq!(format_distance(0.9996), "1000m");
    }
}
