//! Error types for the geo crate.
//!
//! Distance math never fails; these errors come only from parsing and
//! explicit range validation.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Malformed coordinate text
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Latitude outside [-90, 90]
    #[error("Latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// Error code for integration with nearbite-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Malformed coordinate text
    InvalidCoordinate = 10001,
    /// Latitude out of range
    LatitudeOutOfRange = 10002,
    /// Longitude out of range
    LongitudeOutOfRange = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::LatitudeOutOfRange(_) => GeoErrorCode::LatitudeOutOfRange,
            GeoError::LongitudeOutOfRange(_) => GeoErrorCode::LongitudeOutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::LatitudeOutOfRange(91.0).code() as u32, 10002);
        assert_eq!(GeoError::InvalidCoordinate("x".into()).code(), GeoErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_error_display() {
        let err = GeoError::LongitudeOutOfRange(200.0);
        assert_eq!(err.to_string(), "Longitude 200 is outside -180..=180");
    }
}
