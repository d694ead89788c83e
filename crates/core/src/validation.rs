//! Caller-side validation of search parameters and records
//!
//! The search pipeline accepts any input and degrades gracefully; these
//! checks are for the request layer that wants to reject bad parameters
//! before they reach it.
//!
//! # Example
//!
//! ```
//! use nearbite_core::validation::{validate_search_input, SearchInput};
//!
//! let input = SearchInput {
//!     latitude: Some(29.76),
//!     longitude: Some(-95.37),
//!     min_rating: Some(6.0),
//!     price_range: Some("$$".to_string()),
//!     limit: 5,
//! };
//!
//! let result = validate_search_input(&input);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].field, "min_rating");
//! ```

use crate::error::{Error, Result};
use nearbite_search::{Restaurant, PRICE_TIERS};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Largest result cap a caller may request
pub const MAX_LIMIT: usize = 100;

const HOURS_PATTERN: &str = r"^([01]\d|2[0-3]):[0-5]\d$";

/// One failed check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Machine-readable check name, e.g. `RANGE`
    pub code: String,
    /// Expected value (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual value (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ValidationError {
    fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            code: code.to_string(),
            expected: None,
            actual: None,
        }
    }

    fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    fn actual(mut self, actual: impl ToString) -> Self {
        self.actual = Some(actual.to_string());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors and warnings collected by a [`Validator`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// True if no check failed; warnings do not count
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed checks, in the order they ran
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Non-blocking findings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// All error messages joined with `; `
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Ok` if valid, otherwise a `InvalidInput`-coded [`Error`]
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::validation(format!("Validation failed: {}", self.summary())))
        }
    }
}

/// Fluent validator builder
///
/// Each check records at most one error and never short-circuits, so a
/// single pass reports every problem.
#[derive(Debug, Default)]
pub struct Validator {
    result: ValidationResult,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, error: ValidationError) -> Self {
        self.result.errors.push(error);
        self
    }

    /// Fails on empty or whitespace-only values
    pub fn required(self, field: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            return self;
        }
        self.fail(
            ValidationError::new(field, "REQUIRED", "Field is required")
                .expected("non-empty value")
                .actual("empty"),
        )
    }

    /// Fails unless `value` matches the regex `pattern`
    pub fn pattern(self, field: &str, value: &str, pattern: &str, description: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) if re.is_match(value) => self,
            Ok(_) => self.fail(
                ValidationError::new(field, "PATTERN", format!("Must match {}", description))
                    .expected(description)
                    .actual(value),
            ),
            Err(e) => self.fail(ValidationError::new(
                field,
                "INTERNAL",
                format!("Invalid validation pattern: {}", e),
            )),
        }
    }

    /// Fails unless `value` is exactly one of `allowed`
    pub fn one_of(self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if allowed.contains(&value) {
            return self;
        }
        let choices = allowed.join(", ");
        self.fail(
            ValidationError::new(field, "ONE_OF", format!("Must be one of: {}", choices))
                .expected(choices)
                .actual(value),
        )
    }

    /// Fails unless `min <= value <= max`; incomparable values (NaN) fail
    pub fn range<T: PartialOrd + std::fmt::Display>(
        self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        let in_range = value >= min && value <= max;
        if in_range {
            return self;
        }
        self.fail(
            ValidationError::new(field, "RANGE", format!("Must be between {} and {}", min, max))
                .expected(format!("{} - {}", min, max))
                .actual(value),
        )
    }

    /// Fails with the returned message, if any
    pub fn custom<F>(self, field: &str, check: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        match check() {
            Some(message) => self.fail(ValidationError::new(field, "CUSTOM", message)),
            None => self,
        }
    }

    /// Records a warning when `condition` holds
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result
                .warnings
                .push(ValidationError::new(field, "WARNING", message));
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

/// Search parameters as received from a caller
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInput {
    /// Origin latitude; requires `longitude`
    pub latitude: Option<f64>,
    /// Origin longitude; requires `latitude`
    pub longitude: Option<f64>,
    /// Minimum rating filter
    pub min_rating: Option<f64>,
    /// Price tier filter; blank means no filter
    pub price_range: Option<String>,
    /// Result cap
    pub limit: usize,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            min_rating: None,
            price_range: None,
            limit: nearbite_search::DEFAULT_LIMIT,
        }
    }
}

/// Validate search parameters
pub fn validate_search_input(input: &SearchInput) -> ValidationResult {
    let mut validator = Validator::new().custom("coordinates", || {
        match (input.latitude, input.longitude) {
            (Some(_), None) | (None, Some(_)) => {
                Some("latitude and longitude must be given together".to_string())
            }
            _ => None,
        }
    });

    if let Some(lat) = input.latitude {
        validator = validator.range("latitude", lat, -90.0, 90.0);
    }
    if let Some(lng) = input.longitude {
        validator = validator.range("longitude", lng, -180.0, 180.0);
    }
    if let Some(rating) = input.min_rating {
        validator = validator.range("min_rating", rating, 0.0, 5.0);
    }
    if let Some(price) = input.price_range.as_deref().filter(|p| !p.is_empty()) {
        validator = validator.one_of("price_range", price, &PRICE_TIERS);
    }

    validator.range("limit", input.limit, 1, MAX_LIMIT).validate()
}

/// Validate a restaurant record
///
/// Hours are optional but must be 24-hour `HH:MM` when present.
pub fn validate_restaurant(restaurant: &Restaurant) -> ValidationResult {
    let mut validator = Validator::new()
        .required("id", &restaurant.id)
        .required("name", &restaurant.name)
        .range("rating", restaurant.rating, 0.0, 5.0)
        .one_of("priceRange", &restaurant.price_range, &PRICE_TIERS)
        .range("latitude", restaurant.latitude, -90.0, 90.0)
        .range("longitude", restaurant.longitude, -180.0, 180.0)
        .warn_if("cuisine", restaurant.cuisine.trim().is_empty(), "No cuisine given");

    for (field, hours) in [
        ("openingHours", &restaurant.opening_hours),
        ("closingHours", &restaurant.closing_hours),
    ] {
        if let Some(hours) = hours {
            validator = validator.pattern(field, hours, HOURS_PATTERN, "24-hour HH:MM");
        }
    }

    validator.validate()
}
