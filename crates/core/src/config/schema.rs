//! Configuration schema definitions
//!
//! Every field has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// `[search]`
    #[serde(default)]
    pub search: SearchConfig,

    /// `[location]`
    #[serde(default)]
    pub location: LocationConfig,

    /// `[data]`
    #[serde(default)]
    pub data: DataConfig,

    /// `[logging]`
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Result cap when the caller does not give one
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    nearbite_search::DEFAULT_LIMIT
}

/// Fallback location for queries that match no gazetteer keyword
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    #[allow(missing_docs)]
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[allow(missing_docs)]
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

fn default_latitude() -> f64 {
    nearbite_search::DEFAULT_LOCATION.latitude
}

fn default_longitude() -> f64 {
    nearbite_search::DEFAULT_LOCATION.longitude
}

/// Data file locations
///
/// Relative paths are resolved against the directory of the config file
/// they were read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Restaurant records
    #[serde(default = "default_restaurants")]
    pub restaurants: PathBuf,

    /// Blog posts; `None` disables blog loading
    #[serde(default = "default_blogs")]
    pub blogs: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            restaurants: default_restaurants(),
            blogs: default_blogs(),
        }
    }
}

fn default_restaurants() -> PathBuf {
    PathBuf::from("data/restaurants.json")
}

fn default_blogs() -> Option<PathBuf> {
    Some(PathBuf::from("data/blogs.json"))
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON log lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("").unwrap();
        assert_eq!(schema, ConfigSchema::default());
        assert_eq!(schema.search.limit, 5);
        assert_eq!(schema.location.default_latitude, 29.7604);
        assert_eq!(schema.logging.level, "info");
    }

    #[test]
    fn test_partial_section() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [location]
            default_latitude = 37.7749

            [data]
            restaurants = "fixtures/sf.json"
            "#,
        )
        .unwrap();

        assert_eq!(schema.location.default_latitude, 37.7749);
        assert_eq!(schema.location.default_longitude, -95.3698);
        assert_eq!(schema.data.restaurants, PathBuf::from("fixtures/sf.json"));
        assert_eq!(schema.data.blogs, Some(PathBuf::from("data/blogs.json")));
    }
}
