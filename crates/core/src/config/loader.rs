//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use crate::validation::{ValidationResult, Validator, MAX_LIMIT};
use nearbite_geo::Coordinate;
use nearbite_search::Gazetteer;
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration wrapper
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit `path` must exist. Without one, the standard locations are
    /// searched and defaults are used when none exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        let config = Self {
            schema,
            path: config_path,
        };

        let result = config.validate();
        if !result.is_valid() {
            let mut err = Error::new(
                ErrorCode::ConfigValidationError,
                format!("Invalid configuration: {}", result.summary()),
            );
            if let Some(p) = &config.path {
                err = err.with_context(format!("In {}", p.display()));
            }
            return Err(err);
        }

        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> ValidationResult {
        let search = &self.schema.search;
        let location = &self.schema.location;
        let logging = &self.schema.logging;

        Validator::new()
            .range("search.limit", search.limit, 1, MAX_LIMIT)
            .range("location.default_latitude", location.default_latitude, -90.0, 90.0)
            .range("location.default_longitude", location.default_longitude, -180.0, 180.0)
            .required("data.restaurants", &self.schema.data.restaurants.to_string_lossy())
            .one_of("logging.level", &logging.level.to_lowercase(), LOG_LEVELS)
            .validate()
    }

    /// Fallback coordinate for unmatched location text
    pub fn default_location(&self) -> Coordinate {
        Coordinate::new(
            self.schema.location.default_latitude,
            self.schema.location.default_longitude,
        )
    }

    /// Built-in gazetteer with the configured fallback
    pub fn gazetteer(&self) -> Gazetteer {
        Gazetteer::houston().with_default(self.default_location())
    }

    /// Restaurant data file, resolved against the config file's directory
    pub fn restaurants_path(&self) -> PathBuf {
        self.resolve(&self.schema.data.restaurants)
    }

    /// Blog data file, resolved against the config file's directory
    pub fn blogs_path(&self) -> Option<PathBuf> {
        self.schema.data.blogs.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.path.as_deref().and_then(Path::parent) {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".nearbite.toml", "nearbite.toml", ".config/nearbite.toml"];

    for candidate in candidates {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("nearbite").join("nearbite.toml"))
        .filter(|path| path.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e).with_context(format!("Failed to read config file {}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("Failed to parse config file {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("nearbite.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.limit, 5);
        assert!(config.validate().is_valid());
        assert_eq!(config.restaurants_path(), PathBuf::from("data/restaurants.json"));
    }

    #[test]
    fn test_config_load_without_file() {
        let config = Config::load(None);
        assert!(config.is_ok());
    }

    #[test]
    fn test_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/nearbite.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [data]
            restaurants = "fixtures/restaurants.json"
            blogs = "/srv/nearbite/blogs.json"
            "#,
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.restaurants_path(),
            dir.path().join("fixtures/restaurants.json")
        );
        assert_eq!(config.blogs_path(), Some(PathBuf::from("/srv/nearbite/blogs.json")));
    }

    #[test]
    fn test_configured_default_location() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [location]
            default_latitude = 37.7749
            default_longitude = -122.4194
            "#,
        );

        let config = Config::load(Some(&path)).unwrap();
        let sf = Coordinate::new(37.7749, -122.4194);
        assert_eq!(config.default_location(), sf);
        assert_eq!(config.gazetteer().resolve("somewhere else"), sf);
        assert_ne!(config.gazetteer().resolve("Montrose"), sf);
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[search\nlimit = ");

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [search]
            limit = 0

            [logging]
            level = "loud"
            "#,
        );

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("search.limit"));
        assert!(err.message.contains("logging.level"));
    }
}
