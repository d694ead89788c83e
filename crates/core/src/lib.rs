//! Core utilities for Nearbite
//!
//! This crate provides the pieces around the search pipeline that touch the
//! outside world:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Catalog**: Loading the read-only restaurant and blog records
//! - **Validation**: Caller-side checks of search parameters and records
//!
//! # Example
//!
//! ```rust,no_run
//! use nearbite_core::{catalog::Catalog, config::Config};
//! use nearbite_search::SearchRequest;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let catalog = Catalog::load(
//!     &config.restaurants_path(),
//!     config.blogs_path().as_deref(),
//! )
//! .expect("Failed to load restaurant data");
//!
//! let request = SearchRequest::near_address_in(&config.gazetteer(), "Montrose")
//!     .limit(config.schema.search.limit);
//! for ranked in catalog.search(&request) {
//!     println!("{} ({})", ranked.restaurant.name, ranked.formatted_distance());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{BlogPost, Catalog};
    pub use crate::config::Config;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{SearchInput, ValidationResult, Validator};
}
