//! Configuration loading and schema definitions
//!
//! Settings for result limits, the fallback location, data file locations
//! and logging, read from `nearbite.toml`.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
