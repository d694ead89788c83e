//! CLI utilities for Nearbite
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Result tables for ranked restaurants and blog posts
//! - Output format selection

#![warn(missing_docs)]

pub mod output;
pub mod table;

pub use output::{format_count, OutputFormat, Status};
