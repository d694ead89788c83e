//! Decoding of record collections from JSON.
//!
//! Collections arrive either as a bare array or wrapped in an object under a
//! named key, e.g. `{ "restaurants": [ ... ] }`.

use crate::error::{Result, SearchError};
use crate::model::Restaurant;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes restaurants from `[...]` or `{ "restaurants": [...] }`.
pub fn restaurants_from_json(json: &str) -> Result<Vec<Restaurant>> {
    decode_records(json, "restaurants")
}

/// Decodes a collection from a bare array or an object holding it at `key`.
pub fn decode_records<T: DeserializeOwned>(json: &str, key: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;
    decode_value(value, key)
}

/// Like [`decode_records`] for an already-parsed value.
pub fn decode_value<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove(key) {
            Some(inner @ Value::Array(_)) => Ok(serde_json::from_value(inner)?),
            Some(_) => Err(SearchError::InvalidRecords(format!("'{}' is not an array", key))),
            None => Err(SearchError::InvalidRecords(format!("missing '{}' array", key))),
        },
        _ => Err(SearchError::InvalidRecords(format!(
            "expected an array or an object with a '{}' array",
            key
        ))),
    }
}
