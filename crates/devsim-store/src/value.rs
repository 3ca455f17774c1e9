//! Typed values held by the external key-value store

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored value
///
/// Mirrors the property-list style types a platform preference store keeps:
/// scalars, raw binary blobs, arrays and string-keyed dictionaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(DateTime<Utc>),
    Data(Vec<u8>),
    Array(Vec<StoredValue>),
    Dictionary(BTreeMap<String, StoredValue>),
}

impl StoredValue {
    /// Short type name, for inspector listings
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Bool(_) => "bool",
            StoredValue::Integer(_) => "integer",
            StoredValue::Float(_) => "float",
            StoredValue::String(_) => "string",
            StoredValue::Date(_) => "date",
            StoredValue::Data(_) => "data",
            StoredValue::Array(_) => "array",
            StoredValue::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Encode a set of ids as an array of strings, in iteration order
    pub fn string_array<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StoredValue::Array(
            values
                .into_iter()
                .map(|v| StoredValue::String(v.into()))
                .collect(),
        )
    }

    /// False if any float, however deeply nested, is NaN or infinite
    pub fn is_finite(&self) -> bool {
        match self {
            StoredValue::Float(n) => n.is_finite(),
            StoredValue::Array(items) => items.iter().all(StoredValue::is_finite),
            StoredValue::Dictionary(map) => map.values().all(StoredValue::is_finite),
            _ => true,
        }
    }

    /// Array of strings, or `None` if this is not an array or any element
    /// is not a string
    pub fn to_string_array(&self) -> Option<Vec<String>> {
        match self {
            StoredValue::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => None,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        StoredValue::Bool(value)
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Integer(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        StoredValue::Float(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::String(value.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::String(value)
    }
}
