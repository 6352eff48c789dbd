//! Canonical query-string construction.
//!
//! Parameters are kept in a `BTreeMap`, so the encoded string is always sorted
//! by key and two equal parameter sets always encode to the same bytes.

use std::collections::BTreeMap;

/// Query parameter carrying the developer key on every call.
pub const API_KEY_PARAM: &str = "key";

/// The query parameters of a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    /// Start a query holding only the API key.
    pub fn new(api_key: &str) -> Self {
        Self::default().set(API_KEY_PARAM, api_key)
    }

    /// Set a required parameter, whatever its value.
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only when `value` is non-empty.
    pub fn set_non_empty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.set(key, value)
    }

    /// Set `key` only when `value` is positive. Zero and negatives leave the
    /// server default in place.
    pub fn set_positive(self, key: &str, value: i32) -> Self {
        if value <= 0 {
            return self;
        }
        self.set(key, value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Percent-encode as `k1=v1&k2=v2`, keys sorted.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
