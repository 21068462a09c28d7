//! The immutable result object a resolution pass produces.

use std::collections::BTreeMap;
use std::ops::Index;

use crate::value::EnvValue;

/// A read-only mapping from configuration key to its validated, typed value.
///
/// Constructed once, after every schema key has been resolved; there is no
/// mutating API, so the values cannot change for the lifetime of the object.
/// Keys that failed validation are simply absent. An empty result is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvResult {
    values: BTreeMap<String, EnvValue>,
}

impl EnvResult {
    pub(crate) fn new(values: BTreeMap<String, EnvValue>) -> Self {
        Self { values }
    }

    /// The value for `key`, if that key resolved successfully.
    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.values.get(key)
    }

    /// The string value for `key`, if present and string-typed.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(EnvValue::as_str)
    }

    /// The boolean value for `key`, if present and boolean-typed.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(EnvValue::as_bool)
    }

    /// The integer value for `key`, if present and integer-typed.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(EnvValue::as_int)
    }

    /// The float value for `key`, if present and float-typed.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(EnvValue::as_float)
    }

    /// The decoded JSON value for `key`, if present and JSON-typed.
    pub fn get_json(&self, key: &str) -> Option<&serde_json::Value> {
        self.get(key).and_then(EnvValue::as_json)
    }

    /// Whether `key` resolved successfully.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The resolved keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over resolved `(key, value)` pairs, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of resolved keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Attribute-style access. Panics if `key` did not resolve; use
/// [`EnvResult::get`] for a fallible lookup.
impl Index<&str> for EnvResult {
    type Output = EnvValue;

    fn index(&self, key: &str) -> &EnvValue {
        self.get(key)
            .unwrap_or_else(|| panic!("no resolved value for key {key:?}"))
    }
}
