//! Tagged values produced by validators.

use std::fmt;

/// A typed configuration value.
///
/// Every validator coerces a raw string into exactly one of these shapes.
/// Numbers keep the integer/float distinction the coercion rules produce:
/// a numeric input with no fractional part becomes [`EnvValue::Int`], anything
/// else stays [`EnvValue::Float`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Json(serde_json::Value),
}

impl EnvValue {
    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The decoded JSON payload, if this is a JSON value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Renders the value the way error messages quote it: strings bare,
/// JSON in compact form.
impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for EnvValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for EnvValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for EnvValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for EnvValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for EnvValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for EnvValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<serde_json::Value> for EnvValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}
