//! Validators: per-variant coercion and constraint rules.
//!
//! A [`Validator`] turns one raw environment string into a typed
//! [`EnvValue`], or fails with an invalid-format [`EnvError`]. The variant
//! set is closed: one constructor per supported shape, all sharing the same
//! optional metadata (`default`, `choices`, `desc`, `example`, `docs`).
//!
//! Constraint order is fixed: coerce first, then check `choices` membership
//! against the *coerced* value. A raw string that fails coercion never
//! reaches the choices check.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::EnvError;
use crate::value::EnvValue;

/// Matches `local@domain.tld`-shaped text, optionally quoted. Unanchored,
/// so any substring hit accepts the raw value.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""?[-a-zA-Z0-9.`?{}]+@\w+\.\w+"?"#).expect("valid email pattern")
});

/// Matches four dot-separated decimal octets with an optional `:port` suffix.
static IP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+){3}(:[0-9]+)?").expect("valid ip pattern"));

/// How a raw string becomes a typed value.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Str,
    Bool,
    Number,
    Port,
    /// Shared base for pattern validators: a successful unanchored search
    /// returns the raw string unchanged.
    Pattern(&'static LazyLock<Regex>),
    Url,
    Json,
}

/// A named coercion-and-constraint rule for one configuration key.
#[derive(Debug, Clone)]
pub struct Validator {
    name: &'static str,
    kind: Kind,
    pub(crate) default: Option<EnvValue>,
    choices: Option<Vec<EnvValue>>,
    desc: Option<String>,
    example: Option<String>,
    docs: Option<String>,
}

impl Validator {
    const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            default: None,
            choices: None,
            desc: None,
            example: None,
            docs: None,
        }
    }

    /// Passes string values through. An empty string is a valid value.
    pub const fn string() -> Self {
        Self::new("str", Kind::Str)
    }

    /// Parses `"1"`, `"0"`, and case-insensitive `"true"`/`"false"` into booleans.
    pub const fn boolean() -> Self {
        Self::new("bool", Kind::Bool)
    }

    /// Parses decimal input (`"42"`, `"0.23"`, `"1e5"`) into a number.
    /// Integral values come back as integers, everything else as floats.
    pub const fn number() -> Self {
        Self::new("number", Kind::Number)
    }

    /// A TCP port: an integer in `1..=65535`.
    pub const fn port() -> Self {
        Self::new("port", Kind::Port)
    }

    /// An email address, optionally quoted.
    pub fn email() -> Self {
        Self::new("e-mail", Kind::Pattern(&EMAIL_PATTERN))
    }

    /// An IPv4 address, with or without a `:port` suffix.
    pub fn ip_address() -> Self {
        Self::new("ip address", Kind::Pattern(&IP_PATTERN))
    }

    /// A URL with both a scheme and a host.
    pub const fn url() -> Self {
        Self::new("url", Kind::Url)
    }

    /// JSON text, decoded into its object/array/scalar structure.
    pub const fn json() -> Self {
        Self::new("json", Kind::Json)
    }

    /// The fixed variant name used in error messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fallback value recorded when the key is absent from the environment.
    /// Providing a default makes the key optional; defaults are already typed
    /// and are not passed back through validation.
    #[must_use]
    pub fn default(mut self, value: impl Into<EnvValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Allow-list of admissible values, checked against the coerced value,
    /// never the raw string.
    #[must_use]
    pub fn choices<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EnvValue>,
    {
        self.choices = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Human-readable description, used only in error messages.
    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Example value, used only in error messages.
    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Documentation URL, used only in error messages.
    #[must_use]
    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Coerce `raw` and enforce the `choices` constraint, if configured.
    pub fn validate(&self, raw: &str) -> Result<EnvValue, EnvError> {
        let value = self.coerce(raw)?;
        if let Some(choices) = &self.choices {
            if !choices.contains(&value) {
                let admissible = choices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(EnvError::invalid(self.describe(&format!(
                    "Invalid {} input: {raw}, not in [{admissible}]",
                    self.name
                ))));
            }
        }
        Ok(value)
    }

    fn coerce(&self, raw: &str) -> Result<EnvValue, EnvError> {
        match self.kind {
            Kind::Str => Ok(EnvValue::Str(raw.to_owned())),
            Kind::Bool => match raw {
                "0" => Ok(EnvValue::Bool(false)),
                "1" => Ok(EnvValue::Bool(true)),
                _ if raw.eq_ignore_ascii_case("false") => Ok(EnvValue::Bool(false)),
                _ if raw.eq_ignore_ascii_case("true") => Ok(EnvValue::Bool(true)),
                _ => Err(self.invalid_input(raw)),
            },
            Kind::Number => parse_number(raw).ok_or_else(|| self.invalid_input(raw)),
            Kind::Port => match parse_number(raw) {
                Some(EnvValue::Int(port)) if (1..=65535).contains(&port) => {
                    Ok(EnvValue::Int(port))
                }
                _ => Err(self.invalid_input(raw)),
            },
            Kind::Pattern(pattern) => {
                if pattern.is_match(raw) {
                    Ok(EnvValue::Str(raw.to_owned()))
                } else {
                    Err(self.invalid_input(raw))
                }
            }
            Kind::Url => match url::Url::parse(raw) {
                Ok(parsed) if parsed.has_host() => Ok(EnvValue::Str(raw.to_owned())),
                _ => Err(self.invalid_input(raw)),
            },
            Kind::Json => serde_json::from_str::<serde_json::Value>(raw)
                .map(EnvValue::Json)
                .map_err(|_| self.invalid_input(raw)),
        }
    }

    fn invalid_input(&self, raw: &str) -> EnvError {
        EnvError::invalid(self.describe(&format!("Invalid {} input: {raw}", self.name)))
    }

    /// Append the configured metadata to a failure message, omitting unset
    /// fields: `"<message> [<desc> eg. <example> See. <docs>]"`.
    fn describe(&self, message: &str) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(desc) = &self.desc {
            parts.push(desc.clone());
        }
        if let Some(example) = &self.example {
            parts.push(format!("eg. {example}"));
        }
        if let Some(docs) = &self.docs {
            parts.push(format!("See. {docs}"));
        }
        if parts.is_empty() {
            message.to_owned()
        } else {
            format!("{message} [{}]", parts.join(" "))
        }
    }
}

/// Parse a decimal/float literal. Integral finite values within `i64` range
/// come back as `Int`, so `"1e5"` parses to `Int(100000)` and `"1.0"` to
/// `Int(1)`.
#[allow(clippy::cast_possible_truncation)]
fn parse_number(raw: &str) -> Option<EnvValue> {
    let parsed: f64 = raw.trim().parse().ok()?;
    if parsed.is_finite()
        && parsed.fract() == 0.0
        && parsed >= i64::MIN as f64
        && parsed <= i64::MAX as f64
    {
        Some(EnvValue::Int(parsed as i64))
    } else {
        Some(EnvValue::Float(parsed))
    }
}
