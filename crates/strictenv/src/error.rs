//! Environment validation error types.

use thiserror::Error;

/// Errors raised while resolving an environment against a schema.
///
/// Per-key failures are always [`EnvError::Invalid`] or [`EnvError::Missing`];
/// [`EnvError::Failed`] is the aggregate failure the default reporter raises
/// once the whole pass is over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A value was present but failed coercion or a `choices` constraint.
    #[error("{message}")]
    Invalid { message: String },

    /// A required key was absent from the environment and no default was
    /// configured. Carries the offending key so reporters can bucket it.
    #[error("missing environment key")]
    Missing { key: String },

    /// Aggregate failure: at least one key failed and no error callback was
    /// configured to absorb the batch.
    #[error("Environment validation failed")]
    Failed,
}

impl EnvError {
    /// Build an invalid-format error from an already formatted message.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Build a missing-key error for `key`.
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Whether this is a missing-key error.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}
