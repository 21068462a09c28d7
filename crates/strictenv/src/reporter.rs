//! Reporters: how aggregated per-key failures surface.
//!
//! The orchestrator never escalates individual key failures; it hands the
//! whole batch to a [`Reporter`] once the pass is complete. The reporter is
//! the sole decision point: the default raises a generic failure (fail-fast),
//! or delegates to a caller-supplied callback and returns normally.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::EnvError;

/// Aggregated per-key failures, keyed by environment variable name.
pub type Errors = BTreeMap<String, EnvError>;

/// Callback invoked with the full error map instead of raising.
pub type OnError = Box<dyn Fn(&Errors) + Send + Sync>;

/// Decides how aggregated failures are surfaced.
pub trait Reporter {
    /// Handle the batch of failures from one resolution pass.
    ///
    /// An empty map means the pass succeeded and must be a no-op. Returning
    /// an error aborts resolution; returning `Ok(())` lets the caller receive
    /// a best-effort result built from the keys that succeeded.
    fn report(&self, errors: &Errors) -> Result<(), EnvError>;
}

/// Default reporter: logs a structured summary at error severity, then either
/// raises [`EnvError::Failed`] or, when an `on_error` callback is configured,
/// delegates the batch to it and returns normally.
#[derive(Default)]
pub struct DefaultReporter {
    on_error: Option<OnError>,
}

impl fmt::Debug for DefaultReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultReporter")
            .field("on_error", &self.on_error.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl DefaultReporter {
    /// A fail-fast reporter with no callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// A delegating reporter: `on_error` is invoked exactly once with the
    /// full error map, and resolution does not abort.
    pub fn with_on_error(on_error: impl Fn(&Errors) + Send + Sync + 'static) -> Self {
        Self {
            on_error: Some(Box::new(on_error)),
        }
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, errors: &Errors) -> Result<(), EnvError> {
        if errors.is_empty() {
            return Ok(());
        }

        tracing::error!("{}", summarize(errors));

        match &self.on_error {
            Some(on_error) => {
                on_error(errors);
                Ok(())
            }
            None => Err(EnvError::Failed),
        }
    }
}

/// Render the two-section summary block: invalid keys first, then missing
/// keys, each section omitted when empty, bounded by separator rules.
fn summarize(errors: &Errors) -> String {
    let rule = "=".repeat(100);
    let mut missing: Vec<String> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();

    for (key, error) in errors {
        if error.is_missing() {
            missing.push(format!("\t{key}: {error} (required)"));
        } else {
            invalid.push(format!("\t{key}: {error} (invalid format)"));
        }
    }

    let mut lines = vec![rule.clone()];
    if !invalid.is_empty() {
        lines.push("Invalid environment variables:".to_owned());
        lines.extend(invalid);
    }
    if !missing.is_empty() {
        lines.push("Missing environment variables:".to_owned());
        lines.extend(missing);
    }
    lines.push(rule);
    lines.join("\n")
}
