//! The orchestration loop: read each schema key, validate, aggregate.

use std::collections::{BTreeMap, HashMap};

use crate::error::EnvError;
use crate::reporter::{DefaultReporter, Errors, Reporter};
use crate::result::EnvResult;
use crate::validator::Validator;
use crate::value::EnvValue;

/// The caller-supplied schema: configuration key to its validator.
pub type Schema = BTreeMap<String, Validator>;

/// A read-only source of raw key/value pairs.
///
/// The engine only ever looks keys up; it never enumerates or mutates the
/// source. Implemented for the std string maps; use [`process_env`] to
/// snapshot the process environment into one.
pub trait Environment {
    /// The raw string for `key`, if the source defines it.
    fn raw(&self, key: &str) -> Option<&str>;
}

impl Environment for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Environment for HashMap<String, String> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Snapshot the process environment into a map usable as an [`Environment`].
///
/// Variables whose name or value is not valid Unicode are skipped.
pub fn process_env() -> BTreeMap<String, String> {
    std::env::vars().collect()
}

/// Resolve `schema` against `environment` with the fail-fast default
/// reporter: on any failure the summary is logged and
/// [`EnvError::Failed`] is returned.
pub fn resolve<E: Environment>(environment: &E, schema: &Schema) -> Result<EnvResult, EnvError> {
    resolve_with(environment, schema, &DefaultReporter::new())
}

/// Resolve `schema` against `environment`, surfacing failures through
/// `reporter`.
///
/// Every key is attempted regardless of earlier failures; per-key outcomes
/// are aggregated and handed to the reporter as a single batch once the pass
/// is complete. If the reporter returns `Ok(())` despite failures (the
/// delegation model), the result is best-effort: failed keys are absent.
pub fn resolve_with<E, R>(
    environment: &E,
    schema: &Schema,
    reporter: &R,
) -> Result<EnvResult, EnvError>
where
    E: Environment,
    R: Reporter,
{
    let mut cleaned: BTreeMap<String, EnvValue> = BTreeMap::new();
    let mut errors = Errors::new();

    for (key, validator) in schema {
        match resolve_key(environment, key, validator) {
            Ok(value) => {
                cleaned.insert(key.clone(), value);
            }
            Err(error) => {
                errors.insert(key.clone(), error);
            }
        }
    }

    reporter.report(&errors)?;
    Ok(EnvResult::new(cleaned))
}

/// Resolve one key: environment hit goes through validation, a miss falls
/// back to the validator's default.
///
/// Defaults are recorded as-is, without re-validation: they are already
/// typed, and feeding e.g. a boolean default back through a pattern
/// validator would be meaningless. Presence of a default is what makes the
/// key optional, so `false`, `0`, and the empty string all count.
fn resolve_key<E: Environment>(
    environment: &E,
    key: &str,
    validator: &Validator,
) -> Result<EnvValue, EnvError> {
    match environment.raw(key) {
        Some(raw) => validator.validate(raw),
        None => validator
            .default
            .clone()
            .ok_or_else(|| EnvError::missing(key)),
    }
}
