//! # strictenv
//!
//! Typed, validated, immutable environment configuration.
//!
//! A schema maps each configuration key to a [`Validator`]; [`resolve`] reads
//! every key from an opaque string-keyed [`Environment`], coerces it to its
//! typed shape, aggregates all failures into one batch, and returns a
//! read-only [`EnvResult`]. The pass is exhaustive: one bad key never hides
//! the others.
//!
//! Failure policy lives in the [`Reporter`]. The default logs a structured
//! summary and fails fast with [`EnvError::Failed`]; supplying an `on_error`
//! callback turns that into delegation, where the callback receives the full
//! error map and resolution returns a best-effort result.
//!
//! # Usage
//!
//! ```
//! use strictenv::{process_env, resolve, Schema, Validator};
//!
//! let schema = Schema::from([
//!     ("HOST".to_owned(), Validator::string()),
//!     ("PORT".to_owned(), Validator::port().default(8000)),
//!     ("DEBUG".to_owned(), Validator::boolean().default(false)),
//! ]);
//!
//! match resolve(&process_env(), &schema) {
//!     Ok(env) => {
//!         let port = env.get_int("PORT").unwrap_or(8000);
//!         let _ = port;
//!     }
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```
//!
//! Validators carry optional metadata that only shows up in error messages:
//!
//! ```
//! use strictenv::Validator;
//!
//! let validator = Validator::port()
//!     .desc("HTTP listen port")
//!     .example("8080")
//!     .docs("https://example.com/docs/config");
//! let error = validator.validate("65536").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Invalid port input: 65536 [HTTP listen port eg. 8080 See. https://example.com/docs/config]"
//! );
//! ```

mod error;
mod reporter;
mod resolve;
mod result;
mod validator;
mod value;

pub use error::EnvError;
pub use reporter::{DefaultReporter, Errors, OnError, Reporter};
pub use resolve::{process_env, resolve, resolve_with, Environment, Schema};
pub use result::EnvResult;
pub use validator::Validator;
pub use value::EnvValue;
