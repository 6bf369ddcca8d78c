//! `scalar-coerce` - Strict scalar coercion and exact-type enforcement.
//!
//! Loosely typed sources (form input, configuration, weakly typed stores)
//! hand over values whose runtime category is only known at call time. This
//! crate turns such a [`Value`] into a concrete `i64`, `f64`, `bool` or
//! `String` under a small, fixed policy:
//!
//! - **Coercion** (`coerce_to_*`): converts, accepting some lossy or
//!   surprising conversions while reporting a non-fatal warning to a
//!   [`DiagnosticSink`], and rejecting conversions that have no defined
//!   meaning with a [`TypeMismatch`].
//! - **Predicates** (`is_coerceable_to_*`): dry runs of the coercion group
//!   that never warn and never fail. They answer `false` for every input that
//!   would have produced a warning, so they are stricter than the coercions.
//! - **Enforcement** (`enforce_*`): identity gates that only accept a value of
//!   exactly the target type (plus int-to-float widening).
//!
//! # Example
//!
//! ```
//! use scalar_coerce::{coerce_to_bool, coerce_to_int, enforce_float, CollectingSink, Value};
//!
//! let sink = CollectingSink::new();
//!
//! assert_eq!(coerce_to_int(&Value::from("33.0"), &sink), Ok(33));
//! assert_eq!(coerce_to_bool(&Value::from(-33), &sink), Ok(true));
//! assert_eq!(
//!     sink.messages(),
//!     vec!["Implicit conversion from int -33 to true, only 0 and 1 are allowed".to_string()]
//! );
//!
//! assert_eq!(enforce_float(&Value::from(5)), Ok(5.0));
//! assert!(enforce_float(&Value::from("5")).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Coercion functions and convertibility predicates.
pub mod coerce;
/// Warning configuration loading.
pub mod config;
/// Non-fatal warning channel.
pub mod diagnostics;
/// Exact-type enforcement gates.
pub mod enforce;
/// Coercion errors.
pub mod error;
/// Runtime value taxonomy, numeric strings and text rendering.
pub mod value;

pub use coerce::{
    coerce_to_bool, coerce_to_float, coerce_to_int, coerce_to_string, is_coerceable_to_bool,
    is_coerceable_to_float, is_coerceable_to_int, is_coerceable_to_string, Coercer,
};
pub use config::CoerceConfig;
pub use diagnostics::{
    CollectingSink, DiagnosticSink, FilteredSink, NullSink, TracingSink, Warning, WarningCategory,
};
pub use enforce::{enforce_bool, enforce_float, enforce_int, enforce_string};
pub use error::{ConfigError, Operation, ScalarType, TypeMismatch};
pub use value::{ArrayKey, ArrayValue, ObjectValue, ResourceValue, Stringable, Value};
