//! Coercion of loosely typed values to primitive types.
//!
//! Each `coerce_to_*` function has an `is_coerceable_to_*` predicate that
//! accepts exactly the inputs the coercion converts silently. The int and
//! bool predicates therefore reject inputs their coercion still converts
//! after recording a warning: `is_coerceable_to_int(39.5)` is `false` while
//! `coerce_to_int(39.5)` returns `39`.

mod boolean;
mod numeric;
mod string;

pub use boolean::{coerce_to_bool, is_coerceable_to_bool};
pub use numeric::{coerce_to_float, coerce_to_int, is_coerceable_to_float, is_coerceable_to_int};
pub use string::{coerce_to_string, is_coerceable_to_string};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{ScalarType, TypeMismatch};
use crate::value::Value;

fn non_scalar(value: &Value, target: ScalarType) -> TypeMismatch {
    TypeMismatch::NonScalar {
        target,
        type_name: value.type_name(),
    }
}

/// Coercion entry point bound to one diagnostic sink.
#[derive(Debug, Clone, Default)]
pub struct Coercer<S = TracingSink> {
    sink: S,
}

impl<S: DiagnosticSink> Coercer<S> {
    /// Creates a coercer that reports warnings to `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Sink receiving this coercer's warnings.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// See [`coerce_to_int`].
    pub fn to_int(&self, value: &Value) -> Result<i64, TypeMismatch> {
        coerce_to_int(value, &self.sink)
    }

    /// See [`coerce_to_float`].
    pub fn to_float(&self, value: &Value) -> Result<f64, TypeMismatch> {
        coerce_to_float(value)
    }

    /// See [`coerce_to_bool`].
    pub fn to_bool(&self, value: &Value) -> Result<bool, TypeMismatch> {
        coerce_to_bool(value, &self.sink)
    }

    /// See [`coerce_to_string`].
    pub fn to_string(&self, value: &Value) -> Result<String, TypeMismatch> {
        coerce_to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, WarningCategory};

    #[test]
    fn coercer_routes_warnings_to_its_sink() {
        let coercer = Coercer::new(CollectingSink::new());
        assert_eq!(coercer.to_int(&Value::from(39.5)), Ok(39));
        assert_eq!(coercer.to_bool(&Value::from("yes")), Ok(true));
        assert_eq!(coercer.to_float(&Value::from("1e3")), Ok(1000.0));
        assert_eq!(coercer.to_string(&Value::from(false)), Ok(String::new()));

        let categories: Vec<_> = coercer
            .sink()
            .warnings()
            .into_iter()
            .map(|warning| warning.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                WarningCategory::PrecisionLossInt,
                WarningCategory::PrecisionLossBoolString
            ]
        );
    }

    #[test]
    fn default_coercer_uses_tracing_sink() {
        let coercer: Coercer = Coercer::default();
        assert_eq!(coercer.to_bool(&Value::from(7)), Ok(true));
    }
}
