use crate::diagnostics::{DiagnosticSink, WarningCategory};
use crate::error::{ScalarType, TypeMismatch};
use crate::value::{format_float, Value};

use super::non_scalar;

/// How a scalar maps onto a bool.
enum BoolSource {
    /// `true`, `false`, 0, 1, 0.0, 1.0, `""`, `"0"` or `"1"`.
    Canonical(bool),
    /// Any other scalar; truthy.
    Truthy(WarningCategory),
}

fn classify(value: &Value) -> Result<BoolSource, TypeMismatch> {
    let source = match value {
        Value::Bool(v) => BoolSource::Canonical(*v),
        Value::Int(0) => BoolSource::Canonical(false),
        Value::Int(1) => BoolSource::Canonical(true),
        Value::Int(_) => BoolSource::Truthy(WarningCategory::PrecisionLossBoolInt),
        // Numeric comparison, so -0.0 counts as 0. NaN and INF are truthy.
        Value::Float(v) if *v == 0.0 => BoolSource::Canonical(false),
        Value::Float(v) if *v == 1.0 => BoolSource::Canonical(true),
        Value::Float(_) => BoolSource::Truthy(WarningCategory::PrecisionLossBoolFloat),
        Value::String(s) => match s.as_str() {
            "" | "0" => BoolSource::Canonical(false),
            "1" => BoolSource::Canonical(true),
            _ => BoolSource::Truthy(WarningCategory::PrecisionLossBoolString),
        },
        _ => return Err(non_scalar(value, ScalarType::Bool)),
    };
    Ok(source)
}

fn truthy_message(value: &Value) -> String {
    match value {
        Value::Int(v) => {
            format!("Implicit conversion from int {v} to true, only 0 and 1 are allowed")
        }
        Value::Float(v) => format!(
            "Implicit conversion from float {} to true, only 0 and 1 are allowed",
            format_float(*v)
        ),
        Value::String(s) => format!(
            "Implicit conversion from string \"{s}\" to true, only \"\", \"0\" and \"1\" are allowed"
        ),
        _ => String::new(),
    }
}

/// Coerces to bool.
///
/// Canonical sources convert silently. Every other scalar is truthy: it
/// records a warning in the matching `PrecisionLossBool*` category and
/// returns `true`. Only non-scalars fail.
pub fn coerce_to_bool(value: &Value, sink: &dyn DiagnosticSink) -> Result<bool, TypeMismatch> {
    match classify(value)? {
        BoolSource::Canonical(v) => Ok(v),
        BoolSource::Truthy(category) => {
            sink.record(category, &truthy_message(value));
            Ok(true)
        }
    }
}

/// True only for canonical bool sources.
#[must_use]
pub fn is_coerceable_to_bool(value: &Value) -> bool {
    matches!(classify(value), Ok(BoolSource::Canonical(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;

    #[test]
    fn canonical_sources_are_silent() {
        let sink = CollectingSink::new();
        let cases = [
            (Value::from("0"), false),
            (Value::from("1"), true),
            (Value::from(""), false),
            (Value::from(0), false),
            (Value::from(1), true),
            (Value::from(0.0), false),
            (Value::from(-0.0), false),
            (Value::from(1.0), true),
            (Value::from(true), true),
            (Value::from(false), false),
        ];
        for (input, expected) in cases {
            assert!(is_coerceable_to_bool(&input), "{input:?}");
            assert_eq!(coerce_to_bool(&input, &sink), Ok(expected), "{input:?}");
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn truthy_sources_warn_once_each() {
        let sink = CollectingSink::new();
        for input in [
            Value::from("0.0"),
            Value::from(2),
            Value::from(f64::NAN),
        ] {
            assert!(!is_coerceable_to_bool(&input));
            assert_eq!(coerce_to_bool(&input, &sink), Ok(true));
        }
        assert_eq!(
            sink.messages(),
            vec![
                "Implicit conversion from string \"0.0\" to true, only \"\", \"0\" and \"1\" are allowed",
                "Implicit conversion from int 2 to true, only 0 and 1 are allowed",
                "Implicit conversion from float NAN to true, only 0 and 1 are allowed",
            ]
        );
    }

    #[test]
    fn non_scalars_fail() {
        let sink = CollectingSink::new();
        assert_eq!(
            coerce_to_bool(&Value::Null, &sink).unwrap_err().to_string(),
            "Non-scalar type NULL cannot be coerced to bool"
        );
        assert!(!is_coerceable_to_bool(&Value::Null));
    }
}
