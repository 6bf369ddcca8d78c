use crate::diagnostics::{DiagnosticSink, WarningCategory};
use crate::error::{ScalarType, TypeMismatch};
use crate::value::{numeric_value, scalar_to_string, Numeric, Value};

use super::non_scalar;

/// Numeric view of a scalar that is not a bool.
fn require_numeric(value: &Value, target: ScalarType) -> Result<Numeric, TypeMismatch> {
    numeric_value(value).ok_or_else(|| TypeMismatch::NonNumeric {
        target,
        value: scalar_to_string(value).unwrap_or_default().into(),
    })
}

/// Coerces to int.
///
/// Bools become 0 or 1. Numbers and numeric strings are truncated toward
/// zero; when that drops a fractional part a
/// [`WarningCategory::PrecisionLossInt`] warning is recorded and the
/// truncated value is still returned.
pub fn coerce_to_int(value: &Value, sink: &dyn DiagnosticSink) -> Result<i64, TypeMismatch> {
    if !value.is_scalar() {
        return Err(non_scalar(value, ScalarType::Int));
    }
    if let Value::Bool(v) = value {
        return Ok(i64::from(*v));
    }

    let numeric = require_numeric(value, ScalarType::Int)?;
    if !numeric.is_integral() {
        let text = scalar_to_string(value).unwrap_or_default();
        sink.record(
            WarningCategory::PrecisionLossInt,
            &format!(
                "Float with fractional part cannot be coerced to int without information loss: {text}"
            ),
        );
    }
    Ok(numeric.to_i64())
}

/// Coerces to float. Bools become 0.0 or 1.0; never warns.
pub fn coerce_to_float(value: &Value) -> Result<f64, TypeMismatch> {
    if !value.is_scalar() {
        return Err(non_scalar(value, ScalarType::Float));
    }
    if let Value::Bool(v) = value {
        return Ok(if *v { 1.0 } else { 0.0 });
    }

    require_numeric(value, ScalarType::Float).map(Numeric::to_f64)
}

/// True for bools and integral numbers or numeric strings.
#[must_use]
pub fn is_coerceable_to_int(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        _ => numeric_value(value).is_some_and(Numeric::is_integral),
    }
}

/// True for bools, numbers and numeric strings.
#[must_use]
pub fn is_coerceable_to_float(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        _ => numeric_value(value).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::value::{ArrayValue, ObjectValue};

    #[test]
    fn integral_sources_do_not_warn() {
        let sink = CollectingSink::new();
        assert_eq!(coerce_to_int(&Value::from("0"), &sink), Ok(0));
        assert_eq!(coerce_to_int(&Value::from(0.0), &sink), Ok(0));
        assert_eq!(coerce_to_int(&Value::from("33.0"), &sink), Ok(33));
        assert_eq!(coerce_to_int(&Value::from(" 12 "), &sink), Ok(12));
        assert_eq!(coerce_to_int(&Value::from("1e3"), &sink), Ok(1000));
        assert_eq!(coerce_to_int(&Value::from(true), &sink), Ok(1));
        assert_eq!(coerce_to_int(&Value::from(false), &sink), Ok(0));
        assert!(sink.is_empty());
    }

    #[test]
    fn fractional_string_warns_with_original_text() {
        let sink = CollectingSink::new();
        assert_eq!(coerce_to_int(&Value::from("-7.90"), &sink), Ok(-7));
        assert_eq!(
            sink.messages(),
            vec!["Float with fractional part cannot be coerced to int without information loss: -7.90"]
        );
        assert!(!is_coerceable_to_int(&Value::from("-7.90")));
    }

    #[test]
    fn non_finite_floats_truncate_to_zero_and_warn() {
        let sink = CollectingSink::new();
        assert_eq!(coerce_to_int(&Value::from(f64::NAN), &sink), Ok(0));
        assert_eq!(coerce_to_int(&Value::from(f64::INFINITY), &sink), Ok(0));
        assert_eq!(
            sink.messages(),
            vec![
                "Float with fractional part cannot be coerced to int without information loss: NAN",
                "Float with fractional part cannot be coerced to int without information loss: INF",
            ]
        );
    }

    #[test]
    fn non_numeric_and_non_scalar_errors() {
        let sink = CollectingSink::new();
        assert_eq!(
            coerce_to_int(&Value::from("failed"), &sink)
                .unwrap_err()
                .to_string(),
            "Non-numeric value \"failed\" cannot be coerced to int"
        );
        assert_eq!(
            coerce_to_float(&Value::from(ArrayValue::new()))
                .unwrap_err()
                .to_string(),
            "Non-scalar type array cannot be coerced to float"
        );
        assert_eq!(
            coerce_to_float(&Value::from(ObjectValue::plain())),
            Err(TypeMismatch::NonScalar {
                target: ScalarType::Float,
                type_name: "object",
            })
        );
    }

    #[test]
    fn float_widening_and_parsing() {
        assert_eq!(coerce_to_float(&Value::from(13)), Ok(13.0));
        assert_eq!(coerce_to_float(&Value::from(-55)), Ok(-55.0));
        assert_eq!(coerce_to_float(&Value::from("33.0")), Ok(33.0));
        assert_eq!(coerce_to_float(&Value::from(".25")), Ok(0.25));
        assert_eq!(coerce_to_float(&Value::from(true)), Ok(1.0));
        assert!(is_coerceable_to_float(&Value::from(39.5)));
        assert!(!is_coerceable_to_float(&Value::from("39hello")));
    }
}
