use crate::error::{ScalarType, TypeMismatch};
use crate::value::{scalar_to_string, Value};

use super::non_scalar;

/// Coerces to string.
///
/// Stringable objects return their own conversion. Scalars use their
/// canonical text: `true` is `"1"`, `false` is `""`, floats use the shortest
/// round-trip form. Never warns.
pub fn coerce_to_string(value: &Value) -> Result<String, TypeMismatch> {
    if let Value::Stringable(object) = value {
        return Ok(object.convert_to_string());
    }
    scalar_to_string(value).ok_or_else(|| non_scalar(value, ScalarType::String))
}

#[must_use]
pub fn is_coerceable_to_string(value: &Value) -> bool {
    matches!(value, Value::Stringable(_)) || value.is_scalar()
}
