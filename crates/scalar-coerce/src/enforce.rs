//! Exact-type gates for API boundaries.
//!
//! Nothing is converted here: numeric strings stay strings and stringable
//! objects are not strings. The single exception is `enforce_float`, which
//! widens ints.

#![allow(missing_docs)]

use crate::error::{ScalarType, TypeMismatch};
use crate::value::{export_value, Value};

fn not_exact(value: &Value, target: ScalarType) -> TypeMismatch {
    TypeMismatch::NotExactType {
        target,
        rendered: export_value(value),
    }
}

pub fn enforce_int(value: &Value) -> Result<i64, TypeMismatch> {
    match value {
        Value::Int(v) => Ok(*v),
        _ => Err(not_exact(value, ScalarType::Int)),
    }
}

pub fn enforce_float(value: &Value) -> Result<f64, TypeMismatch> {
    match value {
        Value::Float(v) => Ok(*v),
        Value::Int(v) => Ok(*v as f64),
        _ => Err(not_exact(value, ScalarType::Float)),
    }
}

pub fn enforce_bool(value: &Value) -> Result<bool, TypeMismatch> {
    match value {
        Value::Bool(v) => Ok(*v),
        _ => Err(not_exact(value, ScalarType::Bool)),
    }
}

pub fn enforce_string(value: &Value) -> Result<String, TypeMismatch> {
    match value {
        Value::String(s) => Ok(s.to_string()),
        _ => Err(not_exact(value, ScalarType::String)),
    }
}
