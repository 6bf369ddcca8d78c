#![allow(dead_code)]

use scalar_coerce::{ArrayValue, ObjectValue, ResourceValue, Stringable, Value};

/// Object whose string form is `amazing`.
#[derive(Debug)]
pub struct Amazing;

impl Stringable for Amazing {
    fn convert_to_string(&self) -> String {
        "amazing".to_string()
    }
}

pub fn amazing() -> Value {
    Value::stringable(Amazing)
}

pub fn empty_array() -> Value {
    Value::from(ArrayValue::new())
}

pub fn empty_record() -> Value {
    Value::from(ObjectValue::plain())
}

pub fn stream_handle() -> Value {
    Value::from(ResourceValue::new(1, "stream"))
}

/// Every non-scalar input, paired with the category name used in messages.
pub fn non_scalars() -> Vec<(Value, &'static str)> {
    vec![
        (amazing(), "object"),
        (empty_array(), "array"),
        (empty_record(), "object"),
        (stream_handle(), "resource"),
        (Value::Null, "NULL"),
    ]
}

/// Outcome expected from a coercion table entry.
#[derive(Debug, Clone)]
pub enum Expect<T> {
    Ok(T),
    Err(&'static str),
}
