use super::{format_float, ArrayKey, ArrayValue, ObjectValue, Value};

const PROPERTY_INDENT: usize = 3;

/// Structural dump of a value for error messages.
///
/// Strings are single-quoted, booleans are `true`/`false`, null (and any
/// resource handle) is `NULL`, arrays and objects are listed entry by entry.
#[must_use]
pub fn export_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Int(v) => out.push_str(&v.to_string()),
        Value::Float(v) => out.push_str(&export_float(*v)),
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::String(s) => write_quoted(out, s),
        Value::Array(array) => write_array(out, array, indent),
        Value::Object(object) => write_object(out, object, indent),
        Value::Stringable(object) => {
            out.push('\\');
            out.push_str(object.class_name());
            out.push_str("::__set_state(array(\n");
            pad(out, indent);
            out.push_str("))");
        }
        Value::Resource(_) | Value::Null => out.push_str("NULL"),
    }
}

fn export_float(value: f64) -> String {
    let mut text = format_float(value);
    if value.is_finite() && !text.contains(['.', 'E']) {
        text.push_str(".0");
    }
    text
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for ch in text.chars() {
        if matches!(ch, '\\' | '\'') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
}

fn write_key(out: &mut String, key: &ArrayKey) {
    match key {
        ArrayKey::Int(v) => out.push_str(&v.to_string()),
        ArrayKey::String(s) => write_quoted(out, s),
    }
}

fn is_compound(value: &Value) -> bool {
    matches!(
        value,
        Value::Array(_) | Value::Object(_) | Value::Stringable(_)
    )
}

fn write_entry(out: &mut String, value: &Value, indent: usize) {
    if is_compound(value) {
        out.push_str(" =>\n");
        pad(out, indent);
        write_value(out, value, indent);
    } else {
        out.push_str(" => ");
        write_value(out, value, indent);
    }
    out.push_str(",\n");
}

fn write_array(out: &mut String, array: &ArrayValue, indent: usize) {
    out.push_str("array (\n");
    for (key, value) in &array.entries {
        pad(out, indent + 2);
        write_key(out, key);
        write_entry(out, value, indent + 2);
    }
    pad(out, indent);
    out.push(')');
}

fn write_object(out: &mut String, object: &ObjectValue, indent: usize) {
    let close = if object.is_plain() {
        out.push_str("(object) array(\n");
        ")"
    } else {
        out.push('\\');
        out.push_str(&object.class_name);
        out.push_str("::__set_state(array(\n");
        "))"
    };
    for (name, value) in &object.properties {
        pad(out, indent + PROPERTY_INDENT);
        write_quoted(out, name);
        write_entry(out, value, indent + PROPERTY_INDENT);
    }
    pad(out, indent);
    out.push_str(close);
}

fn pad(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(' ');
    }
}
