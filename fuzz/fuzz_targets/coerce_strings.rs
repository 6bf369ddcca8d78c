#![no_main]

use libfuzzer_sys::fuzz_target;
use scalar_coerce::value::parse_numeric;
use scalar_coerce::{
    coerce_to_bool, coerce_to_float, coerce_to_int, coerce_to_string, enforce_string,
    is_coerceable_to_bool, is_coerceable_to_float, is_coerceable_to_int, CollectingSink, Value,
};

const MAX_INPUT_BYTES: usize = 256;

fn decode_input(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_INPUT_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

/// A predicate that accepts must imply a silent, successful coercion. A
/// predicate that rejects a scalar must imply an error or exactly one warning.
fn check_int(value: &Value) {
    let sink = CollectingSink::new();
    let result = coerce_to_int(value, &sink);
    if is_coerceable_to_int(value) {
        assert!(result.is_ok() && sink.is_empty());
    } else if result.is_ok() {
        assert_eq!(sink.len(), 1);
    }
}

fn check_bool(value: &Value) {
    let sink = CollectingSink::new();
    let result = coerce_to_bool(value, &sink);
    assert!(result.is_ok());
    if is_coerceable_to_bool(value) {
        assert!(sink.is_empty());
    } else {
        assert_eq!(result, Ok(true));
        assert_eq!(sink.len(), 1);
    }
}

fn check_float(value: &Value) {
    assert_eq!(is_coerceable_to_float(value), coerce_to_float(value).is_ok());
}

fuzz_target!(|data: &[u8]| {
    let text = decode_input(data);

    // Numeric strings must survive a float round-trip through their own text.
    if let Some(numeric) = parse_numeric(&text) {
        let rendered = coerce_to_string(&Value::from(numeric.to_f64())).unwrap();
        let reparsed = parse_numeric(&rendered).map(|n| n.to_f64());
        if numeric.to_f64().is_finite() {
            assert_eq!(reparsed, Some(numeric.to_f64()));
        }
    }

    let value = Value::from(text.as_str());
    check_int(&value);
    check_bool(&value);
    check_float(&value);
    assert_eq!(coerce_to_string(&value).as_deref(), Ok(text.as_str()));
    assert_eq!(enforce_string(&value).as_deref(), Ok(text.as_str()));

    // The same bytes reinterpreted as a float exercise the formatter.
    if data.len() >= 8 {
        let mut bits = [0u8; 8];
        bits.copy_from_slice(&data[..8]);
        let float = Value::from(f64::from_le_bytes(bits));
        check_int(&float);
        check_bool(&float);
        check_float(&float);
        let _ = coerce_to_string(&float);
    }
});
