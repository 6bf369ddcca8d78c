use super::Value;

/// Decimal exponents outside `[-5, 15)` switch to exponent notation.
const MIN_FIXED_EXPONENT: i32 = -4;
const MAX_FIXED_EXPONENT: i32 = 15;

/// Canonical text of a scalar, `None` for every other category.
///
/// Booleans render as `"1"` and `""`.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Int(v) => Some(v.to_string()),
        Value::Float(v) => Some(format_float(*v)),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::String(s) => Some(s.to_string()),
        _ => None,
    }
}

/// Shortest round-trip decimal text of a float.
///
/// Integral values carry no fraction (`33.0` is `"33"`), very large and
/// very small magnitudes use `1.5E+20` style, non-finite values are `NAN`,
/// `INF` and `-INF`.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let (negative, digits, exponent) = decompose(value);
    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if !(MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
        return out;
    }

    if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(&digits);
        return out;
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        out.push_str(&digits);
        for _ in digits.len()..int_len {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..int_len]);
        out.push('.');
        out.push_str(&digits[int_len..]);
    }
    out
}

/// Splits a finite, non-zero float into sign, significant digits and decimal
/// exponent of the first digit.
fn decompose(value: f64) -> (bool, String, i32) {
    // `{:e}` yields the shortest round-trip mantissa, e.g. `-3.95e1`.
    let rendered = format!("{:e}", value.abs());
    let (mantissa, exponent) = rendered
        .split_once('e')
        .unwrap_or((rendered.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    (value.is_sign_negative(), digits, exponent)
}
