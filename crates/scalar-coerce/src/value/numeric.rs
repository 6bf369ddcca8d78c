use super::Value;

/// Number recovered from a numeric value or numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Int(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    /// Truncates toward zero. Non-finite input yields 0 and finite input
    /// outside the `i64` range saturates.
    #[must_use]
    pub fn to_i64(self) -> i64 {
        match self {
            Numeric::Int(v) => v,
            Numeric::Float(v) => truncate_float(v),
        }
    }

    /// True when the integer conversion keeps the full value.
    #[must_use]
    pub fn is_integral(self) -> bool {
        match self {
            Numeric::Int(_) => true,
            Numeric::Float(v) => truncate_float(v) as f64 == v,
        }
    }
}

#[must_use]
pub fn truncate_float(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// Numeric view of a value: ints, floats and numeric strings.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<Numeric> {
    match value {
        Value::Int(v) => Some(Numeric::Int(*v)),
        Value::Float(v) => Some(Numeric::Float(*v)),
        Value::String(text) => parse_numeric(text),
        _ => None,
    }
}

#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    numeric_value(value).is_some()
}

fn is_numeric_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Parses a numeric string.
///
/// Accepts surrounding whitespace, an optional sign, decimal digits with an
/// optional fraction and an optional exponent. The whole text must be
/// consumed. Integer-shaped text that overflows `i64` is returned as a float.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<Numeric> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && is_numeric_space(bytes[start]) {
        start += 1;
    }
    let mut end = bytes.len();
    while end > start && is_numeric_space(bytes[end - 1]) {
        end -= 1;
    }
    let body = &bytes[start..end];

    let mut pos = 0;
    if matches!(body.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&body[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    let mut is_float = false;
    if body.get(pos) == Some(&b'.') {
        is_float = true;
        pos += 1;
        frac_digits = count_digits(&body[pos..]);
        pos += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(body.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(body.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&body[exp_pos..]);
        if exp_digits == 0 {
            return None;
        }
        is_float = true;
        pos = exp_pos + exp_digits;
    }

    if pos != body.len() {
        return None;
    }

    // The scan above only admits ASCII, so the slice is valid UTF-8.
    let literal = &text[start..end];
    if !is_float {
        if let Ok(v) = literal.parse::<i64>() {
            return Some(Numeric::Int(v));
        }
    }
    literal.parse::<f64>().ok().map(Numeric::Float)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_strings() {
        assert_eq!(parse_numeric("0"), Some(Numeric::Int(0)));
        assert_eq!(parse_numeric("-55"), Some(Numeric::Int(-55)));
        assert_eq!(parse_numeric("+7"), Some(Numeric::Int(7)));
        assert_eq!(parse_numeric("007"), Some(Numeric::Int(7)));
    }

    #[test]
    fn float_strings() {
        assert_eq!(parse_numeric("33.0"), Some(Numeric::Float(33.0)));
        assert_eq!(parse_numeric(".5"), Some(Numeric::Float(0.5)));
        assert_eq!(parse_numeric("5."), Some(Numeric::Float(5.0)));
        assert_eq!(parse_numeric("1e3"), Some(Numeric::Float(1000.0)));
        assert_eq!(parse_numeric("-2.5E-1"), Some(Numeric::Float(-0.25)));
    }

    #[test]
    fn surrounding_whitespace_is_allowed() {
        assert_eq!(parse_numeric("  42"), Some(Numeric::Int(42)));
        assert_eq!(parse_numeric("42 \n"), Some(Numeric::Int(42)));
        assert_eq!(parse_numeric("\t1.5\r"), Some(Numeric::Float(1.5)));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for text in [
            "", " ", "failed", "39hello", "4 2", ".", "-", "+.", "e5", "1e", "1e+", "0x1A",
            "inf", "NAN", "1_000", "١٢",
        ] {
            assert_eq!(parse_numeric(text), None, "{text:?}");
        }
    }

    #[test]
    fn overflowing_integer_text_becomes_float() {
        assert_eq!(
            parse_numeric("99999999999999999999"),
            Some(Numeric::Float(1e20))
        );
    }

    #[test]
    fn integral_check_and_truncation() {
        assert!(Numeric::Float(33.0).is_integral());
        assert!(!Numeric::Float(39.5).is_integral());
        assert!(!Numeric::Float(f64::NAN).is_integral());
        assert!(!Numeric::Float(f64::INFINITY).is_integral());
        assert_eq!(Numeric::Float(-1.75).to_i64(), -1);
        assert_eq!(Numeric::Float(f64::NAN).to_i64(), 0);
        assert_eq!(Numeric::Float(1e30).to_i64(), i64::MAX);
    }

    #[test]
    fn numeric_values() {
        assert!(is_numeric(&Value::from(3)));
        assert!(is_numeric(&Value::from(f64::NAN)));
        assert!(is_numeric(&Value::from(" 3 ")));
        assert!(!is_numeric(&Value::from(true)));
        assert!(!is_numeric(&Value::Null));
    }
}
