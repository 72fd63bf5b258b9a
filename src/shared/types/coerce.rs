//! Lenient numeric parsing for query-string input
//!
//! Query values arrive as raw strings. Two coercions are used:
//!
//! - [`coerce_number`] mirrors JavaScript `Number(str)`: the whole (trimmed)
//!   string must be a numeric literal, otherwise the result is `NaN`.
//! - [`parse_int_prefix`] mirrors `parseInt(str)`: leading whitespace and an
//!   optional sign, then as many digits as are present. A `0x` prefix switches
//!   to hexadecimal.

/// Coerce a raw string to `f64` the way `Number(str)` does.
///
/// Returns `NaN` for anything that is not a complete numeric literal.
/// An empty (or all-whitespace) string coerces to `0`.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // `f64::from_str` also accepts "inf" and "NaN" spellings, which Number() does not
    let is_decimal_literal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    // No sign may follow the prefix: `Number("0x+1")` is NaN
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}

/// Parse the leading integer of a string the way `parseInt(str)` does.
///
/// Returns `None` when no digits follow the optional sign (and `0x` prefix).
/// Values that do not fit in `i64` saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digit_count = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digit_count == 0 {
        return None;
    }
    let digits = &rest[..digit_count];

    let value = match i64::from_str_radix(digits, radix) {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_accepts_plain_literals() {
        assert_eq!(coerce_number("10"), 10.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number(""), 0.0);
    }

    #[test]
    fn number_rejects_partial_literals() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("1-2").is_nan());
    }

    #[test]
    fn radix_literal_takes_no_sign() {
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("0x-1").is_nan());
        assert!(coerce_number("0b2").is_nan());
        assert!(coerce_number("-0x10").is_nan());
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert_eq!(coerce_number("0x10000000000000000"), 18446744073709551616.0);
    }

    #[test]
    fn int_prefix_reads_leading_digits() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("1.9"), Some(1));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+5"), Some(5));
    }

    #[test]
    fn int_prefix_honours_hex_prefix() {
        assert_eq!(parse_int_prefix("0x2"), Some(2));
        assert_eq!(parse_int_prefix("0X1fz"), Some(31));
        assert_eq!(parse_int_prefix("-0x10"), Some(-16));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("0b101"), Some(0));
    }

    #[test]
    fn int_prefix_without_digits_is_none() {
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("x12"), None);
    }

    #[test]
    fn int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
    }
}
