//! Display formatting for operands
//!
//! Groups the integer part with `,` every three digits (en-US) and appends
//! the decimal part exactly as typed, so a trailing `.` or trailing zeros
//! stay visible while the user is still entering them.

use crate::core::number::{parse_float, shortest_digits};

/// Formats an operand for display
///
/// Returns `None` for a missing operand so the front end renders nothing.
///
/// ```
/// use keycalc::core::format::format_operand;
///
/// assert_eq!(format_operand(Some("1234")).as_deref(), Some("1,234"));
/// assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
/// assert_eq!(format_operand(None), None);
/// ```
#[must_use]
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    let (integer, decimal) = match operand.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (operand, None),
    };

    // ".5" groups as "0"; a bare "" still reads as NaN
    let value = if integer.is_empty() && decimal.is_some() {
        0.0
    } else {
        parse_float(integer)
    };
    let grouped = group_integer(value);

    Some(match decimal {
        Some(decimal) => format!("{grouped}.{decimal}"),
        None => grouped,
    })
}

/// Rounds to an integer (half away from zero) and inserts thousands separators
fn group_integer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = value.round();
    let digits = integer_digits(rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Plain digits of a non-negative integral value
///
/// Uses the shortest round-trip significand padded with zeros, so values past
/// 2^53 show the digits the operand holds rather than the exact binary value.
fn integer_digits(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (mut digits, n) = shortest_digits(value);
    let width = usize::try_from(n).unwrap_or(0);
    if width > digits.len() {
        digits.push_str(&"0".repeat(width - digits.len()));
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(operand: &str) -> String {
        format_operand(Some(operand)).unwrap_or_default()
    }

    #[test]
    fn test_format_none_is_none() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn test_format_small_integers_unchanged() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("7"), "7");
        assert_eq!(fmt("999"), "999");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(fmt("1234"), "1,234");
        assert_eq!(fmt("123456"), "123,456");
        assert_eq!(fmt("1234567"), "1,234,567");
        assert_eq!(fmt("999999999999999"), "999,999,999,999,999");
    }

    #[test]
    fn test_format_keeps_decimal_part_verbatim() {
        assert_eq!(fmt("1234.5"), "1,234.5");
        assert_eq!(fmt("1234.500"), "1,234.500");
        assert_eq!(fmt("0.05"), "0.05");
    }

    #[test]
    fn test_format_trailing_decimal_point() {
        assert_eq!(fmt("12."), "12.");
        assert_eq!(fmt("1000."), "1,000.");
    }

    #[test]
    fn test_format_empty_integer_part_is_zero() {
        assert_eq!(fmt(".5"), "0.5");
        assert_eq!(fmt("."), "0.");
    }

    #[test]
    fn test_format_leading_zeros_collapse() {
        assert_eq!(fmt("007"), "7");
    }

    #[test]
    fn test_format_negative_values() {
        assert_eq!(fmt("-1234"), "-1,234");
        assert_eq!(fmt("-0.5"), "-0.5");
        assert_eq!(fmt("-123"), "-123");
    }

    #[test]
    fn test_format_exponent_results_expand() {
        assert_eq!(fmt("1e+21"), "1,000,000,000,000,000,000,000");
        assert_eq!(fmt("5e-1"), "1");
    }

    #[test]
    fn test_format_large_integers_use_shortest_digits() {
        assert_eq!(fmt("121932631112635260"), "121,932,631,112,635,260");
        assert_eq!(fmt("1e+23"), "100,000,000,000,000,000,000,000");
        assert_eq!(fmt("-1e+23"), "-100,000,000,000,000,000,000,000");
        assert_eq!(fmt("9007199254740993"), "9,007,199,254,740,992");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(fmt("Infinity"), "∞");
        assert_eq!(fmt("-Infinity"), "-∞");
        assert_eq!(fmt("NaN"), "NaN");
        assert_eq!(fmt(""), "NaN");
    }

    #[test]
    fn test_format_does_not_touch_input() {
        let operand = String::from("4321.0");
        let formatted = format_operand(Some(operand.as_str()));
        assert_eq!(operand, "4321.0");
        assert_eq!(formatted.as_deref(), Some("4,321.0"));
    }
}
