//! Number codec shared by the evaluator and the formatter
//!
//! Operands travel as strings. Reading them uses a lenient leading-prefix
//! parse (trailing garbage is ignored, no digits at all is NaN) and writing
//! uses the shortest round-trip digits, switching to exponent notation
//! outside `1e-7 <= |x| < 1e21`. Results such as `"Infinity"` or `"1e+21"`
//! therefore read back to the value they were written from.

/// Parses the longest numeric prefix of `input`
///
/// Leading whitespace is skipped and an optional sign is accepted, followed
/// by either `Infinity` or a decimal literal with an optional exponent.
/// Returns NaN when no digits can be read.
///
/// ```
/// use keycalc::core::number::parse_float;
///
/// assert_eq!(parse_float("12abc"), 12.0);
/// assert_eq!(parse_float("5."), 5.0);
/// assert_eq!(parse_float("1e+21"), 1e21);
/// assert!(parse_float(".").is_nan());
/// ```
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if trimmed[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    let mut mantissa_end = pos;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        // "5." reads as 5, the bare dot is dropped
        mantissa_end = if frac_digits > 0 { pos + 1 + frac_digits } else { pos };
        pos += 1 + frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    let mut literal = String::with_capacity(pos + 8);
    if negative {
        literal.push('-');
    }
    literal.push_str(&trimmed[int_start..mantissa_end]);

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            literal.push('e');
            literal.push_str(&trimmed[pos + 1..exp_pos + exp_digits]);
        }
    }

    literal.parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Writes `value` with the shortest digits that read back to it
///
/// ```
/// use keycalc::core::number::number_to_string;
///
/// assert_eq!(number_to_string(0.5), "0.5");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp = n - 1;
        let sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exp.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exp.abs())
        }
    }
}

/// Shortest round-trip significand digits and the decimal point position
///
/// For `value = 0.d1d2..dk * 10^n` returns `("d1d2..dk", n)`.
pub(crate) fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` prints the shortest round-trip significand, e.g. "1.2345e3"
    let formatted = format!("{value:e}");
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}
