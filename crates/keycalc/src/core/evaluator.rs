//! Resolves a pending binary operation over two operand strings
//!
//! The empty string is the "cannot compute" answer: callers check for it
//! rather than matching on an error.

use crate::core::number::{number_to_string, parse_float};
use crate::core::Operation;

/// Computes `previous operation current`
///
/// Both operands go through the leading-prefix float parse; a missing operand
/// reads as `""`, which is not a number. Returns `""` when either operand is
/// NaN or no operation is pending. Division by zero is not guarded and
/// produces `"Infinity"`, `"-Infinity"` or `"NaN"`.
///
/// ```
/// use keycalc::core::evaluator::evaluate;
/// use keycalc::core::Operation;
///
/// assert_eq!(evaluate(Some("2"), Some("3"), Some(Operation::Add)), "5");
/// assert_eq!(evaluate(Some("2"), Some("4"), Some(Operation::Divide)), "2");
/// assert_eq!(evaluate(None, Some("3"), Some(Operation::Add)), "");
/// ```
#[must_use]
pub fn evaluate(
    current_operand: Option<&str>,
    previous_operand: Option<&str>,
    operation: Option<Operation>,
) -> String {
    let prev = parse_float(previous_operand.unwrap_or_default());
    let curr = parse_float(current_operand.unwrap_or_default());
    if prev.is_nan() || curr.is_nan() {
        return String::new();
    }

    match operation {
        Some(op) => number_to_string(op.apply(prev, curr)),
        None => String::new(),
    }
}

/// Same as [`evaluate`] with the operator given as a raw symbol
///
/// Any symbol other than `+`, `-`, `*` or `/` yields `""`.
#[must_use]
pub fn evaluate_symbol(
    current_operand: Option<&str>,
    previous_operand: Option<&str>,
    symbol: Option<&str>,
) -> String {
    evaluate(
        current_operand,
        previous_operand,
        symbol.and_then(Operation::from_symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(current: &str, previous: &str, op: Operation) -> String {
        evaluate(Some(current), Some(previous), Some(op))
    }

    // ===== Arithmetic =====

    #[test]
    fn test_evaluate_addition() {
        assert_eq!(eval("2", "3", Operation::Add), "5");
    }

    #[test]
    fn test_evaluate_subtraction_is_previous_minus_current() {
        assert_eq!(eval("2", "3", Operation::Subtract), "1");
        assert_eq!(eval("3", "2", Operation::Subtract), "-1");
    }

    #[test]
    fn test_evaluate_multiplication() {
        assert_eq!(eval("2", "3", Operation::Multiply), "6");
    }

    #[test]
    fn test_evaluate_division_is_previous_over_current() {
        assert_eq!(eval("4", "2", Operation::Divide), "0.5");
        assert_eq!(eval("2", "4", Operation::Divide), "2");
    }

    #[test]
    fn test_evaluate_decimal_operands() {
        assert_eq!(eval("0.2", "0.1", Operation::Add), "0.30000000000000004");
        assert_eq!(eval("2.", "1.5", Operation::Multiply), "3");
        assert_eq!(eval(".5", "1", Operation::Subtract), "0.5");
    }

    #[test]
    fn test_evaluate_negative_zero_prints_zero() {
        assert_eq!(eval("0", "-0", Operation::Add), "0");
        assert_eq!(eval("-1", "0", Operation::Multiply), "0");
    }

    #[test]
    fn test_evaluate_large_result_uses_exponent() {
        assert_eq!(
            eval("1000000000000", "1000000000000", Operation::Multiply),
            "1e+24"
        );
    }

    // ===== Division by zero =====

    #[test]
    fn test_evaluate_divide_by_zero_is_infinity() {
        assert_eq!(eval("0", "1", Operation::Divide), "Infinity");
        assert_eq!(eval("0", "-1", Operation::Divide), "-Infinity");
    }

    #[test]
    fn test_evaluate_zero_over_zero_is_nan() {
        assert_eq!(eval("0", "0", Operation::Divide), "NaN");
    }

    #[test]
    fn test_evaluate_chains_through_infinity() {
        assert_eq!(eval("1", "Infinity", Operation::Add), "Infinity");
        assert_eq!(eval("0", "Infinity", Operation::Multiply), "NaN");
    }

    // ===== Sentinel results =====

    #[test]
    fn test_evaluate_missing_operand_is_empty() {
        assert_eq!(evaluate(None, Some("3"), Some(Operation::Add)), "");
        assert_eq!(evaluate(Some("3"), None, Some(Operation::Add)), "");
        assert_eq!(evaluate(None, None, Some(Operation::Add)), "");
    }

    #[test]
    fn test_evaluate_unparseable_operand_is_empty() {
        assert_eq!(eval("", "3", Operation::Add), "");
        assert_eq!(eval(".", "3", Operation::Add), "");
        assert_eq!(eval("3", "NaN", Operation::Add), "");
    }

    #[test]
    fn test_evaluate_missing_operation_is_empty() {
        assert_eq!(evaluate(Some("2"), Some("3"), None), "");
    }

    // ===== Raw symbols =====

    #[test]
    fn test_evaluate_symbol_known_operators() {
        assert_eq!(evaluate_symbol(Some("2"), Some("3"), Some("+")), "5");
        assert_eq!(evaluate_symbol(Some("2"), Some("3"), Some("*")), "6");
    }

    #[test]
    fn test_evaluate_symbol_unknown_operator_is_empty() {
        assert_eq!(evaluate_symbol(Some("2"), Some("3"), Some("%")), "");
        assert_eq!(evaluate_symbol(Some("2"), Some("3"), Some("")), "");
        assert_eq!(evaluate_symbol(Some("2"), Some("3"), None), "");
    }
}
