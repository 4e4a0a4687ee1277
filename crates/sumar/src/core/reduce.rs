//! Left-to-right reduction of the token buffer
//!
//! Reduction walks the buffer once: the first token seeds an `f64`
//! accumulator, every operator token becomes the pending operator
//! (overwriting any previous one), and every numeric token folds into the
//! accumulator through the pending operator. There is no precedence and no
//! guard on division by zero; IEEE semantics carry through to the display.

use super::token::{Operator, Token};

/// Applies a binary operator to two operands
#[must_use]
pub fn calculate(x: f64, y: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => x + y,
        Operator::Subtract => x - y,
        Operator::Multiply => x * y,
        Operator::Divide => x / y,
    }
}

/// Parses a numeric token leniently
///
/// A token that fails to parse is a defect upstream; it is logged and
/// contributes zero so the calculator stays interactive.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::error!("could not parse '{text}' as a number");
            0.0
        }
    }
}

/// Reduces a token sequence to a single value
#[must_use]
pub fn reduce(tokens: &[Token]) -> f64 {
    let mut iter = tokens.iter();
    let mut acc = iter.next().map_or(0.0, |first| parse_number(&first.text()));
    let mut pending: Option<Operator> = None;

    for token in iter {
        match token {
            Token::Op(op) => pending = Some(*op),
            Token::Number(literal) => {
                let operand = parse_number(literal);
                acc = match pending.take() {
                    Some(op) => calculate(acc, operand, op),
                    // No operator yet: the operand stands alone.
                    None => operand,
                };
            }
        }
    }

    acc
}

/// Formats a reduction result for display
///
/// Whole numbers render without a fractional part, fractions are trimmed to
/// at most ten decimals, and non-finite values keep their standard `f64`
/// rendering (`inf`, `-inf`, `NaN`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
