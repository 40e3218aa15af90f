//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::attempt;
use cssparser::{Parser, Token};
use log::debug;

/// Read the next token as a dimensionless number.
///
/// Returns the literal's source text and the tokenizer's clamped integer
/// value (`None` when the literal has a fraction or an exponent). Leading
/// whitespace, comments, dimensions and percentages all fail.
fn next_plain_number<'i>(input: &mut Parser<'i, '_>) -> Option<(&'i str, Option<i32>)> {
    let start = input.position();
    let int_value = match *input.next_including_whitespace_and_comments().ok()? {
        Token::Number { int_value, .. } => int_value,
        _ => return None,
    };
    Some((input.slice_from(start), int_value))
}

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// The value is re-read from the literal text at `f64` precision and must be
/// finite. On `None` the parser is back where it started.
pub fn parse_number(input: &mut Parser<'_, '_>) -> Option<f64> {
    attempt(input, |nested| {
        let (literal, _) = next_plain_number(nested)?;
        literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    })
}

/// Parse a CSS <integer> (§4.1) into an `i32`.
///
/// Out-of-range literals written as an optional `-` and digits clamp to the
/// nearest `i32` bound instead of failing. An explicit `+` on an
/// out-of-range literal is rejected.
pub fn parse_integer(input: &mut Parser<'_, '_>) -> Option<i32> {
    attempt(input, |nested| {
        let (literal, int_value) = next_plain_number(nested)?;
        let value = int_value?;
        // Digits-only here, so a failed parse means the tokenizer clamped.
        if literal.parse::<i32>().is_err() {
            if literal.starts_with('+') {
                return None;
            }
            debug!(
                "[INTEGER] literal of {} chars out of range, clamped to {value}",
                literal.len()
            );
        }
        Some(value)
    })
}
