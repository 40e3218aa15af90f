//! CSS Values & Units Level 4 — §5 Numeric data types, range restrictions (§5.1).
//! Spec: <https://www.w3.org/TR/css-values-4/#numeric-ranges>
//!
//! Each rule wraps a primitive parse and rewinds when the value falls
//! outside the allowed range.

use crate::attempt;
use crate::chapter_4_numbers::{parse_integer, parse_number};
use cssparser::Parser;

/// `<number [0,∞]>`
pub fn parse_natural_number(input: &mut Parser<'_, '_>) -> Option<f64> {
    attempt(input, |nested| parse_number(nested).filter(|value| *value >= 0.0))
}

/// `<number [1,∞]>`, e.g. `stroke-miterlimit`.
pub fn parse_greater_or_equal_one_number(input: &mut Parser<'_, '_>) -> Option<f64> {
    attempt(input, |nested| parse_number(nested).filter(|value| *value >= 1.0))
}

/// `<integer [0,∞]>`
pub fn parse_natural_integer(input: &mut Parser<'_, '_>) -> Option<i32> {
    attempt(input, |nested| parse_integer(nested).filter(|value| *value >= 0))
}

/// `<integer [1,∞]>`
pub fn parse_positive_integer(input: &mut Parser<'_, '_>) -> Option<i32> {
    attempt(input, |nested| parse_integer(nested).filter(|value| *value > 0))
}

/// Integer restricted to `0` or `1`.
pub fn parse_binary(input: &mut Parser<'_, '_>) -> Option<i32> {
    attempt(input, |nested| {
        parse_integer(nested).filter(|value| matches!(*value, 0 | 1))
    })
}

/// Numeric `font-weight` from CSS Fonts 3: one of `100`, `200`, … `900`.
/// Spec: <https://www.w3.org/TR/css-fonts-3/#font-weight-prop>
pub fn parse_weight_integer(input: &mut Parser<'_, '_>) -> Option<i32> {
    attempt(input, |nested| {
        parse_positive_integer(nested).filter(|value| is_weight(*value))
    })
}

/// Whether `value` is a multiple of 100 strictly between 0 and 1000.
#[inline]
pub const fn is_weight(value: i32) -> bool {
    value % 100 == 0 && matches!(value / 100, 1..=9)
}
