//! CSS Values & Units Level 4 — §7 Other quantities: ratios
//! Spec: <https://www.w3.org/TR/css-values-4/#ratios>

use crate::attempt;
use crate::chapter_4_numbers::parse_number;
use core::fmt;
use cssparser::{Parser, ToCss, Token};

/// A CSS <ratio>, e.g. the `16/9` of `aspect-ratio: 16/9`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratio {
    pub numerator: f64,
    pub denominator: f64,
}

impl Ratio {
    /// Build a ratio from its two terms; neither is range-checked.
    #[inline]
    pub const fn new(numerator: f64, denominator: f64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Numerator divided by denominator.
    #[inline]
    pub fn value(self) -> f64 {
        self.numerator / self.denominator
    }
}

impl ToCss for Ratio {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(dest, "{} / {}", self.numerator, self.denominator)
    }
}

/// Parse `<number> / <number>`.
///
/// Whitespace and comments may surround the solidus. If any part is missing
/// the whole attempt rewinds, including an already-read numerator.
pub fn parse_ratio(input: &mut Parser<'_, '_>) -> Option<Ratio> {
    attempt(input, |nested| {
        let numerator = parse_number(nested)?;
        if !matches!(nested.next(), Ok(&Token::Delim('/'))) {
            return None;
        }
        nested.skip_whitespace();
        let denominator = parse_number(nested)?;
        Some(Ratio::new(numerator, denominator))
    })
}
