//! CSS Values and Units Module — numeric value micro-parsers.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Every rule reads from a shared `cssparser::Parser` and either returns a
//! value with the parser advanced past it, or returns `None` with the parser
//! exactly where it was. Rules can therefore be tried one after another as
//! alternatives without any cleanup between attempts.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_4_numbers;
pub mod chapter_5_numeric_ranges;
pub mod chapter_7_ratios;

// Re-exports for ergonomic access from other crates.
pub use chapter_4_numbers::{parse_integer, parse_number};
pub use chapter_5_numeric_ranges::{
    is_weight, parse_binary, parse_greater_or_equal_one_number, parse_natural_integer,
    parse_natural_number, parse_positive_integer, parse_weight_integer,
};
pub use chapter_7_ratios::{Ratio, parse_ratio};

use core::error::Error;
use core::fmt;
use cssparser::{Parser, ParserInput};
use log::trace;

/// Failure of [`parse_complete`] to read a whole value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The rule did not match at the start of the value.
    NoMatch,
    /// The rule matched, but unread input starts at this byte offset.
    TrailingInput { offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => formatter.write_str("value does not match the expected type"),
            Self::TrailingInput { offset } => {
                write!(formatter, "unexpected input after value at byte {offset}")
            }
        }
    }
}

impl Error for ParseError {}

/// Run `rule` and restore the parser state when it yields `None`.
///
/// Nested attempts compose: an outer attempt that fails rewinds past any
/// inner attempt that had succeeded.
#[inline]
pub fn attempt<'i, 't, T, F>(input: &mut Parser<'i, 't>, rule: F) -> Option<T>
where
    F: FnOnce(&mut Parser<'i, 't>) -> Option<T>,
{
    input.try_parse(|nested| rule(nested).ok_or(())).ok()
}

/// Run `rule` over an entire declaration value.
///
/// Surrounding whitespace and comments are ignored; anything else left over
/// after the rule matched is an error.
///
/// # Errors
/// Returns `ParseError::NoMatch` when the rule fails and
/// `ParseError::TrailingInput` when the value continues past the match.
pub fn parse_complete<T, F>(text: &str, rule: F) -> Result<T, ParseError>
where
    F: FnOnce(&mut Parser<'_, '_>) -> Option<T>,
{
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.skip_whitespace();
    let Some(value) = rule(&mut parser) else {
        trace!("[VALUE] no match for {text:?}");
        return Err(ParseError::NoMatch);
    };
    if parser.is_exhausted() {
        return Ok(value);
    }
    parser.skip_whitespace();
    let offset = parser.position().byte_index();
    trace!("[VALUE] trailing input in {text:?} at byte {offset}");
    Err(ParseError::TrailingInput { offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whole values succeed only when nothing but padding remains.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn complete_values() {
        assert_eq!(parse_complete("  700 ", parse_weight_integer), Ok(700));
        assert_eq!(
            parse_complete("/* ar */ 16 / 9", parse_ratio),
            Ok(Ratio::new(16.0, 9.0))
        );
        assert_eq!(parse_complete("750", parse_weight_integer), Err(ParseError::NoMatch));
        assert_eq!(
            parse_complete("1 2", parse_binary),
            Err(ParseError::TrailingInput { offset: 2 })
        );
        assert_eq!(parse_complete("", parse_number), Err(ParseError::NoMatch));
        assert_eq!(parse_complete("1\\", parse_number), Err(ParseError::NoMatch));
    }

    /// A failed outer attempt undoes a successful inner one.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn attempt_rewinds_nested_progress() {
        let mut input = ParserInput::new("1 2");
        let mut parser = Parser::new(&mut input);
        let outcome: Option<()> = attempt(&mut parser, |outer| {
            assert_eq!(parse_number(outer), Some(1.0));
            None
        });
        assert_eq!(outcome, None);
        assert_eq!(parser.position().byte_index(), 0);
    }

    /// Errors render as readable messages.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::TrailingInput { offset: 3 }.to_string(),
            "unexpected input after value at byte 3"
        );
        assert_eq!(
            ParseError::NoMatch.to_string(),
            "value does not match the expected type"
        );
    }
}
