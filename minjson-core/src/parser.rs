//! Value dispatch and the top-level parse entry point.
//!
//! Parsing is all-or-nothing per call: errors are returned at the point
//! of failure and no partial value is exposed.

use std::fmt;

use crate::cursor::Cursor;
use crate::scanner::{match_literal, scan_number, skip_whitespace};
use crate::value::Value;

/// Error codes for parse failures.
///
/// Using a field-less enum instead of String eliminates heap allocation
/// for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseError {
    /// Input was empty or whitespace-only
    ExpectValue = 0,
    /// Next token matches no keyword and fails the number grammar
    InvalidValue,
    /// A value parsed but non-whitespace input remained after it
    RootNotSingular,
    /// Number grammar matched but the magnitude overflows f64
    NumberTooBig,
}

impl ParseError {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::ExpectValue => "expect value",
            Self::InvalidValue => "invalid value",
            Self::RootNotSingular => "root not singular",
            Self::NumberTooBig => "number too big",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParseError {}

/// Fixed keyword table, keyed by the dispatch byte.
static KEYWORDS: phf::Map<u8, (&'static str, Value)> = phf::phf_map! {
    b't' => ("true", Value::Bool(true)),
    b'f' => ("false", Value::Bool(false)),
    b'n' => ("null", Value::Null),
};

/// Parse one value at the cursor, dispatching on the lookahead byte.
///
/// Anything that is not a keyword start or end-of-input goes to the
/// number scanner, whose grammar check rejects garbage.
fn parse_value(cur: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let Some(byte) = cur.peek() else {
        return Err(ParseError::ExpectValue);
    };
    if let Some(&(keyword, value)) = KEYWORDS.get(&byte) {
        match_literal(cur, keyword.as_bytes())?;
        return Ok(value);
    }
    scan_number(cur).map(Value::Number)
}

/// Parse exactly one JSON scalar from `input`.
///
/// Leading and trailing whitespace is allowed; any other byte after the
/// value fails with [`ParseError::RootNotSingular`].
///
/// # Example
///
/// ```
/// use minjson_core::{parse, Value};
///
/// assert_eq!(parse(b"  true  "), Ok(Value::Bool(true)));
/// assert_eq!(parse(b"-1.5E-3"), Ok(Value::Number(-0.0015)));
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let mut cur = Cursor::new(input);
    skip_whitespace(&mut cur);
    let value = parse_value(&mut cur)?;
    skip_whitespace(&mut cur);
    if !cur.is_at_end() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

/// Convenience wrapper over [`parse`] for string input.
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_dispatch() {
        assert_eq!(parse(b"true"), Ok(Value::Bool(true)));
        assert_eq!(parse(b"false"), Ok(Value::Bool(false)));
        assert_eq!(parse(b"null"), Ok(Value::Null));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(parse(b"TRUE"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"True"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"Null"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(b""), Err(ParseError::ExpectValue));
        assert_eq!(parse(b" \t\n\r"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::ExpectValue.message(), "expect value");
        assert_eq!(ParseError::InvalidValue.message(), "invalid value");
        assert_eq!(ParseError::RootNotSingular.message(), "root not singular");
        assert_eq!(ParseError::NumberTooBig.message(), "number too big");
        assert_eq!(ParseError::NumberTooBig.to_string(), "number too big");
    }
}
