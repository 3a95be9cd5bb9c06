//! Scanner primitives: whitespace runs, fixed keywords, and the strict
//! JSON number grammar.
//!
//! The grammar check in [`scan_number`] exists because `str::parse::<f64>`
//! is more permissive than JSON (it accepts `"inf"`, `"1."`, `".5"`, a
//! leading `+`, ...); validating the span first keeps malformed input from
//! converting silently.

use crate::cursor::Cursor;
use crate::parser::ParseError;

/// Advance past any run of JSON whitespace (space, tab, newline, CR).
pub fn skip_whitespace(cur: &mut Cursor<'_>) {
    while let Some(b' ' | b'\t' | b'\n' | b'\r') = cur.peek() {
        cur.bump();
    }
}

/// Match a fixed keyword whose first byte was already inspected by
/// dispatch. Compares byte by byte; consumes nothing on mismatch.
pub fn match_literal(cur: &mut Cursor<'_>, keyword: &'static [u8]) -> Result<(), ParseError> {
    let rest = cur.rest();
    for (i, &expected) in keyword.iter().enumerate() {
        if rest.get(i) != Some(&expected) {
            return Err(ParseError::InvalidValue);
        }
    }
    cur.advance(keyword.len());
    Ok(())
}

/// Validate the strict JSON number grammar and convert the matched span.
///
/// Grammar: `-? ( 0 | [1-9][0-9]* ) ( \. [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`
///
/// On any grammar failure the cursor is unchanged from entry. On success
/// the cursor rests exactly at the end of the matched span.
pub fn scan_number(cur: &mut Cursor<'_>) -> Result<f64, ParseError> {
    let rest = cur.rest();
    let byte = |i: usize| rest.get(i).copied();
    let mut pos = 0;

    if byte(pos) == Some(b'-') {
        pos += 1;
    }

    // Integer part: a lone 0, or a nonzero digit then any digits.
    match byte(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(byte(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }

    // Fraction: '.' must be followed by at least one digit.
    if byte(pos) == Some(b'.') {
        pos += 1;
        if !matches!(byte(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(byte(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    // Exponent: marker, optional sign, at least one digit.
    if matches!(byte(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(byte(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !matches!(byte(pos), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(byte(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    // The span is ASCII by construction of the grammar above.
    let text = std::str::from_utf8(&rest[..pos]).map_err(|_| ParseError::InvalidValue)?;
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;

    // The grammar never admits an "inf"/"Infinity" token, so an infinite
    // result can only mean the magnitude overflowed the f64 range.
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }

    cur.advance(pos);
    Ok(value)
}
