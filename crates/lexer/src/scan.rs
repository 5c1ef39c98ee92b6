//! Cursor-based character routines.
//!
//! Every function takes the full text and a byte cursor. Readers advance the
//! cursor past what they consumed; on error the cursor is left on the
//! offending position.

use crate::error::LexErrorKind;

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_number_start(c: char) -> bool {
    is_digit(c) || c == '.'
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_binary_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// The character at `cursor`, if any.
pub fn peek(text: &str, cursor: usize) -> Option<char> {
    text.get(cursor..).and_then(|rest| rest.chars().next())
}

pub fn skip_spaces(text: &str, cursor: &mut usize) {
    while let Some(c) = peek(text, *cursor) {
        if !c.is_whitespace() {
            break;
        }
        *cursor += c.len_utf8();
    }
}

/// Reads a run of ASCII letters. Returns an empty slice if none start here.
pub fn read_identifier<'t>(text: &'t str, cursor: &mut usize) -> &'t str {
    let start = *cursor;
    *cursor = skip_while(text.as_bytes(), start, |b| b.is_ascii_alphabetic());
    &text[start..*cursor]
}

/// Reads `digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`.
///
/// The integer part may be empty (`.5`), the fraction and the exponent may
/// not be once their marker is present.
pub fn read_number(text: &str, cursor: &mut usize) -> Result<f64, LexErrorKind> {
    let bytes = text.as_bytes();
    let start = *cursor;
    let mut pos = skip_while(bytes, start, |b| b.is_ascii_digit());

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let fraction = pos;
        pos = skip_while(bytes, pos, |b| b.is_ascii_digit());
        if pos == fraction {
            *cursor = pos;
            return Err(LexErrorKind::DigitExpectedAfterPoint);
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent = pos;
        pos = skip_while(bytes, pos, |b| b.is_ascii_digit());
        if pos == exponent {
            *cursor = pos;
            return Err(LexErrorKind::DigitExpectedInExponent);
        }
    }

    *cursor = pos;
    let value: f64 = text[start..pos]
        .parse()
        .map_err(|_| LexErrorKind::OutOfRange)?;
    if value.is_infinite() {
        return Err(LexErrorKind::OutOfRange);
    }
    Ok(value)
}

fn skip_while(bytes: &[u8], mut pos: usize, accept: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && accept(bytes[pos]) {
        pos += 1;
    }
    pos
}
