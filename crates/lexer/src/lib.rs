pub mod error;
pub mod scan;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use token::{OperatorToken, Spanned, ValueToken};

use logos::Logos;
use std::ops::Range;

/// Lex one token in "value-expected" mode, starting at `cursor`.
///
/// Spaces are skipped first. Returns `Ok(None)` when nothing in this mode
/// starts at the cursor (including end of input); the cursor then sits on
/// the first unconsumed character.
pub fn next_value(source: &str, cursor: &mut usize) -> Result<Option<Spanned<ValueToken>>, LexError> {
    next_in_mode::<ValueToken>(source, cursor)
}

/// Lex one token in "operator-expected" mode, starting at `cursor`.
pub fn next_operator(
    source: &str,
    cursor: &mut usize,
) -> Result<Option<Spanned<OperatorToken>>, LexError> {
    next_in_mode::<OperatorToken>(source, cursor)
}

fn next_in_mode<'s, T>(source: &'s str, cursor: &mut usize) -> Result<Option<Spanned<T>>, LexError>
where
    T: Logos<'s, Source = str, Error = LexErrorKind, Extras = ()>,
{
    scan::skip_spaces(source, cursor);
    let start = *cursor;
    let mut lexer = T::lexer(&source[start..]);

    match lexer.next() {
        None => Ok(None),
        Some(Ok(token)) => {
            let span = shift(lexer.span(), start);
            *cursor = span.end;
            Ok(Some(Spanned { token, span }))
        }
        // Not a token of this mode: leave it for the caller to report.
        Some(Err(LexErrorKind::UnexpectedCharacter)) => Ok(None),
        Some(Err(kind)) => {
            let span = shift(lexer.span(), start);
            *cursor = span.end;
            Err(LexError { kind, span })
        }
    }
}

fn shift(span: Range<usize>, offset: usize) -> Range<usize> {
    span.start + offset..span.end + offset
}

#[cfg(test)]
mod tests;
