use std::ops::Range;
use thiserror::Error;

/// What went wrong while reading a literal.
///
/// `UnexpectedCharacter` is what the token enums report for input that
/// does not belong to the current mode; `next_value`/`next_operator` turn it
/// into "no token" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,

    #[error("digit expected after point")]
    DigitExpectedAfterPoint,

    #[error("digit expected in exponent")]
    DigitExpectedInExponent,

    #[error("number cannot be represented as a double")]
    OutOfRange,
}

/// A malformed literal, with the byte range that was consumed reading it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {}..{}", .span.start, .span.end)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Range<usize>,
}
