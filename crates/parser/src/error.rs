// Error types for compilation and variable access
//
// Parse-phase errors carry the byte span they refer to, so they can be
// rendered with Ariadne (see report.rs).

use lexer::{LexError, LexErrorKind};
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Malformed or out-of-range numeric literal
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    /// Unexpected token ordering, trailing input, operand count mismatch
    #[error("syntax error: {message}")]
    Syntax { message: String, span: Range<usize> },

    /// `(` never closed, or `)` never opened
    #[error("unbalanced bracket: {message}")]
    UnbalancedBracket { message: String, span: Range<usize> },
}

impl ParseError {
    pub(crate) fn syntax(message: impl Into<String>, span: Range<usize>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub(crate) fn bracket(message: impl Into<String>, span: Range<usize>) -> Self {
        ParseError::UnbalancedBracket {
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::Lex(err) => err.span.clone(),
            ParseError::Syntax { span, .. } | ParseError::UnbalancedBracket { span, .. } => {
                span.clone()
            }
        }
    }

    /// Short description without the category prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Lex(err) => err.kind.to_string(),
            ParseError::Syntax { message, .. } | ParseError::UnbalancedBracket { message, .. } => {
                message.clone()
            }
        }
    }

    /// Diagnostic code shown in reports.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Lex(LexError {
                kind: LexErrorKind::OutOfRange,
                ..
            }) => "E002",
            ParseError::Lex(_) => "E001",
            ParseError::Syntax { .. } => "E003",
            ParseError::UnbalancedBracket { .. } => "E004",
        }
    }

    /// Process exit code used by the command-line harness.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Lex(_) => 101,
            ParseError::Syntax { .. } => 102,
            ParseError::UnbalancedBracket { .. } => 103,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
