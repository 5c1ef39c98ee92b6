use logos::{Lexer, Logos};
use std::fmt;
use std::ops::Range;

use crate::error::LexErrorKind;
use crate::scan;

/// Tokens recognised while a value is expected.
///
/// `+` and `-` here are the unary signs.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum ValueToken {
    #[token("(")]
    LParen,

    // Only the first character is matched; `read_number` consumes the rest.
    #[regex(r"[0-9.]", number)]
    Number(f64),

    #[regex(r"[a-zA-Z]", identifier)]
    Ident(String),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

/// Tokens recognised after a complete value.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexErrorKind)]
pub enum OperatorToken {
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token(")")]
    RParen,

    #[token("!")]
    Bang,
}

/// A token together with its byte range in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub token: T,
    pub span: Range<usize>,
}

fn number(lex: &mut Lexer<ValueToken>) -> Result<f64, LexErrorKind> {
    let mut cursor = lex.span().start;
    let result = scan::read_number(lex.source(), &mut cursor);
    lex.bump(cursor - lex.span().end);
    result
}

fn identifier(lex: &mut Lexer<ValueToken>) -> String {
    let mut cursor = lex.span().start;
    let name = scan::read_identifier(lex.source(), &mut cursor).to_owned();
    lex.bump(cursor - lex.span().end);
    name
}

impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueToken::LParen => write!(f, "("),
            ValueToken::Number(value) => write!(f, "{value}"),
            ValueToken::Ident(name) => write!(f, "{name}"),
            ValueToken::Plus => write!(f, "+"),
            ValueToken::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            OperatorToken::Plus => "+",
            OperatorToken::Minus => "-",
            OperatorToken::Star => "*",
            OperatorToken::Slash => "/",
            OperatorToken::Caret => "^",
            OperatorToken::RParen => ")",
            OperatorToken::Bang => "!",
        };
        f.write_str(symbol)
    }
}
