use std::fmt;

use crate::registry::Registry;
use crate::token::Token;

/// A compiled postfix sequence together with the cells it refers to.
#[derive(Debug, Clone)]
pub struct Program {
    pub tokens: Vec<Token>,
    pub registry: Registry,
}

impl Program {
    pub fn new(tokens: Vec<Token>, registry: Registry) -> Self {
        Self { tokens, registry }
    }

    /// The degenerate program left behind by a failed compilation.
    pub fn poisoned() -> Self {
        Self::new(vec![Token::Number(f64::NAN)], Registry::new())
    }

    /// Operands minus binary operators; 1 for any well-formed sequence.
    pub fn stack_balance(&self) -> isize {
        stack_balance(&self.tokens)
    }
}

pub fn stack_balance(tokens: &[Token]) -> isize {
    let operands = tokens.iter().filter(|t| t.is_operand()).count() as isize;
    let binaries = tokens.iter().filter(|t| t.is_binary_operator()).count() as isize;
    operands - binaries
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                Token::Number(value) => write!(f, "{value}")?,
                Token::Variable(id) => f.write_str(self.registry.name(*id).unwrap_or("?"))?,
                Token::Operator(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}
