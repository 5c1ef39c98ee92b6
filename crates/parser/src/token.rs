use std::fmt;

use crate::ops::OpKind;

/// Handle to a variable cell in a [`Registry`](crate::registry::Registry).
///
/// Every occurrence of a name within one expression resolves to the same
/// handle, so they all observe the same value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(u32);

impl CellId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// One instruction of a compiled postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Variable(CellId),
    Operator(OpKind),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Numbers and variables push one value and consume none.
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Variable(_))
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(self, Token::Operator(op) if op.is_binary())
    }
}
