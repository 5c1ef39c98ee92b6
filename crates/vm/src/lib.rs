//! Stack-machine evaluation of compiled postfix programs.
//!
//! [`Expression`] is the entry point: construct it once from source text,
//! then call [`Expression::evaluate`] as often as needed, updating variables
//! in between.

mod expression;
mod machine;

pub use expression::Expression;
pub use machine::Machine;

pub use parser::{AssignPolicy, CompileOptions, ParseError, RegistryError};

#[cfg(test)]
mod tests;
