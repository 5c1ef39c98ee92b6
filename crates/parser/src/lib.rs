pub mod config;
pub mod error;
pub mod ops;
pub mod program;
pub mod registry;
pub mod report;
pub mod shunting_yard;
pub mod token;

pub use config::{AssignPolicy, CompileOptions};
pub use error::{ParseError, ParseResult, RegistryError};
pub use ops::{Assoc, OpInfo, OpKind};
pub use program::Program;
pub use registry::Registry;
pub use report::{render_parse_error, report_parse_error};
pub use shunting_yard::{compile, compile_with_registry};
pub use token::{CellId, Token};

#[cfg(test)]
mod tests;
