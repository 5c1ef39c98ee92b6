// Test module for parser
//
// Unit tests for the operator table, the registry and the shunting-yard
// compiler. Tests are organized by category.


use crate::{compile, CompileOptions, ParseError, Program};

/// Compile without folding so the operator structure stays visible.
pub(crate) fn unfolded(input: &str) -> Program {
    compile(input, &CompileOptions::new().fold_constants(false))
        .unwrap_or_else(|e| panic!("failed to compile {:?}: {}", input, e))
}

pub(crate) fn folded(input: &str) -> Program {
    compile(input, &CompileOptions::default())
        .unwrap_or_else(|e| panic!("failed to compile {:?}: {}", input, e))
}

pub(crate) fn postfix(input: &str) -> String {
    unfolded(input).to_string()
}

pub(crate) fn compile_err(input: &str) -> ParseError {
    match compile(input, &CompileOptions::default()) {
        Ok(program) => panic!("expected {:?} to fail, got [{}]", input, program),
        Err(e) => e,
    }
}
