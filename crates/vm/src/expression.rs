use std::fmt;

use parser::{
    compile, AssignPolicy, CompileOptions, ParseResult, Program, Registry, RegistryError, Token,
};

use crate::machine::Machine;

/// A compiled arithmetic expression.
///
/// Compilation happens once, in the constructor. `evaluate` re-runs the
/// compiled postfix sequence and picks up any variable changes made since
/// the last call. Evaluation needs `&mut self` for its scratch stack, so a
/// single instance cannot be evaluated from two threads at once; clone it
/// instead.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    program: Program,
    machine: Machine,
    assign_policy: AssignPolicy,
}

impl Expression {
    pub fn new(source: &str) -> ParseResult<Self> {
        Self::with_options(source, &CompileOptions::default())
    }

    pub fn with_options(source: &str, options: &CompileOptions) -> ParseResult<Self> {
        let program = compile(source, options)?;
        Ok(Self::from_program(source, program, options.assign_policy))
    }

    /// Wraps an already compiled program.
    pub fn from_program(source: &str, program: Program, assign_policy: AssignPolicy) -> Self {
        let machine = Machine::with_capacity(program.tokens.len());
        Self {
            source: source.to_string(),
            program,
            machine,
            assign_policy,
        }
    }

    /// Placeholder for a failed compilation: evaluates to NaN.
    pub fn poisoned(source: &str) -> Self {
        Self::from_program(source, Program::poisoned(), AssignPolicy::default())
    }

    pub fn evaluate(&mut self) -> f64 {
        self.machine.run(&self.program.tokens, &self.program.registry)
    }

    /// Assigns a variable. With the default policy, a name that was never
    /// declared is ignored and `false` is returned.
    pub fn set_variable(&mut self, name: &str, value: f64) -> bool {
        self.program
            .registry
            .assign(name, value, self.assign_policy)
    }

    pub fn get_variable(&self, name: &str) -> Result<f64, RegistryError> {
        self.program.registry.get(name)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &[Token] {
        &self.program.tokens
    }

    pub fn registry(&self) -> &Registry {
        &self.program.registry
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}
