use parser::{Registry, Token};

/// Executes postfix tokens against a reusable value stack.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    stack: Vec<f64>,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Runs `tokens` and returns the value left on the stack.
    ///
    /// Variables are read from `registry` on every run. A malformed sequence
    /// yields NaN rather than panicking; sequences produced by the compiler
    /// always leave exactly one value.
    pub fn run(&mut self, tokens: &[Token], registry: &Registry) -> f64 {
        self.stack.clear();
        for token in tokens {
            match *token {
                Token::Number(value) => self.stack.push(value),
                Token::Variable(id) => self.stack.push(registry.value(id)),
                Token::Operator(op) => op.apply(&mut self.stack),
            }
        }

        let result = self.stack.pop().unwrap_or(f64::NAN);
        if !self.stack.is_empty() {
            log::warn!("{} values left on the stack after evaluation", self.stack.len());
        }
        result
    }
}
