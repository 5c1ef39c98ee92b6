//! Operator descriptor table.
//!
//! Every operator is a plain `Copy` value; its arity, priority and
//! associativity come from `OpKind::info`, and `apply` executes it against a
//! value stack passed in by the caller. The same function serves the
//! evaluator and constant folding.

use std::fmt;

/// Priority of the left-bracket sentinel: lower than any operator.
pub const BRACKET_PRIORITY: u8 = 0;

const ADDITIVE: u8 = 1;
const MULTIPLICATIVE: u8 = 2;
const POWER: u8 = 3;
const UNARY: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub symbol: &'static str,
    pub arity: usize,
    pub priority: u8,
    pub assoc: Assoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    UnaryPlus,
    UnaryMinus,
    Factorial,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
}

/// Built-in function names, applied prefix-style to the value that follows.
pub const FUNCTIONS: [(&str, OpKind); 8] = [
    ("sqrt", OpKind::Sqrt),
    ("sin", OpKind::Sin),
    ("cos", OpKind::Cos),
    ("tan", OpKind::Tan),
    ("log", OpKind::Log),
    ("asin", OpKind::Asin),
    ("acos", OpKind::Acos),
    ("atan", OpKind::Atan),
];

impl OpKind {
    pub fn function(name: &str) -> Option<OpKind> {
        FUNCTIONS
            .iter()
            .find(|(function, _)| *function == name)
            .map(|&(_, kind)| kind)
    }

    pub const fn info(self) -> OpInfo {
        use OpKind::*;
        let (symbol, arity, priority, assoc) = match self {
            Add => ("+", 2, ADDITIVE, Assoc::Left),
            Subtract => ("-", 2, ADDITIVE, Assoc::Left),
            Multiply => ("*", 2, MULTIPLICATIVE, Assoc::Left),
            Divide => ("/", 2, MULTIPLICATIVE, Assoc::Left),
            Power => ("^", 2, POWER, Assoc::Right),
            UnaryPlus => ("pos", 1, UNARY, Assoc::Right),
            UnaryMinus => ("neg", 1, UNARY, Assoc::Right),
            Factorial => ("!", 1, UNARY, Assoc::Right),
            Sqrt => ("sqrt", 1, UNARY, Assoc::Right),
            Sin => ("sin", 1, UNARY, Assoc::Right),
            Cos => ("cos", 1, UNARY, Assoc::Right),
            Tan => ("tan", 1, UNARY, Assoc::Right),
            Asin => ("asin", 1, UNARY, Assoc::Right),
            Acos => ("acos", 1, UNARY, Assoc::Right),
            Atan => ("atan", 1, UNARY, Assoc::Right),
            Log => ("log", 1, UNARY, Assoc::Right),
        };
        OpInfo { symbol, arity, priority, assoc }
    }

    pub const fn arity(self) -> usize {
        self.info().arity
    }

    pub const fn priority(self) -> u8 {
        self.info().priority
    }

    pub const fn assoc(self) -> Assoc {
        self.info().assoc
    }

    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Pops the operands, pushes the result.
    ///
    /// Operands missing from the stack read as NaN. Numeric edge cases follow
    /// IEEE-754 and never fail.
    pub fn apply(self, stack: &mut Vec<f64>) {
        use OpKind::*;
        match self {
            Add => binary(stack, |a, b| a + b),
            Subtract => binary(stack, |a, b| a - b),
            Multiply => binary(stack, |a, b| a * b),
            Divide => binary(stack, |a, b| a / b),
            Power => binary(stack, f64::powf),
            UnaryPlus => {}
            UnaryMinus => unary(stack, |x| -x),
            Factorial => unary(stack, factorial),
            Sqrt => unary(stack, f64::sqrt),
            Sin => unary(stack, f64::sin),
            Cos => unary(stack, f64::cos),
            Tan => unary(stack, f64::tan),
            Asin => unary(stack, f64::asin),
            Acos => unary(stack, f64::acos),
            Atan => unary(stack, f64::atan),
            Log => unary(stack, f64::ln),
        }
    }
}

fn binary(stack: &mut Vec<f64>, f: impl FnOnce(f64, f64) -> f64) {
    let b = pop(stack);
    let a = pop(stack);
    stack.push(f(a, b));
}

fn unary(stack: &mut Vec<f64>, f: impl FnOnce(f64) -> f64) {
    let x = pop(stack);
    stack.push(f(x));
}

fn pop(stack: &mut Vec<f64>) -> f64 {
    stack.pop().unwrap_or(f64::NAN)
}

/// `n!` for non-negative integral `n`; +Infinity for anything else.
///
/// Stops as soon as the running product overflows, so huge `n` is cheap.
pub fn factorial(n: f64) -> f64 {
    if !(n >= 0.0 && n.fract() == 0.0) {
        return f64::INFINITY;
    }

    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        if product.is_infinite() {
            break;
        }
        i += 1.0;
    }
    product
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().symbol)
    }
}
