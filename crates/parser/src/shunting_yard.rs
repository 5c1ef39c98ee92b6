// Infix to postfix compilation
//
// Classic shunting-yard driven by the two lexical modes: while a value is
// expected the lexer recognises '(', numbers, identifiers and unary signs;
// after a value it recognises binary operators, ')' and '!'. Constant
// subexpressions are folded as operators are emitted.

use lexer::scan;
use lexer::{next_operator, next_value, OperatorToken, Spanned, ValueToken};
use log::{debug, trace};
use std::ops::Range;

use crate::config::CompileOptions;
use crate::error::{ParseError, ParseResult};
use crate::ops::{Assoc, OpKind, BRACKET_PRIORITY};
use crate::program::{stack_balance, Program};
use crate::registry::Registry;
use crate::token::Token;

/// Compiles `source` against a fresh registry of built-in constants.
pub fn compile(source: &str, options: &CompileOptions) -> ParseResult<Program> {
    compile_with_registry(source, Registry::new(), options)
}

/// Compiles `source`, declaring unknown identifiers in `registry`.
pub fn compile_with_registry(
    source: &str,
    registry: Registry,
    options: &CompileOptions,
) -> ParseResult<Program> {
    let program = ShuntingYard::new(source, registry, options.fold_constants).run()?;
    trace!("compiled {:?} to [{}]", source, program);
    Ok(program)
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    /// Left bracket at this byte offset.
    Bracket(usize),
    Operator(OpKind),
}

impl Pending {
    fn priority(self) -> u8 {
        match self {
            Pending::Bracket(_) => BRACKET_PRIORITY,
            Pending::Operator(op) => op.priority(),
        }
    }
}

struct ShuntingYard<'s> {
    source: &'s str,
    cursor: usize,
    output: Vec<Token>,
    operators: Vec<Pending>,
    expecting_operator: bool,
    registry: Registry,
    fold: bool,
    scratch: Vec<f64>,
}

impl<'s> ShuntingYard<'s> {
    fn new(source: &'s str, registry: Registry, fold: bool) -> Self {
        Self {
            source,
            cursor: 0,
            output: Vec::new(),
            operators: Vec::new(),
            expecting_operator: false,
            registry,
            fold,
            scratch: Vec::new(),
        }
    }

    fn run(mut self) -> ParseResult<Program> {
        while self.step()? {}
        self.finish()
    }

    /// Reads and handles one token. Returns false once the lexer has nothing
    /// more to offer in the current mode.
    fn step(&mut self) -> ParseResult<bool> {
        if self.expecting_operator {
            let Some(Spanned { token, span }) = next_operator(self.source, &mut self.cursor)? else {
                return Ok(false);
            };
            match token {
                OperatorToken::Plus => self.push_operator(OpKind::Add),
                OperatorToken::Minus => self.push_operator(OpKind::Subtract),
                OperatorToken::Star => self.push_operator(OpKind::Multiply),
                OperatorToken::Slash => self.push_operator(OpKind::Divide),
                OperatorToken::Caret => self.push_operator(OpKind::Power),
                // Postfix and unambiguous: nothing on the stack can outrank it.
                OperatorToken::Bang => self.emit(OpKind::Factorial),
                OperatorToken::RParen => self.close_bracket(span)?,
            }
        } else {
            let Some(Spanned { token, span }) = next_value(self.source, &mut self.cursor)? else {
                return Ok(false);
            };
            match token {
                ValueToken::LParen => self.operators.push(Pending::Bracket(span.start)),
                ValueToken::Number(value) => self.push_operand(Token::Number(value)),
                ValueToken::Ident(name) => match OpKind::function(&name) {
                    Some(function) => self.push_operator(function),
                    None => {
                        let id = self.registry.declare_or_get(&name);
                        self.push_operand(Token::Variable(id));
                    }
                },
                ValueToken::Plus => self.push_operator(OpKind::UnaryPlus),
                ValueToken::Minus => self.push_operator(OpKind::UnaryMinus),
            }
        }
        Ok(true)
    }

    fn push_operand(&mut self, token: Token) {
        self.output.push(token);
        self.expecting_operator = true;
    }

    fn push_operator(&mut self, op: OpKind) {
        let stacks_above = match self.operators.last() {
            Some(&top) => binds_over(op, top),
            None => true,
        };
        if !stacks_above {
            // Drain down to the first bracket or lower-priority operator.
            while let Some(&top) = self.operators.last() {
                if top.priority() < op.priority() {
                    break;
                }
                self.operators.pop();
                if let Pending::Operator(top) = top {
                    self.emit(top);
                }
            }
        }
        self.operators.push(Pending::Operator(op));

        if op.is_binary() {
            self.expecting_operator = false;
        }
    }

    fn close_bracket(&mut self, span: Range<usize>) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Bracket(_)) => return Ok(()),
                Some(Pending::Operator(op)) => self.emit(op),
                None => return Err(ParseError::bracket("unmatched closing bracket", span)),
            }
        }
    }

    /// Appends `op` to the output, or folds it into a single number when all
    /// of its operands are literals.
    fn emit(&mut self, op: OpKind) {
        let arity = op.arity();
        let len = self.output.len();
        let foldable = self.fold
            && len >= arity
            && self.output[len - arity..].iter().all(Token::is_number);

        if !foldable {
            self.output.push(Token::Operator(op));
            return;
        }

        self.scratch.clear();
        for token in self.output.drain(len - arity..) {
            if let Token::Number(value) = token {
                self.scratch.push(value);
            }
        }
        op.apply(&mut self.scratch);
        let folded = self.scratch.pop().unwrap_or(f64::NAN);
        debug!("folded {} into {}", op, folded);
        self.output.push(Token::Number(folded));
    }

    fn finish(mut self) -> ParseResult<Program> {
        if !self.expecting_operator {
            return Err(self.missing_value());
        }
        if self.cursor < self.source.len() {
            return Err(self.unexpected_input());
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.emit(op),
                Pending::Bracket(at) => {
                    return Err(ParseError::bracket("missing closing bracket", at..at + 1));
                }
            }
        }

        if stack_balance(&self.output) != 1 {
            return Err(ParseError::syntax(
                "operand count mismatch",
                0..self.source.len(),
            ));
        }

        Ok(Program::new(self.output, self.registry))
    }

    /// A value was expected at the cursor but none could be read.
    fn missing_value(&self) -> ParseError {
        match scan::peek(self.source, self.cursor) {
            None if self.source.trim().is_empty() => {
                ParseError::syntax("empty expression", self.cursor..self.cursor)
            }
            None => ParseError::syntax(
                "value expected at end of input",
                self.cursor..self.cursor,
            ),
            Some(c) if scan::is_binary_operator(c) || c == ')' || c == '!' => ParseError::syntax(
                format!("value expected before '{c}'"),
                self.char_span(c),
            ),
            Some(c) => ParseError::syntax(format!("unexpected character '{c}'"), self.char_span(c)),
        }
    }

    /// Input remains after a complete value that no operator can start.
    fn unexpected_input(&self) -> ParseError {
        match scan::peek(self.source, self.cursor) {
            Some(c) if scan::is_number_start(c) || scan::is_letter(c) || c == '(' => {
                ParseError::syntax(format!("operator expected before '{c}'"), self.char_span(c))
            }
            Some(c) => ParseError::syntax(format!("unexpected character '{c}'"), self.char_span(c)),
            None => ParseError::syntax("unexpected input", self.cursor..self.source.len()),
        }
    }

    fn char_span(&self, c: char) -> Range<usize> {
        self.cursor..self.cursor + c.len_utf8()
    }
}

/// Whether `incoming` can go straight on top of `top` without popping.
/// Anything binds over a bracket.
fn binds_over(incoming: OpKind, top: Pending) -> bool {
    match incoming.priority().cmp(&top.priority()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => incoming.assoc() == Assoc::Right,
        std::cmp::Ordering::Less => false,
    }
}
