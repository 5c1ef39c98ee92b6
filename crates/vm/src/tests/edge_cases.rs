// Edge Case Tests
//
// Construction failures, the poisoned placeholder, cloning and threads.

use super::eval;
use crate::{Expression, Machine, ParseError};
use lexer::LexErrorKind;
use parser::{OpKind, Registry, Token};

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Expression::new("3."),
        Err(ParseError::Lex(ref e)) if e.kind == LexErrorKind::DigitExpectedAfterPoint
    ));
    assert!(matches!(
        Expression::new("(1+2"),
        Err(ParseError::UnbalancedBracket { .. })
    ));
    assert!(matches!(
        Expression::new("1+2)"),
        Err(ParseError::UnbalancedBracket { .. })
    ));
    assert!(matches!(Expression::new("1+"), Err(ParseError::Syntax { .. })));
}

#[test]
fn test_poisoned_expression_is_nan() {
    let mut expr = Expression::poisoned("1+");
    assert!(expr.evaluate().is_nan());
    assert_eq!(expr.postfix().len(), 1);
    assert_eq!(expr.source(), "1+");
}

#[test]
fn test_evaluation_is_deterministic() {
    let mut expr = Expression::new("sin(x) * e ^ x / 3!").unwrap();
    expr.set_variable("x", 0.7);
    let first = expr.evaluate();
    for _ in 0..100 {
        assert_eq!(expr.evaluate().to_bits(), first.to_bits());
    }
}

#[test]
fn test_clone_is_independent() {
    let mut original = Expression::new("x * 2").unwrap();
    original.set_variable("x", 1.0);
    let mut copy = original.clone();
    copy.set_variable("x", 10.0);
    assert_eq!(original.evaluate(), 2.0);
    assert_eq!(copy.evaluate(), 20.0);
}

#[test]
fn test_instances_evaluate_on_separate_threads() {
    let template = Expression::new("x ^ 2").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mut expr = template.clone();
            std::thread::spawn(move || {
                expr.set_variable("x", i as f64);
                expr.evaluate()
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0.0, 1.0, 4.0, 9.0]);
}

#[test]
fn test_display_shows_postfix() {
    let expr = Expression::new("x * (2 + 3)").unwrap();
    assert_eq!(expr.to_string(), "x 5 *");
}

#[test]
fn test_huge_factorial_is_infinite() {
    assert_eq!(eval("1e300!"), f64::INFINITY);
    assert_eq!(eval("171!"), f64::INFINITY);
}

#[test]
fn test_extreme_constants() {
    assert_eq!(eval("Epsilon / 2"), 0.0);
    assert_eq!(eval("MinValue * 2"), f64::NEG_INFINITY);
    assert!(eval("inf - inf").is_nan());
}

#[test]
fn test_machine_tolerates_malformed_sequence() {
    let registry = Registry::new();
    let mut machine = Machine::new();
    assert!(machine.run(&[], &registry).is_nan());
    assert!(machine.run(&[Token::Operator(OpKind::Add)], &registry).is_nan());
}

#[test]
fn test_machine_reuses_stack() {
    let registry = Registry::new();
    let mut machine = Machine::new();
    let tokens = [Token::Number(2.0), Token::Number(3.0), Token::Operator(OpKind::Multiply)];
    assert_eq!(machine.run(&tokens, &registry), 6.0);
    assert_eq!(machine.run(&tokens, &registry), 6.0);
}
