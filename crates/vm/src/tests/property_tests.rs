//! Property-based tests over randomly generated expressions.

use proptest::prelude::*;

use crate::{CompileOptions, Expression};

// Strategy for operands: small integers, one-decimal literals, a variable and a constant
fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..20).prop_map(|n| n.to_string()),
        (0u32..100).prop_map(|n| format!("{}.{}", n / 10, n % 10)),
        Just("x".to_string()),
        Just("pi".to_string()),
    ]
}

// Strategy for syntactically valid expressions built from operands
fn expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "^"]),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
            inner.clone().prop_map(|a| format!("({})", a)),
            inner.clone().prop_map(|a| format!("-{}", a)),
            (
                prop::sample::select(vec!["sqrt", "sin", "cos", "log", "atan"]),
                inner.clone()
            )
                .prop_map(|(f, a)| format!("{}({})", f, a)),
            inner.prop_map(|a| format!("({})!", a)),
        ]
    })
}

fn build(source: &str, fold: bool) -> Expression {
    let options = CompileOptions::new().fold_constants(fold);
    let mut expr = Expression::with_options(source, &options)
        .unwrap_or_else(|e| panic!("generated {:?} failed to compile: {}", source, e));
    expr.set_variable("x", 1.5);
    expr
}

fn same_value(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn folding_never_changes_the_result(source in expression()) {
        let folded = build(&source, true).evaluate();
        let unfolded = build(&source, false).evaluate();
        prop_assert!(same_value(folded, unfolded), "{}: {} vs {}", source, folded, unfolded);
    }

    #[test]
    fn compiled_programs_are_balanced(source in expression()) {
        for fold in [true, false] {
            let expr = build(&source, fold);
            prop_assert_eq!(expr.program().stack_balance(), 1);
        }
    }

    #[test]
    fn folding_never_lengthens_the_program(source in expression()) {
        prop_assert!(build(&source, true).postfix().len() <= build(&source, false).postfix().len());
    }

    #[test]
    fn evaluation_is_repeatable(source in expression()) {
        let mut expr = build(&source, true);
        let first = expr.evaluate();
        prop_assert!(same_value(first, expr.evaluate()));
    }
}
