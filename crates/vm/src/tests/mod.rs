// Evaluator Test Modules

mod edge_cases;
mod property_tests;

use crate::Expression;

pub(crate) fn eval(input: &str) -> f64 {
    Expression::new(input)
        .unwrap_or_else(|e| panic!("failed to compile {:?}: {}", input, e))
        .evaluate()
}
