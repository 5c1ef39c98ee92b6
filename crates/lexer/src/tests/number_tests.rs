// Number Literal Tests
//
// Tests for `read_number`: integer, fraction and exponent parts, plus the
// malformed-literal and range errors.

use crate::error::LexErrorKind;
use crate::scan::read_number;

// Helper: read a number from the start of `input`, returning value and final cursor
fn read(input: &str) -> (Result<f64, LexErrorKind>, usize) {
    let mut cursor = 0;
    let result = read_number(input, &mut cursor);
    (result, cursor)
}

fn assert_number(input: &str, expected: f64) {
    let (result, cursor) = read(input);
    assert_eq!(result, Ok(expected), "Failed to read number from: {}", input);
    assert_eq!(cursor, input.len(), "Number should consume all of: {}", input);
}

// ==================== INTEGER TESTS ====================

#[test]
fn test_int_zero() {
    assert_number("0", 0.0);
}

#[test]
fn test_int_multi_digit() {
    assert_number("42", 42.0);
    assert_number("123456789", 123456789.0);
}

#[test]
fn test_int_leading_zeros() {
    assert_number("007", 7.0);
}

// ==================== FRACTION TESTS ====================

#[test]
fn test_fraction() {
    assert_number("3.14", 3.14);
    assert_number("0.5", 0.5);
}

#[test]
fn test_fraction_without_integer_part() {
    assert_number(".5", 0.5);
    assert_number(".25", 0.25);
}

#[test]
fn test_point_without_digit_fails() {
    let (result, cursor) = read("3.");
    assert_eq!(result, Err(LexErrorKind::DigitExpectedAfterPoint));
    assert_eq!(cursor, 2);
}

#[test]
fn test_lone_point_fails() {
    let (result, _) = read(".");
    assert_eq!(result, Err(LexErrorKind::DigitExpectedAfterPoint));
}

#[test]
fn test_point_followed_by_letter_fails() {
    let (result, _) = read("3.x");
    assert_eq!(result, Err(LexErrorKind::DigitExpectedAfterPoint));
}

#[test]
fn test_second_point_stops_number() {
    let (result, cursor) = read("1.5.3");
    assert_eq!(result, Ok(1.5));
    assert_eq!(cursor, 3);
}

// ==================== EXPONENT TESTS ====================

#[test]
fn test_exponent() {
    assert_number("1e3", 1000.0);
    assert_number("1E3", 1000.0);
}

#[test]
fn test_exponent_with_sign() {
    assert_number("1e-2", 0.01);
    assert_number("2.5e+2", 250.0);
}

#[test]
fn test_exponent_after_leading_point() {
    assert_number(".5e1", 5.0);
}

#[test]
fn test_exponent_without_digits_fails() {
    assert_eq!(read("2e").0, Err(LexErrorKind::DigitExpectedInExponent));
    assert_eq!(read("2e+").0, Err(LexErrorKind::DigitExpectedInExponent));
    assert_eq!(read("2E-x").0, Err(LexErrorKind::DigitExpectedInExponent));
}

// ==================== RANGE TESTS ====================

#[test]
fn test_overflow_fails() {
    assert_eq!(read("1e400").0, Err(LexErrorKind::OutOfRange));
    assert_eq!(read("1e309").0, Err(LexErrorKind::OutOfRange));
}

#[test]
fn test_largest_finite_is_accepted() {
    assert_number("1.7976931348623157e308", f64::MAX);
}

#[test]
fn test_underflow_rounds_to_zero() {
    assert_number("1e-400", 0.0);
}

// ==================== CURSOR TESTS ====================

#[test]
fn test_stops_before_letters() {
    let (result, cursor) = read("12abc");
    assert_eq!(result, Ok(12.0));
    assert_eq!(cursor, 2);
}

#[test]
fn test_stops_before_operator() {
    let (result, cursor) = read("12+3");
    assert_eq!(result, Ok(12.0));
    assert_eq!(cursor, 2);
}

#[test]
fn test_reads_from_middle_of_text() {
    let mut cursor = 4;
    assert_eq!(read_number("x + 17 * 2", &mut cursor), Ok(17.0));
    assert_eq!(cursor, 6);
}
