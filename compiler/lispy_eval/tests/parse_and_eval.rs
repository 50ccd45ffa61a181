//! End-to-end tests: source text through `lispy_parse` into the evaluator.

use lispy_eval::{apply_operator, evaluate, ErrorKind, Value};
use lispy_ir::SyntaxNode;
use lispy_parse::parse;
use proptest::prelude::*;

fn eval(source: &str) -> Value {
    let tree = parse(source).unwrap_or_else(|err| panic!("{source:?} failed to parse: {err}"));
    evaluate(&tree)
}

fn num(x: f64) -> Value {
    Value::number(x)
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition() {
        assert_eq!(eval("+ 1 2"), num(3.0));
        assert_eq!(eval("+ 1 2 3 4 5"), num(15.0));
    }

    #[test]
    fn test_left_fold_subtraction() {
        assert_eq!(eval("- 10 3 2"), num(5.0));
    }

    #[test]
    fn test_unary_negation() {
        assert_eq!(eval("- 5"), num(-5.0));
        assert_eq!(eval("- (- 5)"), num(5.0));
        assert_eq!(eval("* 2 (- 4)"), num(-8.0));
    }

    #[test]
    fn test_sign_attached_to_operator() {
        assert_eq!(eval("-5 3"), num(2.0));
        assert_eq!(eval("-1"), num(-1.0));
        assert_eq!(eval("+ 1 (-2)"), num(-1.0));
        assert_eq!(eval("-10 3 (-2)"), num(9.0));
    }

    #[test]
    fn test_nested() {
        assert_eq!(eval("* 2 (+ 1 1)"), num(4.0));
        assert_eq!(eval("+ 5 (* 2 2)"), num(9.0));
        assert_eq!(eval("- (* 10 10) (+ 1 1 1)"), num(97.0));
        assert_eq!(eval("/ (* 10 2) (+ 1 1 2)"), num(5.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(eval("/ 10 4"), num(2.5));
        assert_eq!(eval("+ 0.5 0.25"), num(0.75));
        assert_eq!(eval("* -1.5 2"), num(-3.0));
    }

    #[test]
    fn test_named_operators() {
        assert_eq!(eval("min 5 2 8"), num(2.0));
        assert_eq!(eval("max 5 2 8"), num(8.0));
        assert_eq!(eval("mod 10 4"), num(2.0));
        assert_eq!(eval("% 10 4"), num(2.0));
        assert_eq!(eval("% 11 4"), num(-1.0));
        assert_eq!(eval("^ 2 (max 3 (min 10 4))"), num(16.0));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("/ 1 0"), Value::error(ErrorKind::DivideByZero));
        assert_eq!(eval("/ 10 0.0"), Value::error(ErrorKind::DivideByZero));
    }

    #[test]
    fn test_nested_division_by_zero() {
        assert_eq!(eval("/ 1 (- 3 3)"), Value::error(ErrorKind::DivideByZero));
        assert_eq!(
            eval("+ 1 (* 2 (/ 5 (- 2 2)))"),
            Value::error(ErrorKind::DivideByZero)
        );
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(eval("foo 1 2"), Value::error(ErrorKind::BadOperator));
        assert_eq!(eval("+ 1 (pow 2 3)"), Value::error(ErrorKind::BadOperator));
    }

    #[test]
    fn test_out_of_range_literal() {
        let source = format!("+ 1 {}", "9".repeat(400));
        assert_eq!(eval(&source), Value::error(ErrorKind::BadNumber));
    }

    #[test]
    fn test_underflowing_literal() {
        let source = format!("+ 1 0.{}1", "0".repeat(330));
        assert_eq!(eval(&source), Value::error(ErrorKind::BadNumber));
    }

    #[test]
    fn test_first_error_survives() {
        assert_eq!(
            eval("+ (/ 1 0) (foo 1 2)"),
            Value::error(ErrorKind::DivideByZero)
        );
        assert_eq!(
            eval("+ (foo 1 2) (/ 1 0)"),
            Value::error(ErrorKind::BadOperator)
        );
    }

    #[test]
    fn test_short_circuit_contract() {
        assert_eq!(
            apply_operator(Value::error(ErrorKind::BadOperator), "+", num(5.0)),
            Value::error(ErrorKind::BadOperator)
        );
        assert_eq!(
            apply_operator(num(5.0), "+", Value::error(ErrorKind::BadNumber)),
            Value::error(ErrorKind::BadNumber)
        );
    }
}

#[test]
fn test_rendered_output() {
    assert_eq!(eval("+ 1 2").to_string(), "3.000000");
    assert_eq!(eval("/ 1 0").to_string(), "Error: Division By Zero!");
    assert_eq!(eval("foo 1 2").to_string(), "Error: Invalid Operator!");
}

#[test]
fn test_evaluation_is_repeatable() {
    let tree = parse("/ 1 (+ 0.1 0.2) 7").unwrap();
    let bits = |v: Value| v.as_number().map(f64::to_bits);
    assert_eq!(bits(evaluate(&tree)), bits(evaluate(&tree)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_number_leaf_round_trips(
        x in any::<f64>().prop_filter("normal or zero", |x| x.is_normal() || *x == 0.0)
    ) {
        let node = SyntaxNode::number(x.to_string());
        prop_assert_eq!(evaluate(&node), Value::number(x));
    }

    #[test]
    fn prop_parsed_literal_round_trips(x in -1.0e6f64..1.0e6) {
        // `Display` never switches to exponent notation.
        let source = format!("+ {x}");
        prop_assert_eq!(eval(&source), Value::number(x));
    }

    #[test]
    fn prop_sum_is_left_fold(xs in prop::collection::vec(-1000i32..1000, 1..12)) {
        let source = format!(
            "+ {}",
            xs.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );
        let expected = xs.iter().fold(0.0, |acc, &x| acc + f64::from(x));
        prop_assert_eq!(eval(&source), Value::number(expected));
    }

    #[test]
    fn prop_subtraction_is_left_fold(xs in prop::collection::vec(-1000i32..1000, 2..12)) {
        let source = format!(
            "- {}",
            xs.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );
        let first = f64::from(xs[0]);
        let expected = xs[1..].iter().fold(first, |acc, &x| acc - f64::from(x));
        prop_assert_eq!(eval(&source), Value::number(expected));
    }

    #[test]
    fn prop_zero_divisor_always_errors(x in -1000i32..1000) {
        let source = format!("/ {x} (- 7 7)");
        prop_assert_eq!(eval(&source), Value::error(ErrorKind::DivideByZero));
    }
}
