//! Tree-walking evaluation.

use lispy_ir::SyntaxNode;
use lispy_stack::ensure_sufficient_stack;

use crate::operators::{apply_operator, Operator};
use crate::{ErrorKind, Value};

/// Evaluate a syntax tree to a single value.
///
/// Number leaves convert their text; expression nodes fold their operands
/// left to right with the operator in child 1, so `- 10 3 2` is
/// `(10 - 3) - 2`. A lone operand under `-` is negated; under any other
/// operator it is returned as is.
///
/// The tree is assumed to follow the parser's layout. A node missing its
/// operator or first operand evaluates to [`ErrorKind::BadOperator`].
pub fn evaluate(node: &SyntaxNode) -> Value {
    if node.is_number() {
        eval_number(&node.contents)
    } else {
        ensure_sufficient_stack(|| eval_expression(node))
    }
}

fn eval_number(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() && !underflowed(text, x) => Value::Number(x),
        _ => {
            tracing::trace!(text, "number out of range");
            Value::Error(ErrorKind::BadNumber)
        }
    }
}

/// A nonzero literal too small for a normal `f64`: it either rounded to zero
/// or landed in the subnormal range.
fn underflowed(text: &str, x: f64) -> bool {
    if x == 0.0 {
        text.bytes().any(|b| matches!(b, b'1'..=b'9'))
    } else {
        !x.is_normal()
    }
}

/// `[open, operator, operand, operand.., close]`
fn eval_expression(node: &SyntaxNode) -> Value {
    let (Some(operator), Some(first)) = (node.child(1), node.child(2)) else {
        tracing::trace!(tag = %node.tag, children = node.children.len(), "malformed expression");
        return Value::Error(ErrorKind::BadOperator);
    };
    let op = operator.contents.as_str();

    let mut acc = evaluate(first);
    let mut combined = 0usize;
    for operand in node.children.iter().skip(3).take_while(|child| child.is_expr()) {
        acc = apply_operator(acc, op, evaluate(operand));
        combined += 1;
    }

    if combined == 0 && op == Operator::Sub.symbol() {
        return acc.negate();
    }
    acc
}
