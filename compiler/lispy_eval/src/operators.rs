//! Operator table and binary dispatch.
//!
//! The operator set is closed, so it is an enum matched exhaustively rather
//! than a registry of function objects. Adding an operator means adding a
//! variant plus its arm in `from_symbol`, `symbol`, and `apply`; the
//! compiler points out any arm that is missing.

use std::fmt;

use crate::{ErrorKind, Value};

/// A recognised operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// IEEE 754 remainder: the quotient is rounded to nearest, ties to even.
    Rem,
    /// Truncated remainder; the result takes the sign of the dividend.
    Mod,
    Min,
    Max,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Rem,
        Operator::Mod,
        Operator::Min,
        Operator::Max,
    ];

    /// Look up an operator by its exact source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "^" => Operator::Pow,
            "%" => Operator::Rem,
            "mod" => Operator::Mod,
            "min" => Operator::Min,
            "max" => Operator::Max,
            _ => return None,
        };
        Some(op)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Rem => "%",
            Operator::Mod => "mod",
            Operator::Min => "min",
            Operator::Max => "max",
        }
    }

    /// Apply to two numbers. Only division can fail.
    pub fn apply(self, a: f64, b: f64) -> Value {
        let result = match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => {
                if b == 0.0 {
                    tracing::trace!(dividend = a, "division by zero");
                    return Value::Error(ErrorKind::DivideByZero);
                }
                a / b
            }
            Operator::Pow => a.powf(b),
            Operator::Rem => ieee_remainder(a, b),
            Operator::Mod => a % b,
            Operator::Min => a.min(b),
            Operator::Max => a.max(b),
        };
        Value::Number(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Combine `x` and `y` under the operator spelled `op`.
///
/// An error in `x` wins, then an error in `y`; both are checked before `op`
/// is looked at, so an unknown operator never masks an earlier error.
pub fn apply_operator(x: Value, op: &str, y: Value) -> Value {
    let (a, b) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(a), Value::Number(b)) => (a, b),
    };

    match Operator::from_symbol(op) {
        Some(operator) => operator.apply(a, b),
        None => {
            tracing::trace!(op, "unknown operator");
            Value::Error(ErrorKind::BadOperator)
        }
    }
}

/// `x - n * y` where `n` is `x / y` rounded to the nearest integer, ties to
/// even. Matches C `remainder`: the result lies in `[-|y|/2, |y|/2]`.
fn ieee_remainder(x: f64, y: f64) -> f64 {
    // `%` is exact; only the final correction step can round.
    let r = x % y;
    let half = y.abs() / 2.0;
    let odd_quotient = ((x - r) / y) % 2.0 != 0.0;
    if r.abs() > half || (r.abs() == half && odd_quotient) {
        r - y.abs().copysign(r)
    } else {
        r
    }
}
