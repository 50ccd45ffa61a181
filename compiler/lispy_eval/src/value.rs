//! Evaluation result values.

/// Why an evaluation produced no number.
///
/// The `Display` text is the fixed message shown to users for each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// The divisor of `/` evaluated to exactly zero.
    #[error("Division By Zero!")]
    DivideByZero,
    /// The operator token is not in the operator table.
    #[error("Invalid Operator!")]
    BadOperator,
    /// A number leaf did not convert to a finite `f64`.
    #[error("Invalid Number!")]
    BadNumber,
}

/// Result of evaluating a node: a number, or an error.
///
/// Immutable and `Copy`. Holds nothing from the tree that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Error(ErrorKind),
}

impl Value {
    #[inline]
    pub const fn number(x: f64) -> Self {
        Value::Number(x)
    }

    #[inline]
    pub const fn error(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }

    #[inline]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(x),
            Value::Error(_) => None,
        }
    }

    #[inline]
    pub const fn as_error(self) -> Option<ErrorKind> {
        match self {
            Value::Number(_) => None,
            Value::Error(kind) => Some(kind),
        }
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Negate a number. Errors pass through untouched.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Value::Number(x) => Value::Number(-x),
            error @ Value::Error(_) => error,
        }
    }

    /// Lift into `Result` for callers that want `?` propagation.
    pub fn into_result(self) -> Result<f64, ErrorKind> {
        match self {
            Value::Number(x) => Ok(x),
            Value::Error(kind) => Err(kind),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl From<Result<f64, ErrorKind>> for Value {
    fn from(result: Result<f64, ErrorKind>) -> Self {
        match result {
            Ok(x) => Value::Number(x),
            Err(kind) => Value::Error(kind),
        }
    }
}
