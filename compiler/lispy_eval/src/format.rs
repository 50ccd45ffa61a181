//! Rendering values for display.
//!
//! Numbers print as fixed-point decimals, six places unless the formatter
//! asks for another precision (`format!("{value:.2}")`). Errors print as
//! `Error: ` followed by the message for their kind.

use std::fmt;

use crate::Value;

/// Decimal places used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => {
                let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
                write!(f, "{x:.precision$}")
            }
            Value::Error(kind) => write!(f, "Error: {kind}"),
        }
    }
}

/// Render `value` with `precision` decimal places.
pub fn render(value: Value, precision: usize) -> String {
    format!("{value:.precision$}")
}
