//! `lispy eval <expression>`

use std::io::Write;

use super::{evaluate_line, CommandError, LineStatus, Outcome};
use crate::RunConfig;

/// Evaluate one expression and print its value, or the parse diagnostic.
///
/// Fails when the line does not parse or evaluates to an error.
pub fn eval_expression<W: Write>(
    source: &str,
    config: &RunConfig,
    out: &mut W,
) -> Result<Outcome, CommandError> {
    let report = evaluate_line(source, config.precision);
    out.write_all(report.text.as_bytes())?;

    Ok(match report.status {
        LineStatus::Value => Outcome::Success,
        LineStatus::EvalError | LineStatus::ParseError => Outcome::Failed,
    })
}
