//! Command handlers for the `lispy` CLI.
//!
//! Each submodule implements one command. Line evaluation and file reading
//! are shared here.

use std::io;

use lispy_eval::{evaluate, render};
use lispy_parse::parse;

use crate::diagnostic::parse_error_to_string;

mod eval;
mod parse;
mod run;

pub use eval::eval_expression;
pub use parse::parse_expression;
pub use run::{run_file, run_source, RunSummary};

/// Whether a command succeeded, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Failures that stop a command outright (as opposed to a line that
/// evaluates to an error, which is ordinary output).
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// How a single line fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineStatus {
    Value,
    EvalError,
    ParseError,
}

/// Rendered result of one line, ready to print.
#[derive(Debug, Clone)]
pub(crate) struct LineReport {
    pub text: String,
    pub status: LineStatus,
}

/// Parse, evaluate, and render one expression.
pub(crate) fn evaluate_line(source: &str, precision: usize) -> LineReport {
    match parse(source) {
        Ok(tree) => {
            let value = evaluate(&tree);
            let status = if value.is_error() {
                LineStatus::EvalError
            } else {
                LineStatus::Value
            };
            LineReport {
                text: format!("{}\n", render(value, precision)),
                status,
            }
        }
        Err(err) => LineReport {
            text: parse_error_to_string(source, &err),
            status: LineStatus::ParseError,
        },
    }
}

/// Read a file, mapping I/O failures to a user-facing error.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound {
            path: path.to_string(),
        },
        _ => CommandError::Read {
            path: path.to_string(),
            source,
        },
    })
}
