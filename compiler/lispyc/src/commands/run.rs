//! `lispy run <file>`: evaluate every expression in a file.
//!
//! One expression per line. Blank lines and lines starting with `;` are
//! skipped. Lines are independent, so with `parallel` set they are
//! evaluated on the rayon pool; output always follows input order.

use std::fmt;
use std::io::Write;

use rayon::prelude::*;

use super::{evaluate_line, read_file, CommandError, LineReport, LineStatus, Outcome};
use crate::RunConfig;

/// Counts gathered over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub expressions: usize,
    pub eval_errors: usize,
    pub parse_errors: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, status: LineStatus) {
        self.expressions += 1;
        match status {
            LineStatus::Value => {}
            LineStatus::EvalError => self.eval_errors += 1,
            LineStatus::ParseError => self.parse_errors += 1,
        }
    }

    pub fn errors(&self) -> usize {
        self.eval_errors + self.parse_errors
    }

    pub fn outcome(&self) -> Outcome {
        if self.errors() == 0 {
            Outcome::Success
        } else {
            Outcome::Failed
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.expressions,
            plural(self.expressions, "expression"),
            self.errors(),
            plural(self.errors(), "error"),
        )
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Run every expression in the file at `path`.
pub fn run_file<W: Write>(
    path: &str,
    config: &RunConfig,
    out: &mut W,
) -> Result<Outcome, CommandError> {
    let source = read_file(path)?;
    tracing::debug!(path, bytes = source.len(), "running file");
    run_source(&source, config, out)
}

/// Run every expression in `source`.
pub fn run_source<W: Write>(
    source: &str,
    config: &RunConfig,
    out: &mut W,
) -> Result<Outcome, CommandError> {
    let lines: Vec<(usize, &str)> = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(';'))
        .collect();

    let reports: Vec<LineReport> = if config.parallel {
        lines
            .par_iter()
            .map(|(_, line)| evaluate_line(line, config.precision))
            .collect()
    } else {
        lines
            .iter()
            .map(|(_, line)| evaluate_line(line, config.precision))
            .collect()
    };

    let mut summary = RunSummary::default();
    for ((line_no, _), report) in lines.iter().zip(&reports) {
        if report.status == LineStatus::ParseError {
            writeln!(out, "line {line_no}:")?;
        }
        out.write_all(report.text.as_bytes())?;
        summary.record(report.status);
    }

    if config.stats {
        writeln!(out, "{summary}")?;
    }
    tracing::debug!(
        expressions = summary.expressions,
        errors = summary.errors(),
        "run finished"
    );

    Ok(summary.outcome())
}
