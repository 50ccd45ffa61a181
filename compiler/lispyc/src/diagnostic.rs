//! Parse error rendering with ariadne.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;

/// Write a labelled report for `err` against the line it came from.
pub(crate) fn write_parse_error<W: Write>(
    source: &str,
    err: &ParseError,
    out: &mut W,
) -> io::Result<()> {
    let span = err.span().to_range();
    Report::<Range<usize>>::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string())
        .with_label(Label::new(span).with_message(err.label()))
        .finish()
        .write(Source::from(source.to_string()), out)
}

/// Same report, collected into a string.
pub(crate) fn parse_error_to_string(source: &str, err: &ParseError) -> String {
    let mut buf = Vec::new();
    match write_parse_error(source, err, &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("Error: {err}\n"),
    }
}
