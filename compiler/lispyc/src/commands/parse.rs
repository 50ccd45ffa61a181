//! `lispy parse <expression>`: dump the syntax tree.

use std::io::Write;

use lispy_parse::parse;

use super::{CommandError, Outcome};
use crate::diagnostic::write_parse_error;

/// Print the tree for `source` followed by its size.
pub fn parse_expression<W: Write>(source: &str, out: &mut W) -> Result<Outcome, CommandError> {
    match parse(source) {
        Ok(tree) => {
            write!(out, "{tree}")?;
            writeln!(
                out,
                "nodes: {}, leaves: {}, depth: {}",
                tree.node_count(),
                tree.leaf_count(),
                tree.depth()
            )?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            write_parse_error(source, &err, out)?;
            Ok(Outcome::Failed)
        }
    }
}
