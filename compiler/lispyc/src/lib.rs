//! Lispy driver.
//!
//! Library half of the `lispy` binary. Commands write to any
//! `std::io::Write` so they can be exercised without a terminal; the binary
//! only parses arguments, points them at stdout, and turns the outcome into
//! an exit code.

pub mod commands;
pub mod config;
mod diagnostic;
pub mod tracing_setup;

pub use commands::{CommandError, Outcome};
pub use config::{ConfigError, RunConfig};
