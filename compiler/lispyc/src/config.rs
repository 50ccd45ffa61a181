//! Command-line configuration.

use lispy_eval::DEFAULT_PRECISION;

/// Largest accepted `--precision`.
pub const MAX_PRECISION: usize = 32;

/// Options shared by the evaluating commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Decimal places when printing numbers.
    pub precision: usize,
    /// Evaluate the lines of a file on the rayon pool.
    pub parallel: bool,
    /// Print an expression/error summary after a run.
    pub stats: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            precision: DEFAULT_PRECISION,
            parallel: true,
            stats: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("invalid precision '{0}' (expected 0-32)")]
    InvalidPrecision(String),
}

impl RunConfig {
    /// Split `args` into options and positional arguments.
    ///
    /// Anything starting with `--` is an option. Everything else, including
    /// a lone `-` or a negative number, is positional.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<&str>), ConfigError> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg.starts_with("--") {
                config.apply_flag(arg)?;
            } else {
                positional.push(arg.as_str());
            }
        }

        Ok((config, positional))
    }

    /// Apply a single `--option`.
    pub fn apply_flag(&mut self, flag: &str) -> Result<(), ConfigError> {
        if let Some(value) = flag.strip_prefix("--precision=") {
            self.precision = value
                .parse()
                .ok()
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or_else(|| ConfigError::InvalidPrecision(value.to_string()))?;
            return Ok(());
        }

        match flag {
            "--no-parallel" => self.parallel = false,
            "--parallel" => self.parallel = true,
            "--stats" => self.stats = true,
            _ => return Err(ConfigError::UnknownFlag(flag.to_string())),
        }
        Ok(())
    }
}
