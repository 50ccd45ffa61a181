//! Tracing initialization for the `lispy` binary.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `LISPY_LOG=lispy_eval=trace`.
pub const LOG_ENV: &str = "LISPY_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber if `LISPY_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }

        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true);
        let result = tracing_subscriber::registry()
            .with(EnvFilter::from_env(LOG_ENV))
            .with(layer)
            .try_init();

        if let Err(err) = result {
            eprintln!("warning: could not install log subscriber: {err}");
        }
    });
}
