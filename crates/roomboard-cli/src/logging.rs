//! `env_logger` setup.
//!
//! `RUST_LOG` wins when set; otherwise `--verbose` selects `debug`,
//! `--quiet` selects `error`, and the default is `warn`.
use env_logger::{Builder, Env};

use crate::cli::Cli;

/// Returns the filter used when `RUST_LOG` is not set.
pub fn default_filter(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs the global logger. Call once, before the pipeline runs.
pub fn init(cli: &Cli) {
    Builder::from_env(Env::default().default_filter_or(default_filter(cli)))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
