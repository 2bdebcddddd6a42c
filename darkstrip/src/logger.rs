//! Logger setup for the `darkstrip` binary.
//!
//! Diagnostics go to stderr through `env_logger` so they never mix with the
//! report on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises the global logger.
///
/// `level` overrides `RUST_LOG` when given; otherwise `RUST_LOG` applies and
/// defaults to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
