// darkstrip/src/cli.rs
//! Command-line interface definition for `darkstrip`.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "darkstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip dark-mode class tokens from source files in place",
    long_about = "darkstrip removes every ` dark:<token>` (or another marker given with --marker) from the listed files and overwrites them. Each file is read whole, stripped, and written back; a file that cannot be read, decoded or written is reported and skipped.",
)]
pub struct Cli {
    /// Files to rewrite. Defaults to the targets of the active configuration.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Path to a YAML configuration (`marker`, `excluded`, `targets`).
    #[arg(long = "config", value_name = "FILE", env = "DARKSTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Marker literal that flags a token for removal.
    #[arg(long = "marker", value_name = "TEXT")]
    pub marker: Option<String>,

    /// Suppress all internal logging.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd')]
    pub debug: bool,
}
