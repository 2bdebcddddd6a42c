// darkstrip/src/main.rs
//! darkstrip entry point.
//!
//! Resolves the configuration, builds the regex engine and runs one batch.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::debug;
use std::io;

use darkstrip::cli::Cli;
use darkstrip::logger;
use darkstrip::{run_strip, StripOptions};
use darkstrip_core::{RegexEngine, StripConfig};

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    // 1. Base configuration: explicit file or the embedded default.
    let config = match &args.config {
        Some(path) => StripConfig::load_from_file(path)?,
        None => StripConfig::load_default()?,
    };

    // 2. Command-line overrides.
    let config = config
        .apply_overrides(args.marker.clone(), args.paths.clone())
        .context("Invalid command-line overrides")?;
    debug!("Resolved configuration: {:?}", config);

    let engine = RegexEngine::new(config.rule.clone())?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let opts = StripOptions::from_config(&config, supports_color);
    run_strip(&engine, &opts, &mut stdout.lock())?;

    Ok(())
}
