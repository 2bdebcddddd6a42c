//! The `darkstrip` command: run a batch over the resolved targets and print
//! the report.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use darkstrip_core::{run_batch, BatchReport, StripConfig, StripEngine};

use crate::ui::output_format;

/// Everything the command needs once arguments and config are resolved.
pub struct StripOptions {
    pub targets: Vec<PathBuf>,
    pub supports_color: bool,
}

impl StripOptions {
    pub fn from_config(config: &StripConfig, supports_color: bool) -> Self {
        Self {
            targets: config.targets.clone(),
            supports_color,
        }
    }
}

/// Rewrites every target with `engine`, then writes the report to `writer`.
///
/// Per-file failures are part of the report, not an error. Only a failure to
/// write the report itself is returned.
pub fn run_strip<W: Write>(engine: &dyn StripEngine, opts: &StripOptions, writer: &mut W) -> Result<BatchReport> {
    info!("Starting darkstrip run over {} target(s).", opts.targets.len());
    debug!("Targets: {:?}", opts.targets);

    let report = run_batch(engine, &opts.targets);

    output_format::print_report(writer, &report, opts.supports_color).context("Failed to write report")?;
    writer.flush().context("Failed to flush report")?;

    info!("darkstrip run completed.");
    Ok(report)
}
