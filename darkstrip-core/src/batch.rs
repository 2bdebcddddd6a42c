//! Batch rewriting of files in place.
//!
//! [`run_batch`] walks an ordered list of paths and, for each one, reads the
//! whole file, strips it with a [`StripEngine`], and writes the result back
//! over the original. A failing file is recorded as [`FileOutcome::Failed`]
//! and the batch moves on; nothing is retried or rolled back.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::StripEngine;
use crate::errors::StripError;

/// What happened to one path of a batch.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was rewritten; `removed` characters were deleted.
    Stripped { path: PathBuf, removed: usize },
    /// Reading, decoding or writing the file failed.
    Failed { path: PathBuf, error: StripError },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Stripped { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    /// Characters removed from this file, zero on failure.
    pub fn removed(&self) -> usize {
        match self {
            FileOutcome::Stripped { removed, .. } => *removed,
            FileOutcome::Failed { .. } => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Stripped { .. })
    }

    /// The file name used in success lines, falling back to the full path.
    pub fn display_name(&self) -> String {
        let path = self.path();
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// Per-file outcomes of a batch, in the order the paths were given.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Sum of removed characters over successfully rewritten files.
    pub fn total_removed(&self) -> usize {
        self.outcomes.iter().map(FileOutcome::removed).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Reads, strips and overwrites a single file, returning the removed count.
///
/// The file is written back even when nothing matched.
pub fn strip_file(engine: &dyn StripEngine, path: &Path) -> Result<usize, StripError> {
    let bytes = fs::read(path).map_err(|source| StripError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| StripError::Decode {
        path: path.to_path_buf(),
    })?;

    let outcome = engine.strip(&content);
    debug!(
        "{}: {} match(es), {} -> {} chars",
        path.display(),
        outcome.matches,
        content.chars().count(),
        outcome.content.chars().count()
    );

    fs::write(path, outcome.content.as_bytes()).map_err(|source| StripError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(outcome.removed_chars)
}

/// Runs `engine` over every path in order and collects the outcomes.
pub fn run_batch<P: AsRef<Path>>(engine: &dyn StripEngine, paths: &[P]) -> BatchReport {
    info!(
        "Stripping marker '{}' from {} file(s).",
        engine.rule().marker,
        paths.len()
    );

    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        let outcome = match strip_file(engine, path) {
            Ok(removed) => FileOutcome::Stripped {
                path: path.to_path_buf(),
                removed,
            },
            Err(error) => {
                warn!("Skipping {}: {}", path.display(), error);
                FileOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        };
        report.outcomes.push(outcome);
    }

    info!(
        "Batch finished: {} rewritten, {} failed, {} characters removed.",
        report.succeeded(),
        report.failed(),
        report.total_removed()
    );
    report
}
