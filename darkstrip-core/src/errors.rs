//! errors.rs - Custom error types for the darkstrip-core library.
//!
//! Per-file failures surface through [`StripError`] so the batch runner can
//! record them and move on to the next path.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `darkstrip-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StripError {
    #[error("Marker must not be empty")]
    EmptyMarker,

    #[error("Marker '{0}' must not contain whitespace")]
    WhitespaceInMarker(String),

    #[error("Marker '{0}' must not contain the token terminator {1:?}")]
    TerminatorInMarker(String, char),

    #[error("Marker length ({0}) exceeds maximum allowed ({1})")]
    MarkerTooLong(usize, usize),

    #[error("Failed to compile strip pattern for marker '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stream did not contain valid UTF-8")]
    Decode { path: PathBuf },
}

impl StripError {
    /// The file this error is tied to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StripError::Io { path, .. } | StripError::Decode { path } => Some(path),
            _ => None,
        }
    }
}
