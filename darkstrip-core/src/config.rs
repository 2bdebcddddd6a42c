//! Configuration management for `darkstrip-core`.
//!
//! This module defines the marker rule that drives the transform and the
//! top-level [`StripConfig`] holding the rule plus the ordered target list.
//! Configurations are YAML documents; a built-in default is embedded in the
//! library.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::StripError;

/// The marker used when none is configured.
pub const DEFAULT_MARKER: &str = "dark:";

/// Characters that terminate a marked token, on top of whitespace.
pub const DEFAULT_EXCLUDED: &str = "\"'>\n";

/// Maximum allowed length for a marker literal.
pub const MAX_MARKER_LENGTH: usize = 64;

/// The two parameters of the strip transform.
///
/// A match is a single space, then `marker` verbatim, then one or more
/// characters that are neither whitespace nor contained in `excluded`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerRule {
    /// Literal prefix flagging a token for removal (e.g. `dark:`).
    pub marker: String,
    /// Extra token terminators. Whitespace always terminates a token.
    pub excluded: String,
}

impl Default for MarkerRule {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            excluded: DEFAULT_EXCLUDED.to_string(),
        }
    }
}

impl MarkerRule {
    /// Builds a rule for `marker` with the default terminator set.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ..Self::default()
        }
    }

    /// True when `c` ends a marked token under this rule.
    pub fn is_terminator(&self, c: char) -> bool {
        c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c) || self.excluded.contains(c)
    }

    /// Checks the rule can produce a meaningful pattern.
    ///
    /// The marker must not contain a terminator: otherwise deleting one token
    /// can butt a leading space against the next marker and a second pass
    /// would find a match the first did not.
    pub fn validate(&self) -> Result<(), StripError> {
        if self.marker.is_empty() {
            return Err(StripError::EmptyMarker);
        }
        if self.marker.len() > MAX_MARKER_LENGTH {
            return Err(StripError::MarkerTooLong(self.marker.len(), MAX_MARKER_LENGTH));
        }
        if self.marker.chars().any(char::is_whitespace) {
            return Err(StripError::WhitespaceInMarker(self.marker.clone()));
        }
        if let Some(c) = self.marker.chars().find(|&c| self.is_terminator(c)) {
            return Err(StripError::TerminatorInMarker(self.marker.clone(), c));
        }
        Ok(())
    }
}

/// Top-level configuration for a strip run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StripConfig {
    #[serde(flatten)]
    pub rule: MarkerRule,
    /// Files to rewrite, processed in this order.
    pub targets: Vec<PathBuf>,
}

impl StripConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading strip configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: StripConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded marker '{}' with {} target(s) from {}.",
            config.rule.marker,
            config.targets.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default strip configuration from embedded string...");
        let default_yaml = include_str!("../config/default_targets.yaml");
        let config: StripConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;

        debug!("Default configuration lists {} targets.", config.targets.len());
        Ok(config)
    }

    /// Applies command-line overrides on top of a loaded configuration.
    ///
    /// A non-empty `paths` replaces the configured targets entirely.
    pub fn apply_overrides(mut self, marker: Option<String>, paths: Vec<PathBuf>) -> Result<Self> {
        if let Some(marker) = marker {
            debug!("Overriding marker '{}' with '{}'", self.rule.marker, marker);
            self.rule.marker = marker;
        }
        if !paths.is_empty() {
            debug!("Replacing {} configured target(s) with {} from the command line.", self.targets.len(), paths.len());
            self.targets = paths;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        self.rule.validate()?;
        if self.targets.is_empty() {
            warn!("Configuration has no targets; nothing will be rewritten.");
        }
        Ok(())
    }
}
