// darkstrip-core/src/engine.rs
//! Defines the core `StripEngine` trait and the result of a single transform.
//!
//! The trait decouples the batch runner from the way marked tokens are found,
//! so the runner can be driven by any engine that deletes text.
//!
//! License: MIT OR APACHE 2.0

use crate::config::MarkerRule;

/// Result of stripping one blob of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// The text with every marked token removed.
    pub content: String,
    /// Number of tokens deleted.
    pub matches: usize,
    /// Unicode scalar values removed; never negative since the transform only deletes.
    pub removed_chars: usize,
}

impl StripOutcome {
    /// True when the input contained nothing to strip.
    pub fn is_unchanged(&self) -> bool {
        self.matches == 0
    }
}

/// A pluggable engine that removes marked tokens from text.
pub trait StripEngine: Send + Sync {
    /// Removes every marked token from `content` in a single left-to-right pass.
    fn strip(&self, content: &str) -> StripOutcome;

    /// Counts the tokens `strip` would remove, without building new text.
    fn count_matches(&self, content: &str) -> usize;

    /// The rule this engine was built from.
    fn rule(&self) -> &MarkerRule;
}

/// Difference in Unicode scalar count between `original` and `stripped`.
pub fn removed_chars(original: &str, stripped: &str) -> usize {
    original
        .chars()
        .count()
        .saturating_sub(stripped.chars().count())
}
