//! A `StripEngine` implementation backed by a single compiled regex.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use crate::config::MarkerRule;
use crate::engine::{removed_chars, StripEngine, StripOutcome};
use crate::sanitizers::compiler::{get_or_compile_pattern, CompiledPattern};

#[derive(Debug)]
pub struct RegexEngine {
    pattern: Arc<CompiledPattern>,
    rule: MarkerRule,
}

impl RegexEngine {
    pub fn new(rule: MarkerRule) -> Result<Self> {
        let pattern = get_or_compile_pattern(&rule)
            .with_context(|| format!("Failed to compile strip pattern for marker '{}'", rule.marker))?;
        Ok(Self { pattern, rule })
    }

    /// Engine for the default `dark:` marker.
    pub fn dark_mode() -> Result<Self> {
        Self::new(MarkerRule::default())
    }
}

impl StripEngine for RegexEngine {
    fn strip(&self, content: &str) -> StripOutcome {
        let matches = self.count_matches(content);
        if matches == 0 {
            return StripOutcome {
                content: content.to_string(),
                matches,
                removed_chars: 0,
            };
        }

        let stripped = match self.pattern.regex.replace_all(content, "") {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => s,
        };
        let removed = removed_chars(content, &stripped);
        debug!(
            "Stripped {} '{}' token(s), {} characters removed.",
            matches, self.pattern.marker, removed
        );

        StripOutcome {
            content: stripped,
            matches,
            removed_chars: removed,
        }
    }

    fn count_matches(&self, content: &str) -> usize {
        self.pattern.regex.find_iter(content).count()
    }

    fn rule(&self) -> &MarkerRule {
        &self.rule
    }
}
