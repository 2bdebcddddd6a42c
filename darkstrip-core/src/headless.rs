// darkstrip-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot stripping without building an engine by hand.

use anyhow::Result;
use std::path::Path;

use crate::batch::{run_batch, BatchReport};
use crate::config::{MarkerRule, StripConfig};
use crate::engine::StripEngine;
use crate::engines::regex_engine::RegexEngine;

/// Strips every token flagged by `rule` from `content` and returns the new text.
pub fn headless_strip_string(rule: MarkerRule, content: &str) -> Result<String> {
    let engine = RegexEngine::new(rule)?;
    Ok(engine.strip(content).content)
}

/// Rewrites `paths` in place using `rule`.
pub fn headless_strip_files<P: AsRef<Path>>(rule: MarkerRule, paths: &[P]) -> Result<BatchReport> {
    let engine = RegexEngine::new(rule)?;
    Ok(run_batch(&engine, paths))
}

/// Rewrites the configured targets of `config` in place.
pub fn headless_strip_config(config: &StripConfig) -> Result<BatchReport> {
    headless_strip_files(config.rule.clone(), &config.targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_strip_string_default_marker() -> Result<()> {
        let content = r#"<span className="text-zinc-500 dark:text-zinc-400">Vade</span>"#;
        let stripped = headless_strip_string(MarkerRule::default(), content)?;
        assert_eq!(stripped, r#"<span className="text-zinc-500">Vade</span>"#);
        Ok(())
    }

    #[test]
    fn test_headless_strip_string_rejects_empty_marker() {
        assert!(headless_strip_string(MarkerRule::new(""), "a dark:b").is_err());
    }

    #[test]
    fn test_headless_helpers_reject_overlong_marker() {
        let rule = MarkerRule::new(format!("{}:", "x".repeat(80)));
        assert!(headless_strip_string(rule.clone(), "a b").is_err());
        let paths: [&str; 0] = [];
        assert!(headless_strip_files(rule, &paths).is_err());
    }
}
