//! compiler.rs - Builds and caches the regular expression for a marker rule.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::MarkerRule;
use crate::errors::StripError;

/// A marker rule compiled into a ready-to-use regex.
#[derive(Debug)]
pub struct CompiledPattern {
    /// Matches ` <marker><token>` where the token runs up to a terminator.
    pub regex: Regex,
    /// The marker literal this pattern was built from.
    pub marker: String,
}

lazy_static! {
    /// Compiled patterns keyed by the hash of their `MarkerRule`.
    static ref COMPILED_PATTERN_CACHE: RwLock<HashMap<u64, Arc<CompiledPattern>>> = RwLock::new(HashMap::new());
}

fn hash_rule(rule: &MarkerRule) -> u64 {
    let mut hasher = DefaultHasher::new();
    rule.hash(&mut hasher);
    hasher.finish()
}

/// Renders the regex source for `rule`.
///
/// The marker is escaped so it always matches literally. The negated class is
/// `\s`, the information separators U+001C..U+001F (whitespace to most regex
/// dialects but not to Unicode `White_Space`), and every character of
/// `rule.excluded`.
pub fn pattern_source(rule: &MarkerRule) -> String {
    let mut class = String::from(r"\s\x1C-\x1F");
    for c in rule.excluded.chars() {
        match c {
            '\n' => class.push_str(r"\n"),
            '\r' => class.push_str(r"\r"),
            '\t' => class.push_str(r"\t"),
            other => class.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    format!(" {}[^{}]+", regex::escape(&rule.marker), class)
}

/// Compiles `rule` without touching the cache.
pub fn compile_rule(rule: &MarkerRule) -> Result<CompiledPattern, StripError> {
    rule.validate()?;
    let source = pattern_source(rule);
    debug!("Compiling strip pattern {:?} for marker '{}'", source, rule.marker);

    let regex = RegexBuilder::new(&source)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| StripError::PatternCompilation(rule.marker.clone(), e))?;

    Ok(CompiledPattern {
        regex,
        marker: rule.marker.clone(),
    })
}

/// Returns the cached pattern for `rule`, compiling it on first use.
pub fn get_or_compile_pattern(rule: &MarkerRule) -> Result<Arc<CompiledPattern>> {
    let cache_key = hash_rule(rule);

    {
        let cache = COMPILED_PATTERN_CACHE
            .read()
            .map_err(|_| anyhow::anyhow!("compiled pattern cache lock poisoned"))?;
        if let Some(pattern) = cache.get(&cache_key) {
            debug!("Serving compiled pattern from cache for key: {}", cache_key);
            return Ok(Arc::clone(pattern));
        }
    }

    let compiled = Arc::new(compile_rule(rule)?);
    COMPILED_PATTERN_CACHE
        .write()
        .map_err(|_| anyhow::anyhow!("compiled pattern cache lock poisoned"))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Compiled and cached pattern for key: {}", cache_key);
    Ok(compiled)
}
