// darkstrip-core/src/lib.rs
//! # darkstrip Core Library
//!
//! `darkstrip-core` removes marker-prefixed class tokens (by default the
//! Tailwind `dark:` variants) from text, and rewrites whole files in place.
//!
//! ## Modules
//!
//! * `config`: [`MarkerRule`] and [`StripConfig`], YAML loading and overrides.
//! * `sanitizers`: compiles a rule into a cached regular expression.
//! * `engine`: the [`StripEngine`] trait.
//! * `engines`: concrete engines, currently [`RegexEngine`].
//! * `batch`: the sequential read / strip / overwrite loop and its report.
//! * `headless`: one-shot helpers.
//! * `errors`: [`StripError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use darkstrip_core::{headless_strip_string, MarkerRule};
//!
//! let out = headless_strip_string(MarkerRule::default(), r#"class="foo dark:bg-black bar""#).unwrap();
//! assert_eq!(out, r#"class="foo bar""#);
//! ```
//!
//! A match is a single space, the marker, and a run of characters up to the
//! next whitespace, quote or `>`. A token at the very start of an attribute
//! value has no leading space and is left alone.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod sanitizers;

pub use batch::{run_batch, strip_file, BatchReport, FileOutcome};
pub use config::{MarkerRule, StripConfig, DEFAULT_EXCLUDED, DEFAULT_MARKER, MAX_MARKER_LENGTH};
pub use engine::{removed_chars, StripEngine, StripOutcome};
pub use engines::regex_engine::RegexEngine;
pub use errors::StripError;
pub use headless::{headless_strip_config, headless_strip_files, headless_strip_string};
pub use sanitizers::compiler::{compile_rule, get_or_compile_pattern, pattern_source, CompiledPattern};
