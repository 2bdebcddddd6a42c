//! Pattern compilation for the strip engines.
//!
//! Turns a [`MarkerRule`](crate::config::MarkerRule) into a compiled regular
//! expression and caches the result so repeated runs over the same rule do
//! not recompile.

pub mod compiler;
