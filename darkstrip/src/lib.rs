// darkstrip/src/lib.rs
//! # darkstrip CLI
//!
//! Command-line front end for `darkstrip-core`: parses arguments, sets up
//! logging, runs a strip batch and prints the report.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::strip::{run_strip, StripOptions};
