//! Stable JSON serialization for result files.
//!
//! Result files are read by people and diffed between runs, so output is:
//! - 2-space indented
//! - terminated by a trailing newline
//! - UTF-8 without BOM

mod json;

pub use json::*;
