//! Analysis engine.
//!
//! ## Module Structure
//!
//! - `parsers`: source (swc) and baseline (JSON) parsers
//! - `rules`: exclusion rule set for candidate strings
//! - `ancestry`: ancestor frame stack used during traversal
//! - `classify`: hardcoded string classification
//! - `key_usage`: translation calls with static keys
//! - `keys`: key fragments and run-scoped uniqueness
//! - `namespace`: namespaces derived from file paths
//! - `tree`: nested translation tree with `_value` preservation
//! - `lifecycle`: generate, extract, merge, validate, duplicates, find
//! - `context`: configuration, file discovery and the parallel scan
//! - `export`: JSON documents and atomic writes

pub mod ancestry;
pub mod classify;
pub mod context;
pub mod data;
pub mod export;
pub mod file_scanner;
pub mod key_usage;
pub mod keys;
pub mod lifecycle;
pub mod namespace;
pub mod parsers;
pub mod rules;
pub mod tree;

pub use context::{ParseFailure, ScanContext, ScanOutput};
pub use data::*;
