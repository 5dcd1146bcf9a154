//! Glossa - hardcoded string finder and translation key manager for JSX/TSX
//!
//! Glossa finds user-facing text written directly into React and React
//! Native components and manages the translation keys derived from it:
//! generation, extraction from translation calls, validation against a
//! translation file and duplicate detection.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `core`: Classification engine and key lifecycle
//! - `error`: Typed errors
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod utils;
