//! File parsers for source code and translation files.
//!
//! - `json`: baseline translation file parser (keeps repeated keys)
//! - `jsx`: JSX/TSX source file parser (uses swc for AST generation)

pub mod json;
pub mod jsx;
