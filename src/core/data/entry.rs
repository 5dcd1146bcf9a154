use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a key entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySource {
    /// Key already invoked in code through a translation function.
    Existing,
    /// Key generated from a hardcoded string.
    Hardcoded,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Existing => write!(f, "existing"),
            KeySource::Hardcoded => write!(f, "hardcoded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyLocation {
    pub file: String,
    pub line: usize,
}

impl KeyLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// One key of a generated or extracted key set.
///
/// Serialized as the value side of the key map document, so `full_key`
/// is skipped there (it is the map key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    #[serde(skip)]
    pub full_key: String,
    pub value: String,
    pub source: KeySource,
    pub locations: Vec<KeyLocation>,
}
