//! Translation key lifecycle.
//!
//! Pure transforms over scan output and baselines:
//!
//! - `generate`: hardcoded strings → keys (namespaced, unique per run)
//! - `extract`: statically known key usages → placeholder keys
//! - `merge`: union of extracted and generated keys, overlay on a baseline
//! - `validate`: baseline keys vs. used keys
//! - `duplicates`: repeated keys and repeated values in a baseline
//! - `find`: where a string or key is used

pub mod duplicates;
pub mod extract;
pub mod find;
pub mod generate;
pub mod merge;
pub mod validate;

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::data::{KeyEntry, KeyLocation};
use super::tree::TranslationTree;

pub use duplicates::{DuplicateKey, DuplicateReport, DuplicateValue, find_duplicates};
pub use extract::extract_keys;
pub use find::{FindResult, find_usages};
pub use generate::{KeyLayout, generate_keys};
pub use merge::{complete_keys, overlay_baseline};
pub use validate::{ValidationReport, validate_keys};

/// Key entries in insertion order, unique by full key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyMap {
    entries: Vec<KeyEntry>,
    index: HashMap<String, usize>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, full_key: &str) -> Option<&KeyEntry> {
        self.index.get(full_key).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.full_key.as_str())
    }

    /// Insert `entry`, or append its locations to the entry already stored
    /// under the same key. The stored value and source are kept.
    pub fn insert_or_extend(&mut self, entry: KeyEntry) {
        match self.index.get(&entry.full_key) {
            Some(&i) => {
                let existing = &mut self.entries[i];
                for location in entry.locations {
                    if !existing.locations.contains(&location) {
                        existing.locations.push(location);
                    }
                }
            }
            None => {
                self.index.insert(entry.full_key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Record one more location for an existing key.
    pub fn add_location(&mut self, full_key: &str, location: KeyLocation) {
        if let Some(&i) = self.index.get(full_key) {
            self.entries[i].locations.push(location);
        }
    }

    /// Nested translation tree of every key and its value.
    pub fn to_tree(&self) -> TranslationTree {
        TranslationTree::from_flat(self.entries.iter().map(|e| (&e.full_key, e.value.clone())))
    }

    /// Flat key map document: `{ fullKey: { value, source, locations } }`.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let mut map = Map::new();
        for entry in &self.entries {
            map.insert(entry.full_key.clone(), serde_json::to_value(entry)?);
        }
        Ok(Value::Object(map))
    }
}

impl FromIterator<KeyEntry> for KeyMap {
    fn from_iter<T: IntoIterator<Item = KeyEntry>>(iter: T) -> Self {
        let mut map = KeyMap::new();
        for entry in iter {
            map.insert_or_extend(entry);
        }
        map
    }
}
