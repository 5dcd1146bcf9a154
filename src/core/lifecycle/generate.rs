use crate::core::{
    data::{KeyEntry, KeyLocation, KeySource, StringOccurrence},
    keys::{KeyRegistry, key_fragment},
    namespace::NamespaceRules,
};

use super::KeyMap;

/// How generated keys are laid out in the translation tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyLayout {
    /// `namespace.fragment`, namespace derived from the file path.
    #[default]
    Nested,
    /// Bare fragments.
    Flat,
}

/// Assign a unique key to every occurrence.
///
/// `occurrences` must already be in the run's total order; the first
/// occurrence of a fragment keeps the bare key.
pub fn generate_keys(
    occurrences: &[StringOccurrence],
    namespaces: &NamespaceRules,
    layout: KeyLayout,
    ascii_keys: bool,
) -> KeyMap {
    let mut registry = KeyRegistry::new();
    let mut keys = KeyMap::new();

    for occurrence in occurrences {
        let fragment = key_fragment(&occurrence.raw_value, ascii_keys);
        let namespace = match layout {
            KeyLayout::Nested => Some(namespaces.namespace_for(&occurrence.file)),
            KeyLayout::Flat => None,
        };
        let full_key = registry.claim(namespace.as_deref(), &fragment);
        tracing::debug!(key = %full_key, file = %occurrence.file, line = occurrence.line, "generated key");

        keys.insert_or_extend(KeyEntry {
            full_key,
            value: occurrence.raw_value.clone(),
            source: KeySource::Hardcoded,
            locations: vec![KeyLocation::new(&occurrence.file, occurrence.line)],
        });
    }

    keys
}
