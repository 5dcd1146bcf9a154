use crate::core::data::{KeyEntry, KeyLocation, KeySource, KeyUsage};

use super::KeyMap;

/// One placeholder entry per distinct key, with every call site.
pub fn extract_keys(usages: &[KeyUsage]) -> KeyMap {
    let mut keys = KeyMap::new();
    for usage in usages {
        let location = KeyLocation::new(&usage.file, usage.line);
        if keys.get(&usage.key).is_some() {
            keys.add_location(&usage.key, location);
            continue;
        }
        keys.insert_or_extend(KeyEntry {
            full_key: usage.key.clone(),
            value: String::new(),
            source: KeySource::Existing,
            locations: vec![location],
        });
    }
    keys
}
