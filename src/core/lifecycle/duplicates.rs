use std::collections::HashMap;

use crate::core::parsers::json::BaselineEntry;

/// A full key produced more than once while flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    /// Line of every definition, in document order.
    pub lines: Vec<usize>,
}

/// Distinct keys sharing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValue {
    pub value: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub duplicate_keys: Vec<DuplicateKey>,
    pub duplicate_values: Vec<DuplicateValue>,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_keys.is_empty() && self.duplicate_values.is_empty()
    }
}

/// Both groupings are in order of first appearance. Blank values are not
/// grouped.
pub fn find_duplicates(entries: &[BaselineEntry]) -> DuplicateReport {
    let mut key_lines: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut key_index: HashMap<&str, usize> = HashMap::new();

    let mut value_keys: Vec<(&str, Vec<String>)> = Vec::new();
    let mut value_index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match key_index.get(entry.key.as_str()) {
            Some(&i) => key_lines[i].1.push(entry.line),
            None => {
                key_index.insert(entry.key.as_str(), key_lines.len());
                key_lines.push((entry.key.as_str(), vec![entry.line]));
            }
        }

        if entry.value.trim().is_empty() {
            continue;
        }
        match value_index.get(entry.value.as_str()) {
            Some(&i) => {
                let keys = &mut value_keys[i].1;
                if !keys.contains(&entry.key) {
                    keys.push(entry.key.clone());
                }
            }
            None => {
                value_index.insert(entry.value.as_str(), value_keys.len());
                value_keys.push((entry.value.as_str(), vec![entry.key.clone()]));
            }
        }
    }

    DuplicateReport {
        duplicate_keys: key_lines
            .into_iter()
            .filter(|(_, lines)| lines.len() > 1)
            .map(|(key, lines)| DuplicateKey {
                key: key.to_string(),
                lines,
            })
            .collect(),
        duplicate_values: value_keys
            .into_iter()
            .filter(|(_, keys)| keys.len() > 1)
            .map(|(value, keys)| DuplicateValue {
                value: value.to_string(),
                keys,
            })
            .collect(),
    }
}
