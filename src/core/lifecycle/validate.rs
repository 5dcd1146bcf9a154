use std::collections::{BTreeMap, HashSet};

use crate::core::data::KeyUsage;

/// Baseline keys compared against keys used in code.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Used but not defined, grouped by file (call sites in scan order).
    pub missing: BTreeMap<String, Vec<KeyUsage>>,
    /// Defined but never used, in baseline order.
    pub unused: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }

    /// Distinct missing keys, sorted.
    pub fn missing_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .missing
            .values()
            .flatten()
            .map(|u| u.key.as_str())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }
}

pub fn validate_keys(defined: &[String], usages: &[KeyUsage]) -> ValidationReport {
    let defined_set: HashSet<&str> = defined.iter().map(String::as_str).collect();
    let used_set: HashSet<&str> = usages.iter().map(|u| u.key.as_str()).collect();

    let mut missing: BTreeMap<String, Vec<KeyUsage>> = BTreeMap::new();
    for usage in usages.iter().filter(|u| !defined_set.contains(u.key.as_str())) {
        missing.entry(usage.file.clone()).or_default().push(usage.clone());
    }

    let mut seen = HashSet::new();
    let unused = defined
        .iter()
        .filter(|key| !used_set.contains(key.as_str()) && seen.insert(key.as_str()))
        .cloned()
        .collect();

    ValidationReport { missing, unused }
}
