//! Nested translation tree.
//!
//! A tree is a JSON object whose leaves are strings. Keys are addressed by
//! dotted paths (`home.title`). Inserting never overwrites: an existing leaf
//! keeps its value, and when a path needs a leaf to become a branch (or a
//! leaf lands on a branch) the leaf text moves to the reserved `_value`
//! child.

use serde_json::{Map, Value};

/// Child key holding the text of a node that is also a branch.
pub const VALUE_KEY: &str = "_value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The key was new.
    Added,
    /// The key already held a value, which was kept.
    Kept,
    /// A leaf and a branch collided; the leaf now lives under `_value`.
    Preserved,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTree {
    root: Map<String, Value>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already validated object (string leaves only).
    pub(crate) fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Build a tree from `(full key, value)` pairs, in order.
    pub fn from_flat<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut tree = Self::new();
        for (key, value) in entries {
            tree.insert(key.as_ref(), value);
        }
        tree
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Insert `value` at `full_key` without losing any existing text.
    pub fn insert(&mut self, full_key: &str, value: impl Into<String>) -> KeyAction {
        let path: Vec<&str> = full_key.split('.').collect();
        insert_nested(&mut self.root, &path, value.into())
    }

    /// Text at `full_key`, following `_value` for nodes that are branches.
    #[cfg(test)]
    pub fn get(&self, full_key: &str) -> Option<&str> {
        let mut node = self.root.get(full_key.split('.').next()?)?;
        for part in full_key.split('.').skip(1) {
            node = node.as_object()?.get(part)?;
        }
        match node {
            Value::String(s) => Some(s),
            Value::Object(map) => map.get(VALUE_KEY).and_then(Value::as_str),
            _ => None,
        }
    }

    /// Every leaf as `(full key, value)`, in document order.
    ///
    /// A `_value` leaf is reported under its parent's path.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        flatten_into(&self.root, "", &mut out);
        out
    }

    pub fn keys(&self) -> Vec<String> {
        self.flatten().into_iter().map(|(key, _)| key).collect()
    }

    /// Add every leaf of `other` that this tree does not define yet.
    /// Values already here always win.
    pub fn merge(&mut self, other: &TranslationTree) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for (key, value) in other.flatten() {
            match self.insert(&key, value) {
                KeyAction::Added => summary.added += 1,
                KeyAction::Kept => summary.kept += 1,
                KeyAction::Preserved => {
                    summary.added += 1;
                    summary.preserved.push(key);
                }
            }
        }
        summary
    }

    /// True if any node carries a `_value` child.
    pub fn has_value_sentinels(&self) -> bool {
        fn walk(map: &Map<String, Value>) -> bool {
            map.iter().any(|(key, value)| {
                key == VALUE_KEY || value.as_object().is_some_and(walk)
            })
        }
        walk(&self.root)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub kept: usize,
    /// Keys whose insertion moved a leaf under `_value`.
    pub preserved: Vec<String>,
}

fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: String) -> KeyAction {
    let [key, rest @ ..] = path else {
        return KeyAction::Kept;
    };

    if rest.is_empty() {
        match root.get_mut(*key) {
            Some(Value::Object(branch)) => {
                if branch.contains_key(VALUE_KEY) {
                    return KeyAction::Kept;
                }
                branch.insert(VALUE_KEY.to_string(), Value::String(value));
                return KeyAction::Preserved;
            }
            Some(_) => return KeyAction::Kept,
            None => {}
        }
        root.insert(key.to_string(), Value::String(value));
        return KeyAction::Added;
    }

    let next_level = root
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    let mut preserved = false;
    if !next_level.is_object() {
        // Leaf becomes a branch; its text moves under `_value`.
        let mut branch = Map::new();
        branch.insert(VALUE_KEY.to_string(), next_level.take());
        *next_level = Value::Object(branch);
        preserved = true;
    }

    let action = match next_level.as_object_mut() {
        Some(inner) => insert_nested(inner, rest, value),
        None => KeyAction::Kept,
    };
    if preserved && action == KeyAction::Added {
        KeyAction::Preserved
    } else {
        action
    }
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else if key == VALUE_KEY {
            prefix.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::String(s) => out.push((path, s.clone())),
            Value::Object(inner) => flatten_into(inner, &path, out),
            _ => {}
        }
    }
}
