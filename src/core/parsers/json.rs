//! Baseline translation file parser.
//!
//! A baseline is a nested JSON object with string leaves. It is parsed twice
//! over: into a [`TranslationTree`] (repeated keys resolve to the last one, as
//! in any JSON reader) and into a flat entry list that keeps every repeated
//! key with its line, for the duplicate check.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};
use serde_json::{Map, Value};

use crate::{
    core::tree::{TranslationTree, VALUE_KEY},
    error::{Error, Result},
};

/// JSON value that keeps repeated object keys.
#[derive(Debug, Clone, PartialEq)]
enum JsonNode {
    Text(String),
    Object(Vec<(String, JsonNode)>),
    /// Any other JSON type, by name. Invalid in a translation file.
    Other(&'static str),
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(JsonNodeVisitor)
    }
}

struct JsonNodeVisitor;

impl<'de> Visitor<'de> for JsonNodeVisitor {
    type Value = JsonNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Other("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Other("a number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Other("a number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Other("a number"))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Other("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<JsonNode, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(JsonNode::Other("an array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<JsonNode, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, JsonNode>()? {
            entries.push((key, value));
        }
        Ok(JsonNode::Object(entries))
    }
}

/// One leaf of a baseline, repeated keys included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineEntry {
    pub key: String,
    pub value: String,
    /// Line number (1-indexed) of the key in the file.
    pub line: usize,
}

#[derive(Debug, Clone)]
pub struct Baseline {
    pub path: PathBuf,
    tree: TranslationTree,
    entries: Vec<BaselineEntry>,
}

impl Baseline {
    pub fn tree(&self) -> &TranslationTree {
        &self.tree
    }

    /// Every leaf in document order, including repeated keys.
    pub fn entries(&self) -> &[BaselineEntry] {
        &self.entries
    }

    /// Distinct defined keys.
    pub fn keys(&self) -> Vec<String> {
        self.tree.keys()
    }
}

pub fn load_baseline(path: &Path) -> Result<Baseline> {
    if !path.is_file() {
        return Err(Error::baseline(path, "file does not exist"));
    }
    let content = fs::read_to_string(path).map_err(|e| Error::baseline(path, e.to_string()))?;
    parse_baseline(&content, path)
}

pub fn parse_baseline(content: &str, path: &Path) -> Result<Baseline> {
    let root: JsonNode =
        serde_json::from_str(content).map_err(|e| Error::baseline(path, e.to_string()))?;

    let JsonNode::Object(root) = root else {
        return Err(Error::baseline(path, "top-level value must be an object"));
    };

    if let Some((key, kind)) = first_invalid_leaf(&root, "") {
        return Err(Error::baseline(
            path,
            format!("value at '{}' must be a string, found {}", key, kind),
        ));
    }

    let mut locator = KeyLocator::new(content);
    let mut entries = Vec::new();
    flatten_entries(&root, "", &mut locator, &mut entries);

    Ok(Baseline {
        path: path.to_path_buf(),
        tree: TranslationTree::from_map(to_map(&root)),
        entries,
    })
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn first_invalid_leaf(entries: &[(String, JsonNode)], prefix: &str) -> Option<(String, &'static str)> {
    entries.iter().find_map(|(key, node)| match node {
        JsonNode::Text(_) => None,
        JsonNode::Object(inner) => first_invalid_leaf(inner, &join_key(prefix, key)),
        JsonNode::Other(kind) => Some((join_key(prefix, key), *kind)),
    })
}

fn to_map(entries: &[(String, JsonNode)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, node) in entries {
        let value = match node {
            JsonNode::Text(s) => Value::String(s.clone()),
            JsonNode::Object(inner) => Value::Object(to_map(inner)),
            JsonNode::Other(_) => continue,
        };
        map.insert(key.clone(), value);
    }
    map
}

fn flatten_entries(
    entries: &[(String, JsonNode)],
    prefix: &str,
    locator: &mut KeyLocator<'_>,
    out: &mut Vec<BaselineEntry>,
) {
    for (key, node) in entries {
        let line = locator.next_key_line(key);
        let path = if key == VALUE_KEY && !prefix.is_empty() {
            prefix.to_string()
        } else {
            join_key(prefix, key)
        };
        match node {
            JsonNode::Text(value) => out.push(BaselineEntry {
                key: path,
                value: value.clone(),
                line,
            }),
            JsonNode::Object(inner) => flatten_entries(inner, &path, locator, out),
            JsonNode::Other(_) => {}
        }
    }
}

/// Finds object keys in the source text in document order.
///
/// Keys are visited depth-first, which is the order they appear in the
/// text, so one forward-moving cursor finds each occurrence, repeated keys
/// included.
struct KeyLocator<'a> {
    content: &'a str,
    line_index: Vec<usize>,
    cursor: usize,
}

impl<'a> KeyLocator<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            line_index: build_line_index(content),
            cursor: 0,
        }
    }

    fn next_key_line(&mut self, key: &str) -> usize {
        let pattern = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
        if let Some(offset) = find_key_offset(self.content, &pattern, self.cursor) {
            self.cursor = offset + pattern.len();
            return offset_to_line(&self.line_index, offset);
        }
        offset_to_line(&self.line_index, self.cursor)
    }
}

/// Offset of the next `pattern` at or after `from` that is an object key
/// (followed by `:`) and not inside an escaped string.
fn find_key_offset(content: &str, pattern: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = content.get(pos..)?.find(pattern) {
        let abs = pos + rel;
        let after = abs + pattern.len();
        let escaped = content[..abs].ends_with('\\');
        if !escaped && content[after..].trim_start().starts_with(':') {
            return Some(abs);
        }
        pos = abs + 1;
    }
    None
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
