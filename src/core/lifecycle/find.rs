use crate::core::data::{KeyUsage, StringOccurrence};

#[derive(Debug, Default)]
pub struct FindResult<'a> {
    /// Hardcoded strings containing the query (case-insensitive).
    pub strings: Vec<&'a StringOccurrence>,
    /// Translation calls using the query as key or key prefix.
    pub keys: Vec<&'a KeyUsage>,
}

impl FindResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.keys.is_empty()
    }
}

/// Where `query` appears: as part of a hardcoded string, or as a key.
///
/// Key matching is by whole segments: `home` matches `home` and
/// `home.title`, not `homepage`.
pub fn find_usages<'a>(
    query: &str,
    occurrences: &'a [StringOccurrence],
    usages: &'a [KeyUsage],
) -> FindResult<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return FindResult::default();
    }

    let key_prefix = format!("{}.", query.trim());
    FindResult {
        strings: occurrences
            .iter()
            .filter(|o| o.raw_value.to_lowercase().contains(&needle))
            .collect(),
        keys: usages
            .iter()
            .filter(|u| u.key == query.trim() || u.key.starts_with(&key_prefix))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::StringKind;

    fn occurrence(value: &str, line: usize) -> StringOccurrence {
        StringOccurrence {
            file: "src/Home.tsx".to_string(),
            line,
            column: 1,
            raw_value: value.to_string(),
            kind: StringKind::TextNode,
            context: "Text".to_string(),
            source_line: String::new(),
        }
    }

    fn usage(key: &str, line: usize) -> KeyUsage {
        KeyUsage {
            key: key.to_string(),
            file: "src/Home.tsx".to_string(),
            line,
            column: 1,
            invoked_function: "t".to_string(),
        }
    }

    #[test]
    fn test_find_strings_case_insensitive() {
        let occurrences = vec![occurrence("Welcome back", 1), occurrence("Log out", 2)];
        let result = find_usages("WELCOME", &occurrences, &[]);
        assert_eq!(result.strings.len(), 1);
        assert_eq!(result.strings[0].line, 1);
    }

    #[test]
    fn test_find_keys_by_segment_prefix() {
        let usages = vec![usage("home", 1), usage("home.title", 2), usage("homepage.title", 3)];
        let result = find_usages("home", &[], &usages);
        let lines: Vec<usize> = result.keys.iter().map(|u| u.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_blank_query_finds_nothing() {
        let occurrences = vec![occurrence("Welcome back", 1)];
        assert!(find_usages("  ", &occurrences, &[]).is_empty());
    }
}
