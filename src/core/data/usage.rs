use serde::Serialize;

/// A translation call whose key argument is known statically.
///
/// `t("home.title")` and `` i18n.t(`home.title`) `` produce a usage,
/// `t(key)` and `` t(`home.${name}`) `` do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    pub key: String,
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    pub line: usize,
    pub column: usize,
    /// Matched callee name (`t`, or the property in `i18n.t`).
    pub invoked_function: String,
}

impl KeyUsage {
    pub fn sort_key(&self) -> (&str, usize, usize) {
        (&self.file, self.line, self.column)
    }
}
