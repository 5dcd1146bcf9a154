use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Rule set and project layout knobs.
///
/// Every field has a default, so a config file only needs the fields it
/// overrides. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Directories (or glob patterns) to scan, relative to the root. Empty scans the root.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Callee names treated as translation functions (`t("...")`, `i18n.t("...")`).
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    /// Minimum trimmed length, in characters, of a candidate string.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    /// Text matching this pattern already looks like a translation call.
    #[serde(default = "default_translated_pattern")]
    pub translated_pattern: String,
    #[serde(default = "default_skip_attributes")]
    pub skip_attributes: Vec<String>,
    /// Path segments dropped when deriving a namespace.
    #[serde(default = "default_noise_segments")]
    pub noise_segments: Vec<String>,
    /// File base names that do not contribute to the namespace.
    #[serde(default = "default_index_names")]
    pub index_names: Vec<String>,
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    /// Restrict generated key fragments to ASCII letters and digits.
    #[serde(default = "default_ascii_keys")]
    pub ascii_keys: bool,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**", "**/.expo/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_translation_functions() -> Vec<String> {
    ["t", "translate", "formatMessage"]
        .map(String::from)
        .to_vec()
}

fn default_min_length() -> usize {
    2
}

pub fn default_exclude_patterns() -> Vec<String> {
    [
        // whitespace only
        r"^\s*$",
        // camelCase identifiers
        r"^[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)+$",
        // snake_case and kebab-case identifiers
        r"^[a-z0-9]+(?:[_-][a-z0-9]+)+$",
        // SHOUTING_CASE constants
        r"^[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)+$",
        // colors
        r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$",
        r"^(?:rgba?|hsla?)\(",
        // urls
        r"^(?:https?|ftp|wss?)://",
        r"^(?:mailto|tel|sms):",
        r"^www\.",
        // relative and absolute paths
        r"^\.{1,2}/",
        r"^/[\w./-]*$",
        // scoped package specifiers
        r"^@[\w.-]+/[\w./-]+$",
        r"^data:",
        // numbers with optional css units
        r"^-?\d+(?:\.\d+)?(?:px|em|rem|%|vh|vw|pt|dp|sp|s|ms|deg)?$",
        // comparison operators
        r"^(?:===?|!==?|<=?|>=?|&&|\|\||\?\?)$",
    ]
    .map(String::from)
    .to_vec()
}

fn default_translated_pattern() -> String {
    r#"(?:^|[^\w$])(?:[\w$]+\.)?(?:t|translate)\(\s*['"`]"#.to_string()
}

fn default_skip_attributes() -> Vec<String> {
    [
        "id",
        "key",
        "ref",
        "className",
        "style",
        "contentContainerStyle",
        "testID",
        "testId",
        "data-testid",
        "nativeID",
        "name",
        "type",
        "src",
        "source",
        "href",
        "to",
        "as",
        "role",
        "variant",
        "size",
        "color",
        "icon",
        "target",
        "rel",
        "htmlFor",
        "autoComplete",
        "autoCapitalize",
        "keyboardType",
        "returnKeyType",
        "textContentType",
        "resizeMode",
        "pointerEvents",
        "accessibilityRole",
    ]
    .map(String::from)
    .to_vec()
}

fn default_noise_segments() -> Vec<String> {
    ["src", "app", "components", "screens", "pages", "views"]
        .map(String::from)
        .to_vec()
}

fn default_index_names() -> Vec<String> {
    vec!["index".to_string()]
}

fn default_namespace() -> String {
    "common".to_string()
}

fn default_ascii_keys() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            translation_functions: default_translation_functions(),
            min_length: default_min_length(),
            exclude_patterns: default_exclude_patterns(),
            translated_pattern: default_translated_pattern(),
            skip_attributes: default_skip_attributes(),
            noise_segments: default_noise_segments(),
            index_names: default_index_names(),
            default_namespace: default_namespace(),
            ascii_keys: default_ascii_keys(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns a description of the first invalid value found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .map_err(|e| format!("invalid glob pattern in 'ignores': \"{}\" ({})", pattern, e))?;
        }

        // Includes without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).map_err(|e| {
                    format!("invalid glob pattern in 'includes': \"{}\" ({})", pattern, e)
                })?;
            }
        }

        for pattern in &self.exclude_patterns {
            Regex::new(pattern).map_err(|e| {
                format!("invalid regex in 'excludePatterns': \"{}\" ({})", pattern, e)
            })?;
        }

        Regex::new(&self.translated_pattern).map_err(|e| {
            format!(
                "invalid regex in 'translatedPattern': \"{}\" ({})",
                self.translated_pattern, e
            )
        })?;

        if self.min_length == 0 {
            return Err("'minLength' must be at least 1".to_string());
        }
        if self.translation_functions.iter().all(|f| f.trim().is_empty()) {
            return Err("'translationFunctions' must name at least one function".to_string());
        }
        if self.default_namespace.trim().is_empty() || self.default_namespace.contains('.') {
            return Err("'defaultNamespace' must be a single non-empty segment".to_string());
        }

        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the configuration.
///
/// An explicit override path must exist. Otherwise the config file is
/// searched upward from `start_dir`, falling back to defaults.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::config(path, "file does not exist"));
            }
            Some(path.to_path_buf())
        }
        None => find_config_file(start_dir),
    };

    let Some(path) = path else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        });
    };

    let content = fs::read_to_string(&path).map_err(|e| Error::config(&path, e.to_string()))?;
    let config: Config =
        serde_json::from_str(&content).map_err(|e| Error::config(&path, e.to_string()))?;
    config
        .validate()
        .map_err(|message| Error::config(&path, message))?;

    Ok(ConfigLoadResult {
        config,
        path: Some(path),
    })
}
