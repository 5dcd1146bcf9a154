//! Namespace derivation from a file's relative path.
//!
//! `src/features/Auth/LoginScreen.tsx` → `features.auth.login_screen`

use std::collections::HashSet;

use crate::{config::Config, utils::to_snake_case};

#[derive(Debug, Clone)]
pub struct NamespaceRules {
    noise_segments: HashSet<String>,
    index_names: HashSet<String>,
    default_namespace: String,
}

impl NamespaceRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            noise_segments: config
                .noise_segments
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            index_names: config.index_names.iter().map(|s| s.to_lowercase()).collect(),
            default_namespace: config.default_namespace.clone(),
        }
    }

    /// Namespace for a `/`-separated path relative to the scan root.
    pub fn namespace_for(&self, relative_path: &str) -> String {
        let mut parts: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();
        let file_name = parts.pop().unwrap_or_default();

        let mut segments: Vec<String> = parts
            .into_iter()
            .map(str::to_lowercase)
            .filter(|dir| !self.noise_segments.contains(dir))
            .filter_map(|dir| sanitize_segment(&dir))
            .collect();

        let stem = file_stem(file_name);
        if !self.index_names.contains(&stem.to_lowercase())
            && let Some(base) = sanitize_segment(&to_snake_case(stem))
        {
            segments.push(base);
        }

        if segments.is_empty() {
            return self.default_namespace.clone();
        }
        segments.join(".")
    }
}

/// File name without its last extension.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(idx) => &file_name[..idx],
    }
}

/// Keep `[a-z0-9_-]`, replace everything else with `_`, trim `_`.
fn sanitize_segment(segment: &str) -> Option<String> {
    let sanitized: String = segment
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect();
    let trimmed = sanitized.trim_matches('_');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
