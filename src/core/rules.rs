//! Exclusion rule set for candidate strings.
//!
//! Pure predicates over a string value or an attribute name, compiled once
//! from the [`Config`]. The classification engine asks [`ExclusionRules::check`]
//! for every candidate and drops the ones that come back with a reason.

use std::{collections::HashSet, fmt};

use regex::Regex;

use crate::config::Config;

/// Why a candidate was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    TooShort,
    Pattern(String),
    AlreadyTranslated,
    SkippedAttribute(String),
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::TooShort => write!(f, "shorter than minimum length"),
            Exclusion::Pattern(p) => write!(f, "matches pattern {}", p),
            Exclusion::AlreadyTranslated => write!(f, "looks like a translation call"),
            Exclusion::SkippedAttribute(name) => write!(f, "attribute '{}' is skipped", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExclusionRules {
    min_length: usize,
    patterns: Vec<Regex>,
    translated: Regex,
    skip_attributes: HashSet<String>,
}

impl ExclusionRules {
    /// Compile the rule set. Fails on the first invalid regex.
    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        let patterns = config
            .exclude_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            min_length: config.min_length,
            patterns,
            translated: Regex::new(&config.translated_pattern)?,
            skip_attributes: config.skip_attributes.iter().cloned().collect(),
        })
    }

    pub fn is_too_short(&self, text: &str) -> bool {
        text.trim().chars().count() < self.min_length
    }

    pub fn matching_pattern(&self, text: &str) -> Option<&Regex> {
        let text = text.trim();
        self.patterns.iter().find(|p| p.is_match(text))
    }

    pub fn looks_translated(&self, text: &str) -> bool {
        self.translated.is_match(text)
    }

    pub fn skips_attribute(&self, name: &str) -> bool {
        self.skip_attributes.contains(name)
    }

    /// Apply the value rules in order: length, patterns, already-translated.
    pub fn check(&self, text: &str) -> Option<Exclusion> {
        if self.is_too_short(text) {
            return Some(Exclusion::TooShort);
        }
        if let Some(pattern) = self.matching_pattern(text) {
            return Some(Exclusion::Pattern(pattern.as_str().to_string()));
        }
        if self.looks_translated(text) {
            return Some(Exclusion::AlreadyTranslated);
        }
        None
    }
}
