//! Issue types produced by the commands.
//!
//! Each issue carries everything the reporter needs to print it. Reporting
//! goes through the [`Report`] trait, dispatched on [`Issue`] with
//! `enum_dispatch`.

use enum_dispatch::enum_dispatch;

use crate::core::{
    ParseFailure,
    data::{KeyUsage, StringOccurrence},
    lifecycle::{DuplicateKey, DuplicateValue},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Hardcoded,
    MissingKey,
    UnusedKey,
    DuplicateKey,
    DuplicateValue,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Hardcoded => write!(f, "hardcoded"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::DuplicateValue => write!(f, "duplicate-value"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Source Code
// ============================================================

/// Literal text in markup that should go through a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedStringIssue {
    pub occurrence: StringOccurrence,
}

/// Key used in code but not defined in the translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub usage: KeyUsage,
    /// Translation file the key was looked up in.
    pub baseline: String,
}

// ============================================================
// Issue Types - Translation Files
// ============================================================

/// Key defined in the translation file but never used in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub key: String,
    pub value: String,
    pub baseline: String,
    pub line: usize,
}

/// Key defined more than once in the translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub duplicate: DuplicateKey,
    pub baseline: String,
}

/// Several keys holding the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateValueIssue {
    pub duplicate: DuplicateValue,
    pub baseline: String,
    /// Line of the first key holding the value.
    pub line: usize,
}

// ============================================================
// Special Issue Types
// ============================================================

/// Source file could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl From<&ParseFailure> for ParseErrorIssue {
    fn from(failure: &ParseFailure) -> Self {
        Self {
            file_path: failure.file.clone(),
            error: failure.message.clone(),
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Hardcoded(HardcodedStringIssue),
    MissingKey(MissingKeyIssue),
    UnusedKey(UnusedKeyIssue),
    DuplicateKey(DuplicateKeyIssue),
    DuplicateValue(DuplicateValueIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location with the line's text for context display.
    Source {
        path: &'a str,
        line: usize,
        col: usize,
        source_line: &'a str,
    },
    /// A position without displayable context (call sites, translation files).
    Position { path: &'a str, line: usize, col: usize },
    /// File-level only.
    File { path: &'a str },
}

impl<'a> ReportLocation<'a> {
    pub fn path(&self) -> &'a str {
        match self {
            ReportLocation::Source { path, .. }
            | ReportLocation::Position { path, .. }
            | ReportLocation::File { path } => *path,
        }
    }

    /// `(line, col)`, zero for file-level locations.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ReportLocation::Source { line, col, .. } | ReportLocation::Position { line, col, .. } => {
                (*line, *col)
            }
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (text, key name, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for HardcodedStringIssue {
    fn location(&self) -> ReportLocation<'_> {
        let o = &self.occurrence;
        ReportLocation::Source {
            path: &o.file,
            line: o.line,
            col: o.column,
            source_line: &o.source_line,
        }
    }

    fn message(&self) -> String {
        self.occurrence.raw_value.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::Hardcoded
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} in {}",
            self.occurrence.kind, self.occurrence.context
        ))
    }
}

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position {
            path: &self.usage.file,
            line: self.usage.line,
            col: self.usage.column,
        }
    }

    fn message(&self) -> String {
        self.usage.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingKey
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}() uses a key not defined in {}",
            self.usage.invoked_function, self.baseline
        ))
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position {
            path: &self.baseline,
            line: self.line,
            col: 1,
        }
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::UnusedKey
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.value))
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position {
            path: &self.baseline,
            line: self.duplicate.lines.first().copied().unwrap_or(0),
            col: 1,
        }
    }

    fn message(&self) -> String {
        self.duplicate.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateKey
    }

    fn details(&self) -> Option<String> {
        let lines: Vec<String> = self.duplicate.lines.iter().map(|l| l.to_string()).collect();
        Some(format!(
            "defined {} times, on lines {}",
            self.duplicate.lines.len(),
            lines.join(", ")
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("only the last definition is kept when the file is loaded".to_string())
    }
}

impl Report for DuplicateValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Position {
            path: &self.baseline,
            line: self.line,
            col: 1,
        }
    }

    fn message(&self) -> String {
        self.duplicate.value.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::DuplicateValue
    }

    fn details(&self) -> Option<String> {
        Some(format!("shared by {}", self.duplicate.keys.join(", ")))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::StringKind;

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Hardcoded.to_string(), "hardcoded");
        assert_eq!(Rule::MissingKey.to_string(), "missing-key");
        assert_eq!(Rule::UnusedKey.to_string(), "unused-key");
        assert_eq!(Rule::DuplicateKey.to_string(), "duplicate-key");
        assert_eq!(Rule::DuplicateValue.to_string(), "duplicate-value");
        assert_eq!(Rule::ParseError.to_string(), "parse-error");
    }

    #[test]
    fn test_dispatch_through_issue_enum() {
        let issue = Issue::Hardcoded(HardcodedStringIssue {
            occurrence: StringOccurrence {
                file: "src/Home.tsx".to_string(),
                line: 4,
                column: 19,
                raw_value: "Click Me".to_string(),
                kind: StringKind::AttributeLiteral,
                context: "Button.title".to_string(),
                source_line: "    <Button title=\"Click Me\" />".to_string(),
            },
        });

        assert_eq!(issue.message(), "Click Me");
        assert_eq!(issue.report_rule(), Rule::Hardcoded);
        assert_eq!(issue.report_severity(), Severity::Error);
        assert_eq!(
            issue.details().as_deref(),
            Some("attribute in Button.title")
        );
        let location = issue.location();
        assert_eq!(location.path(), "src/Home.tsx");
        assert_eq!(location.position(), (4, 19));
    }

    #[test]
    fn test_duplicate_key_details() {
        let issue = DuplicateKeyIssue {
            duplicate: DuplicateKey {
                key: "home.title".to_string(),
                lines: vec![3, 7],
            },
            baseline: "locales/en.json".to_string(),
        };
        assert_eq!(issue.location().position(), (3, 1));
        assert_eq!(
            issue.details().as_deref(),
            Some("defined 2 times, on lines 3, 7")
        );
    }
}
