use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Syntactic shape a candidate string was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StringKind {
    /// Text between element tags: `<Text>Hello</Text>`
    TextNode,
    /// Quoted attribute value: `<Button title="Save" />`
    AttributeLiteral,
    /// Literal inside an attribute expression: `title={busy ? "Saving" : "Save"}`
    AttributeExpression,
    /// One literal segment of a template: `` {`Hello ${name}`} ``
    TemplateSegment,
    /// Literal inside a child expression: `{error || "Unknown error"}`
    ExpressionLiteral,
    /// `return "Loading"` inside a render function
    ReturnLiteral,
    /// Literal branch of a returned conditional: `return ok ? "Done" : "Failed"`
    ConditionalReturnLiteral,
}

impl StringKind {
    pub const ALL: [StringKind; 7] = [
        StringKind::TextNode,
        StringKind::AttributeLiteral,
        StringKind::AttributeExpression,
        StringKind::TemplateSegment,
        StringKind::ExpressionLiteral,
        StringKind::ReturnLiteral,
        StringKind::ConditionalReturnLiteral,
    ];
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringKind::TextNode => write!(f, "text"),
            StringKind::AttributeLiteral => write!(f, "attribute"),
            StringKind::AttributeExpression => write!(f, "attribute-expression"),
            StringKind::TemplateSegment => write!(f, "template"),
            StringKind::ExpressionLiteral => write!(f, "expression"),
            StringKind::ReturnLiteral => write!(f, "return"),
            StringKind::ConditionalReturnLiteral => write!(f, "conditional-return"),
        }
    }
}

/// One located candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringOccurrence {
    /// Path relative to the scan root, `/`-separated.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    pub raw_value: String,
    pub kind: StringKind,
    /// Enclosing tag (`Text`, `Button.title`) or a fixed label.
    pub context: String,
    /// Trimmed source line, for reports. Not exported.
    #[serde(skip)]
    pub source_line: String,
}

impl StringOccurrence {
    pub fn sort_key(&self) -> (&str, usize, usize) {
        (&self.file, self.line, self.column)
    }
}

/// Aggregate counters of one scan run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_with_issues: usize,
    pub total_strings: usize,
    pub strings_by_type: BTreeMap<StringKind, usize>,
}

impl Default for ScanStats {
    fn default() -> Self {
        Self {
            files_scanned: 0,
            files_with_issues: 0,
            total_strings: 0,
            strings_by_type: StringKind::ALL.iter().map(|k| (*k, 0)).collect(),
        }
    }
}

impl ScanStats {
    pub fn record(&mut self, kind: StringKind) {
        self.total_strings += 1;
        *self.strings_by_type.entry(kind).or_insert(0) += 1;
    }
}
