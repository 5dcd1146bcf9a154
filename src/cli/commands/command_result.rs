use std::path::PathBuf;

use crate::{
    cli::exit_status::ExitStatus,
    core::data::{KeyUsage, StringOccurrence},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Write(WriteSummary),
    Validate(ValidateSummary),
    Duplicates(DuplicatesSummary),
    Find(FindSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    /// Where the JSON report was written, if requested.
    pub export: Option<PathBuf>,
}

/// Which command produced a translation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Generate,
    Extract,
    Complete,
}

impl WriteKind {
    pub fn verb(self) -> &'static str {
        match self {
            WriteKind::Generate => "Generated",
            WriteKind::Extract => "Extracted",
            WriteKind::Complete => "Completed",
        }
    }
}

#[derive(Debug)]
pub struct WriteSummary {
    pub kind: WriteKind,
    pub key_count: usize,
    pub output: PathBuf,
    pub keymap: Option<PathBuf>,
    pub baseline: Option<BaselineMerge>,
}

/// How a generated tree was laid over an existing translation file.
#[derive(Debug)]
pub struct BaselineMerge {
    pub path: PathBuf,
    pub added: usize,
    pub kept: usize,
    /// Keys whose existing text moved under `_value`.
    pub preserved: Vec<String>,
}

#[derive(Debug)]
pub struct ValidateSummary {
    pub baseline: String,
    pub defined_count: usize,
    pub used_count: usize,
}

#[derive(Debug)]
pub struct DuplicatesSummary {
    pub baseline: String,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct FindSummary {
    pub query: String,
    pub strings: Vec<StringOccurrence>,
    pub keys: Vec<KeyUsage>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a glossa command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues to report, empty for commands that only write files.
    pub issues: Vec<Issue>,
    /// Exit with status 1 when `issues` is not empty.
    pub fail_on_issues: bool,
    /// Number of source files that were scanned.
    pub files_checked: usize,
    /// Files that failed to parse and are not reported as issues.
    pub parse_error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            issues: Vec::new(),
            fail_on_issues: false,
            files_checked: 0,
            parse_error_count: 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_issues(self.issues.len(), self.fail_on_issues)
    }
}
