use anyhow::Result;

use super::{CommandResult, CommandSummary, DuplicatesSummary, helper};
use crate::{
    cli::args::{BaselineArgs, CommonArgs},
    core::{lifecycle::find_duplicates, parsers::json::load_baseline},
    error::Error,
    issues::{DuplicateKeyIssue, DuplicateValueIssue, Issue},
};

pub fn check_duplicates(common: &CommonArgs, args: &BaselineArgs) -> Result<CommandResult> {
    let root = helper::resolve_root(common)?;
    let baseline_path = helper::translation_file(&root, args.baseline.as_deref());
    let baseline = load_baseline(&baseline_path)?;
    let baseline_name = helper::display_path(&root, &baseline_path);

    let entries = baseline.entries();
    if entries.is_empty() {
        return Err(Error::NoInput(format!("{} defines no keys", baseline_name)).into());
    }

    let report = find_duplicates(entries);
    let mut issues: Vec<Issue> = Vec::new();
    for duplicate in report.duplicate_keys {
        issues.push(Issue::DuplicateKey(DuplicateKeyIssue {
            duplicate,
            baseline: baseline_name.clone(),
        }));
    }
    for duplicate in report.duplicate_values {
        let line = entries
            .iter()
            .find(|e| e.value == duplicate.value)
            .map_or(1, |e| e.line);
        issues.push(Issue::DuplicateValue(DuplicateValueIssue {
            duplicate,
            baseline: baseline_name.clone(),
            line,
        }));
    }

    Ok(CommandResult {
        issues,
        fail_on_issues: args.fail_on_issues,
        ..CommandResult::new(CommandSummary::Duplicates(DuplicatesSummary {
            baseline: baseline_name,
            entry_count: entries.len(),
        }))
    })
}
