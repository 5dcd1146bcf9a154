use std::collections::HashMap;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ValidateSummary, helper};
use crate::{
    cli::args::{BaselineArgs, CommonArgs},
    core::{lifecycle::validate_keys, parsers::json::load_baseline},
    issues::{Issue, MissingKeyIssue, UnusedKeyIssue},
};

pub fn validate(common: &CommonArgs, args: &BaselineArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let baseline_path = helper::translation_file(&ctx.root, args.baseline.as_deref());
    let baseline = load_baseline(&baseline_path)?;
    let baseline_name = helper::display_path(&ctx.root, &baseline_path);

    let output = ctx.scan();
    let defined = baseline.keys();
    let report = validate_keys(&defined, &output.usages);
    tracing::debug!(
        defined = defined.len(),
        used = output.usages.len(),
        missing = report.missing_count(),
        unused = report.unused.len(),
        "validated keys"
    );

    // Repeated keys resolve to their last definition, as in the loaded tree.
    let last_entries: HashMap<&str, _> = baseline
        .entries()
        .iter()
        .map(|e| (e.key.as_str(), e))
        .collect();

    let mut issues: Vec<Issue> = Vec::new();
    for usage in report.missing.values().flatten() {
        issues.push(Issue::MissingKey(MissingKeyIssue {
            usage: usage.clone(),
            baseline: baseline_name.clone(),
        }));
    }
    for key in &report.unused {
        let entry = last_entries.get(key.as_str());
        issues.push(Issue::UnusedKey(UnusedKeyIssue {
            key: key.clone(),
            value: entry.map(|e| e.value.clone()).unwrap_or_default(),
            baseline: baseline_name.clone(),
            line: entry.map_or(1, |e| e.line),
        }));
    }
    issues.extend(helper::parse_error_issues(&output));

    Ok(CommandResult {
        issues,
        fail_on_issues: args.fail_on_issues,
        files_checked: output.stats.files_scanned,
        ..CommandResult::new(CommandSummary::Validate(ValidateSummary {
            baseline: baseline_name,
            defined_count: defined.len(),
            used_count: output.usages.len(),
        }))
    })
}
