use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary, helper};
use crate::{
    cli::args::{CommonArgs, ScanArgs},
    core::export::{ScanReport, write_json},
    issues::{HardcodedStringIssue, Issue},
};

pub fn scan(common: &CommonArgs, args: &ScanArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let output = ctx.scan();

    if let Some(path) = &args.output {
        write_json(path, &ScanReport::new(&output.stats, &output.occurrences))?;
        tracing::debug!("wrote scan report to {}", path.display());
    }

    let mut issues: Vec<Issue> = output
        .occurrences
        .iter()
        .map(|occurrence| {
            Issue::Hardcoded(HardcodedStringIssue {
                occurrence: occurrence.clone(),
            })
        })
        .collect();
    issues.extend(helper::parse_error_issues(&output));

    Ok(CommandResult {
        issues,
        fail_on_issues: args.fail_on_issues,
        files_checked: output.stats.files_scanned,
        ..CommandResult::new(CommandSummary::Scan(ScanSummary {
            export: args.output.clone(),
        }))
    })
}
