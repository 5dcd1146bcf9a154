use anyhow::Result;

use super::{CommandResult, CommandSummary, FindSummary, helper};
use crate::{
    cli::args::{CommonArgs, FindArgs},
    core::lifecycle::find_usages,
    error::Error,
};

pub fn find(common: &CommonArgs, args: &FindArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let output = ctx.scan();

    let found = find_usages(&args.query, &output.occurrences, &output.usages);
    if found.is_empty() {
        return Err(Error::NoInput(format!("no strings or keys match '{}'", args.query)).into());
    }

    Ok(CommandResult {
        files_checked: output.stats.files_scanned,
        parse_error_count: output.parse_failures.len(),
        ..CommandResult::new(CommandSummary::Find(FindSummary {
            query: args.query.clone(),
            strings: found.strings.into_iter().cloned().collect(),
            keys: found.keys.into_iter().cloned().collect(),
        }))
    })
}
