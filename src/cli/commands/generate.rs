//! `generate`, `extract` and `complete`: commands that write a translation
//! file.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{BaselineMerge, CommandResult, CommandSummary, WriteKind, WriteSummary, helper};
use crate::{
    cli::args::{CommonArgs, ExtractArgs, GenerateArgs, OutputArgs},
    core::{
        ScanContext,
        export::stage_json,
        lifecycle::{KeyLayout, KeyMap, complete_keys, extract_keys, generate_keys, overlay_baseline},
        parsers::json::load_baseline,
    },
    error::Error,
};

pub fn generate(common: &CommonArgs, args: &GenerateArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let output = ctx.scan();
    if output.occurrences.is_empty() {
        return Err(Error::NoInput("no hardcoded strings found".to_string()).into());
    }

    let keys = generate_keys(
        &output.occurrences,
        ctx.namespaces(),
        layout(args.flat),
        ctx.config.ascii_keys,
    );
    let summary = write_key_files(
        &ctx,
        &keys,
        &args.output,
        args.baseline.as_deref(),
        WriteKind::Generate,
    )?;

    Ok(CommandResult {
        files_checked: output.stats.files_scanned,
        parse_error_count: output.parse_failures.len(),
        ..CommandResult::new(CommandSummary::Write(summary))
    })
}

pub fn extract(common: &CommonArgs, args: &ExtractArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let output = ctx.scan();
    if output.usages.is_empty() {
        return Err(Error::NoInput("no translation calls with static keys found".to_string()).into());
    }

    let keys = extract_keys(&output.usages);
    let summary = write_key_files(&ctx, &keys, &args.output, None, WriteKind::Extract)?;

    Ok(CommandResult {
        files_checked: output.stats.files_scanned,
        parse_error_count: output.parse_failures.len(),
        ..CommandResult::new(CommandSummary::Write(summary))
    })
}

pub fn complete(common: &CommonArgs, args: &GenerateArgs) -> Result<CommandResult> {
    let ctx = helper::load_context(common)?;
    let output = ctx.scan();
    if output.occurrences.is_empty() && output.usages.is_empty() {
        return Err(Error::NoInput(
            "no hardcoded strings or translation calls found".to_string(),
        )
        .into());
    }

    let extracted = extract_keys(&output.usages);
    let generated = generate_keys(
        &output.occurrences,
        ctx.namespaces(),
        layout(args.flat),
        ctx.config.ascii_keys,
    );
    let keys = complete_keys(&extracted, &generated);
    tracing::debug!(
        extracted = extracted.len(),
        generated = generated.len(),
        total = keys.len(),
        "completed key set"
    );
    let summary = write_key_files(
        &ctx,
        &keys,
        &args.output,
        args.baseline.as_deref(),
        WriteKind::Complete,
    )?;

    Ok(CommandResult {
        files_checked: output.stats.files_scanned,
        parse_error_count: output.parse_failures.len(),
        ..CommandResult::new(CommandSummary::Write(summary))
    })
}

fn layout(flat: bool) -> KeyLayout {
    if flat {
        KeyLayout::Flat
    } else {
        KeyLayout::Nested
    }
}

/// Write the translation tree and the optional key map.
///
/// The tree is laid over the baseline: the explicit one, or else the output
/// file itself when it already exists, so existing values are never lost.
/// Both documents are staged before either target is replaced.
fn write_key_files(
    ctx: &ScanContext,
    keys: &KeyMap,
    output: &OutputArgs,
    baseline: Option<&Path>,
    kind: WriteKind,
) -> Result<WriteSummary> {
    let output_path = helper::translation_file(&ctx.root, output.output.as_deref());
    let baseline_path = match baseline {
        Some(path) => Some(path.to_path_buf()),
        None if output_path.is_file() => Some(output_path.clone()),
        None => None,
    };

    let generated = keys.to_tree();
    let (tree, merge) = match baseline_path {
        Some(path) => {
            let baseline = load_baseline(&path)?;
            let (tree, merged) = overlay_baseline(baseline.tree(), &generated);
            tracing::debug!(
                baseline = %path.display(),
                added = merged.added,
                kept = merged.kept,
                "merged with baseline"
            );
            let merge = BaselineMerge {
                path: PathBuf::from(helper::display_path(&ctx.root, &path)),
                added: merged.added,
                kept: merged.kept,
                preserved: merged.preserved,
            };
            (tree, Some(merge))
        }
        None => (generated, None),
    };

    let staged_tree = stage_json(&output_path, tree.as_map())?;
    let staged_keymap = match &output.keymap {
        Some(path) => Some(stage_json(path, &keys.to_json()?)?),
        None => None,
    };
    staged_tree.commit()?;
    if let Some(staged) = staged_keymap {
        staged.commit()?;
    }

    Ok(WriteSummary {
        kind,
        key_count: keys.len(),
        output: output_path,
        keymap: output.keymap.clone(),
        baseline: merge,
    })
}
