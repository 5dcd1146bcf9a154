use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::args::{CommonArgs, DEFAULT_TRANSLATION_FILE},
    core::{ScanContext, ScanOutput},
    issues::{Issue, ParseErrorIssue},
    utils::relative_path,
};

/// The root directory, made absolute so upward config search and relative
/// file paths work from any working directory.
pub fn resolve_root(common: &CommonArgs) -> Result<PathBuf> {
    common
        .root
        .canonicalize()
        .with_context(|| format!("cannot access root directory {}", common.root.display()))
}

pub fn load_context(common: &CommonArgs) -> Result<ScanContext> {
    let root = resolve_root(common)?;
    Ok(ScanContext::new(&root, common.config.as_deref())?)
}

/// An explicit path as given, otherwise the default translation file under
/// the root.
pub fn translation_file(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_TRANSLATION_FILE),
    }
}

/// Path for messages: relative to the root when inside it.
pub fn display_path(root: &Path, path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    relative_path(root, &absolute)
}

pub fn parse_error_issues(output: &ScanOutput) -> impl Iterator<Item = Issue> + '_ {
    output
        .parse_failures
        .iter()
        .map(|failure| Issue::ParseError(ParseErrorIssue::from(failure)))
}
