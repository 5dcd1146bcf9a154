//! Scan context.
//!
//! Holds the loaded configuration and the compiled rule sets, discovers the
//! source files under the root and scans them in parallel. Every file is
//! scanned into its own [`FileScan`]; results are merged afterwards and
//! re-sorted by (file, line, column), so downstream key assignment does not
//! depend on thread scheduling or directory listing order.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    config::{Config, load_config},
    core::{
        classify::{FileStrings, StringCollector},
        data::{KeyUsage, ScanStats, StringOccurrence},
        file_scanner::{ScannedFiles, scan_files},
        key_usage::{FileUsages, KeyUsageCollector},
        namespace::NamespaceRules,
        parsers::jsx::parse_jsx_source,
        rules::ExclusionRules,
    },
    error::{Error, Result},
    utils::relative_path,
};

/// Everything found in one source file.
#[derive(Debug)]
pub struct FileScan {
    pub strings: FileStrings,
    pub usages: FileUsages,
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file: String,
    pub message: String,
}

/// Merged, ordered results of a scan run.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub occurrences: Vec<StringOccurrence>,
    pub usages: Vec<KeyUsage>,
    pub parse_failures: Vec<ParseFailure>,
    pub stats: ScanStats,
    /// Candidates dropped by the exclusion rules.
    pub excluded: usize,
    /// Translation calls with keys computed at runtime.
    pub dynamic_calls: usize,
    /// Paths the file walk could not access.
    pub skipped_paths: usize,
}

pub struct ScanContext {
    pub root: PathBuf,
    pub config: Config,
    /// Config file in use, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
    rules: ExclusionRules,
    namespaces: NamespaceRules,
    translation_functions: HashSet<String>,
}

impl ScanContext {
    /// Load the configuration for `root` and compile its rule sets.
    pub fn new(root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let loaded = load_config(root, config_override)?;
        match &loaded.path {
            Some(path) => tracing::debug!("using config {}", path.display()),
            None => tracing::debug!("no config file found, using defaults"),
        }
        let mut context = Self::with_config(root, loaded.config)?;
        context.config_path = loaded.path;
        Ok(context)
    }

    pub fn with_config(root: &Path, config: Config) -> Result<Self> {
        let invalid = |message: String| {
            Error::config(root.join(crate::config::CONFIG_FILE_NAME), message)
        };
        config.validate().map_err(invalid)?;
        let rules = ExclusionRules::from_config(&config).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            root: root.to_path_buf(),
            namespaces: NamespaceRules::from_config(&config),
            translation_functions: config
                .translation_functions
                .iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            rules,
            config,
            config_path: None,
        })
    }

    pub fn namespaces(&self) -> &NamespaceRules {
        &self.namespaces
    }

    pub fn discover_files(&self) -> ScannedFiles {
        scan_files(
            &self.root,
            &self.config.includes,
            &self.config.ignores,
            self.config.ignore_test_files,
        )
    }

    /// Discover and scan every source file under the root.
    pub fn scan(&self) -> ScanOutput {
        let discovered = self.discover_files();
        tracing::debug!("discovered {} source files", discovered.files.len());
        let mut output = self.scan_paths(&discovered.files);
        output.skipped_paths = discovered.skipped_count;
        output
    }

    pub fn scan_paths(&self, files: &[PathBuf]) -> ScanOutput {
        let results: Vec<Result<FileScan>> =
            files.par_iter().map(|path| self.scan_file(path)).collect();

        let mut output = ScanOutput::default();
        for result in results {
            output.stats.files_scanned += 1;
            match result {
                Ok(scan) => {
                    if !scan.strings.occurrences.is_empty() {
                        output.stats.files_with_issues += 1;
                    }
                    output.excluded += scan.strings.excluded;
                    output.dynamic_calls += scan.usages.dynamic_calls;
                    output.occurrences.extend(scan.strings.occurrences);
                    output.usages.extend(scan.usages.usages);
                }
                Err(Error::Parse { path, message }) => {
                    tracing::warn!("skipping {}: {}", path, message);
                    output.parse_failures.push(ParseFailure {
                        file: path,
                        message,
                    });
                }
                Err(other) => {
                    tracing::warn!("{}", other);
                }
            }
        }

        output
            .occurrences
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        output.usages.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        output
            .parse_failures
            .sort_by(|a, b| a.file.cmp(&b.file));
        for occurrence in &output.occurrences {
            output.stats.record(occurrence.kind);
        }

        tracing::debug!(
            strings = output.occurrences.len(),
            usages = output.usages.len(),
            excluded = output.excluded,
            dynamic_calls = output.dynamic_calls,
            "scan finished"
        );
        output
    }

    fn scan_file(&self, path: &Path) -> Result<FileScan> {
        let file = relative_path(&self.root, path);
        let code = std::fs::read_to_string(path).map_err(|e| Error::Parse {
            path: file.clone(),
            message: e.to_string(),
        })?;

        // Each file gets its own SourceMap.
        let source_map = Arc::new(SourceMap::default());
        let parsed = parse_jsx_source(code, &file, source_map)?;

        let strings = StringCollector::new(
            &file,
            &parsed.source_map,
            &self.rules,
            &self.translation_functions,
        )
        .collect(&parsed.module);
        let usages =
            KeyUsageCollector::new(&file, &parsed.source_map, &self.translation_functions)
                .collect(&parsed.module);

        tracing::debug!(
            file = %file,
            strings = strings.occurrences.len(),
            usages = usages.usages.len(),
            "scanned"
        );
        Ok(FileScan { strings, usages })
    }
}
