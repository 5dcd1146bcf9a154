//! JSON documents written by the commands.
//!
//! All writes go through [`write_json`]: the document is serialized first,
//! written to a temporary file next to the target and renamed over it, so a
//! failed run never leaves a partial file behind.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::{
    core::data::{ScanStats, StringOccurrence},
    error::{Error, Result},
};

/// Scan export document.
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub timestamp: DateTime<Utc>,
    pub stats: &'a ScanStats,
    pub results: &'a [StringOccurrence],
}

impl<'a> ScanReport<'a> {
    pub fn new(stats: &'a ScanStats, results: &'a [StringOccurrence]) -> Self {
        Self {
            timestamp: Utc::now(),
            stats,
            results,
        }
    }
}

/// Serialize `value` as pretty JSON (2-space indent, trailing newline) and
/// replace `path` with it atomically.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    stage_json(path, value)?.commit()
}

/// A serialized document sitting in a temporary file next to its target.
///
/// Dropping it without [`commit`](Self::commit) removes the temporary file
/// and leaves the target alone.
#[derive(Debug)]
pub struct StagedWrite {
    path: PathBuf,
    file: NamedTempFile,
}

impl StagedWrite {
    /// Rename the temporary file over the target.
    pub fn commit(self) -> Result<()> {
        let path = self.path;
        self.file.persist(&path).map_err(|e| Error::Write {
            path: path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// Serialize `value` and write it to a temporary file in the target's
/// directory without touching the target.
pub fn stage_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<StagedWrite> {
    let content = serde_json::to_string_pretty(value)?;

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    fs::create_dir_all(&dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(&dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    Ok(StagedWrite {
        path: path.to_path_buf(),
        file,
    })
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
