//! Directory scanning.
//!
//! The scanner follows the same two-phase shape as the rest of the pipeline:
//!
//! 1. **Scanning**: [`scan_dir`] opens the directory and yields matching entry
//!    names lazily, one `next_entry()` at a time
//! 2. **Collecting**: [`collect_sorted`] drains the stream and sorts the names
//!    into a [`FilenameList`]
//!
//! The stream is finite and cannot be restarted; scanning again re-reads the
//! directory from scratch.

use crate::error::{FilesystemError, Result};
use crate::models::{FilenameList, sort_names};
use futures::stream::{self, Stream, TryStreamExt};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Selects directory entries whose name ends with a fixed suffix.
///
/// Behaves like the shell glob `*SUFFIX`: matching is case-sensitive, the
/// suffix may make up the entire name, and dot-files are not special.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter {
    suffix: String,
}

impl SuffixFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, name: &str) -> bool {
        name.ends_with(&self.suffix)
    }

    /// Same test on a raw OS name, which need not be valid Unicode.
    pub fn matches_os(&self, name: &OsStr) -> bool {
        name.as_encoded_bytes().ends_with(self.suffix.as_bytes())
    }
}

/// Open `dir` and stream the names of entries that pass `filter`.
///
/// Only names are inspected; the entries themselves are never opened or
/// stat'ed. Entries that don't match are skipped before their name is decoded,
/// so a non-Unicode name only matters when it passes the filter.
///
/// # Errors
///
/// Fails with [`FilesystemError::ReadDir`] if the directory cannot be opened.
/// Entry-level failures ([`FilesystemError::ReadEntry`],
/// [`FilesystemError::NonUnicodeName`]) are yielded by the stream.
pub async fn scan_dir(
    dir: &Path,
    filter: &SuffixFilter,
) -> Result<impl Stream<Item = Result<String>>> {
    let read_dir = fs::read_dir(dir)
        .await
        .map_err(|source| FilesystemError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let dir = dir.to_path_buf();
    let filter = filter.clone();

    Ok(stream::try_unfold(read_dir, move |mut entries| {
        let dir = dir.clone();
        let filter = filter.clone();
        async move {
            loop {
                let entry = entries
                    .next_entry()
                    .await
                    .map_err(|source| FilesystemError::ReadEntry {
                        path: dir.clone(),
                        source,
                    })?;
                let Some(entry) = entry else {
                    return Ok::<_, FilesystemError>(None);
                };
                let raw = entry.file_name();
                if !filter.matches_os(&raw) {
                    continue;
                }
                let name = raw
                    .into_string()
                    .map_err(|name| FilesystemError::NonUnicodeName {
                        path: dir.clone(),
                        name,
                    })?;
                return Ok(Some((name, entries)));
            }
        }
    }))
}

/// Scan `dir` and return every matching name in sorted order.
#[instrument(level = "info", skip(filter), fields(suffix = %filter.suffix()))]
pub async fn collect_sorted(dir: &Path, filter: &SuffixFilter) -> Result<FilenameList> {
    let names: Vec<String> = scan_dir(dir, filter).await?.try_collect().await?;
    let list = sort_names(names);
    if list.is_empty() {
        warn!(dir = %dir.display(), "No matching files; the artifact will list nothing");
    }
    info!(count = list.len(), dir = %dir.display(), "Scanned source directory");
    debug!(names = ?list.as_slice(), "Matched names");
    Ok(list)
}

/// Resolve `path` to an absolute, symlink-free form if it exists.
pub(crate) async fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).await.ok()
}
