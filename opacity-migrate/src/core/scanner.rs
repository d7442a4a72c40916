// src/core/scanner.rs
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::utils::{has_extension, is_hidden};

/// Collects every file below `root` whose extension is `extension`.
///
/// Hidden files and directories are skipped, symlinks are followed and
/// entries are sorted by name within each directory. A missing root yields
/// an empty list; unreadable entries below the root are logged and skipped.
///
/// # Arguments
///
/// * `root` - The directory to search recursively
/// * `extension` - The file extension to keep, without the leading dot
///
/// # Returns
///
/// The matching file paths, each prefixed with `root`
#[must_use]
pub fn find_source_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!(root = %root.display(), "search root does not exist, nothing to migrate");
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        debug!(path = %entry.path().display(), "found source file");
        files.push(entry.into_path());
    }

    files
}
