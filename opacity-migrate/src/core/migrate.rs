// src/core/migrate.rs
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Mode, RunOptions};
use crate::core::rewrite::rewrite_opacity_calls;
use crate::core::scanner::find_source_files;
use crate::error::FileError;
use crate::models::{FileOutcome, FileResult, MigrationReport};

/// Reads, rewrites and (in [`Mode::Write`]) writes back a single file.
///
/// The file is only touched when its content actually changes.
///
/// # Errors
///
/// Returns a [`FileError`] naming the failing step if the file cannot be
/// read, is not valid UTF-8, or cannot be written back.
pub fn migrate_file(path: &Path, mode: Mode) -> Result<FileOutcome, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|source| FileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rewrite_opacity_calls(&content);
    if !rewrite.changed() {
        debug!(path = %path.display(), "no deprecated calls");
        return Ok(FileOutcome::Unchanged);
    }

    if mode == Mode::Write {
        fs::write(path, rewrite.content.as_bytes()).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(
        path = %path.display(),
        replacements = rewrite.replacements,
        "rewrote deprecated calls"
    );
    Ok(FileOutcome::Fixed {
        replacements: rewrite.replacements,
    })
}

/// Migrates every matching file under the configured root.
///
/// Failures are recorded per file and never stop the run, so a report is
/// always returned.
#[must_use]
pub fn migrate_tree(options: &RunOptions) -> MigrationReport {
    info!(
        root = %options.root.display(),
        extension = %options.extension,
        mode = ?options.mode,
        "starting migration"
    );

    let mut report = MigrationReport::new(options.mode);

    for path in find_source_files(&options.root, &options.extension) {
        let result = migrate_file(&path, options.mode);
        report.record(FileResult { path, result });
    }

    info!(
        files = report.total_files(),
        fixed = report.fixed_count(),
        errors = report.error_count(),
        "migration finished"
    );
    report
}
