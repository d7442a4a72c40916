// src/models/file_outcome.rs
use std::path::PathBuf;

use crate::error::FileError;

/// What happened to a file that was processed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one call was rewritten (or would be, in a dry run).
    Fixed { replacements: usize },
    Unchanged,
}

impl FileOutcome {
    #[inline]
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }
}

/// A processed path paired with its outcome.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub result: Result<FileOutcome, FileError>,
}

impl FileResult {
    #[inline]
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.result.as_ref().is_ok_and(FileOutcome::is_fixed)
    }
}
