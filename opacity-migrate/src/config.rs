// src/config.rs
use std::path::PathBuf;

/// Directory scanned on every run, relative to the working directory.
pub const SEARCH_ROOT: &str = "lib";

/// Extension of the files considered for migration.
pub const SOURCE_EXTENSION: &str = "dart";

pub const DEPRECATED_METHOD: &str = "withOpacity";
pub const REPLACEMENT_METHOD: &str = "withValues";
pub const NAMED_PARAMETER: &str = "alpha";

/// Whether changed files are written back or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    DryRun,
}

/// Resolved settings for a single migration run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub extension: String,
    pub mode: Mode,
}

impl RunOptions {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            root: root.into(),
            extension: String::from(SOURCE_EXTENSION),
            mode,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(SEARCH_ROOT, Mode::Write)
    }
}
