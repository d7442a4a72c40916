// src/models/migration_report.rs
use std::io::{self, Write};
use std::path::Path;

use crate::config::Mode;
use crate::error::FileError;
use crate::models::{FileOutcome, FileResult};

/// Per-file results of one run, in the order the files were processed.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub mode: Mode,
    pub files: Vec<FileResult>,
}

impl MigrationReport {
    #[inline]
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            files: Vec::new(),
        }
    }

    pub fn record(&mut self, file: FileResult) {
        self.files.push(file);
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_fixed()).count()
    }

    #[must_use]
    pub fn total_replacements(&self) -> usize {
        self.files
            .iter()
            .filter_map(|f| match f.result {
                Ok(FileOutcome::Fixed { replacements }) => Some(replacements),
                _ => None,
            })
            .sum()
    }

    pub fn fixed_paths(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.is_fixed())
            .map(|f| f.path.as_path())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FileError> {
        self.files.iter().filter_map(|f| f.result.as_ref().err())
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Prints one line per fixed file to `out`, one line per failure to
    /// `err`, then the total to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writers.
    pub fn write_summary<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        let fixed_label = match self.mode {
            Mode::Write => "Fixed",
            Mode::DryRun => "Would fix",
        };

        for file in &self.files {
            match &file.result {
                Ok(FileOutcome::Fixed { .. }) => {
                    writeln!(out, "{fixed_label}: {}", file.path.display())?;
                }
                Ok(FileOutcome::Unchanged) => {}
                Err(e) => {
                    writeln!(
                        err,
                        "Error processing {}: {}",
                        file.path.display(),
                        e.message()
                    )?;
                }
            }
        }

        match self.mode {
            Mode::Write => writeln!(out, "\nTotal files fixed: {}", self.fixed_count()),
            Mode::DryRun => writeln!(
                out,
                "\nTotal files that would be fixed: {}",
                self.fixed_count()
            ),
        }
    }
}
