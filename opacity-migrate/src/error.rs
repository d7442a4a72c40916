// src/error.rs
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Why a single file could not be migrated.
///
/// These never abort a run; they are collected into the
/// [`MigrationReport`](crate::models::MigrationReport) next to the
/// successful outcomes.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Write { path, .. } => {
                path.as_path()
            }
        }
    }

    /// The underlying cause without the path prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.to_string(),
            Self::Decode { source, .. } => source.to_string(),
        }
    }
}
