// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, init_logging, run, run_with};
pub use config::{Mode, RunOptions};
pub use crate::core::migrate::{migrate_file, migrate_tree};
pub use crate::core::rewrite::{Rewrite, rewrite_opacity_calls};
pub use crate::core::scanner::find_source_files;
pub use error::FileError;
pub use models::{FileOutcome, FileResult, MigrationReport};
