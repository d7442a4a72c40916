// src/models.rs
pub mod file_outcome;
pub mod migration_report;

pub use file_outcome::{FileOutcome, FileResult};
pub use migration_report::MigrationReport;
