// src/cli.rs
use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use crate::config::{Mode, RunOptions};
use crate::core::migrate::migrate_tree;
use crate::models::MigrationReport;

/// Rewrites `Color.withOpacity(x)` calls under `lib/` to `withValues(alpha: x)`.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Report files that would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        let mode = if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Write
        };
        RunOptions {
            mode,
            ..RunOptions::default()
        }
    }
}

/// Installs the stderr `tracing` subscriber. `RUST_LOG` wins over `verbose`.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to initialise logging")
}

/// Runs the migration over `options` and prints the report to the given
/// writers.
///
/// # Errors
///
/// Only fails if the report cannot be written; per-file failures are part
/// of the returned report.
pub fn run_with<O: Write, E: Write>(
    options: &RunOptions,
    out: &mut O,
    err: &mut E,
) -> Result<MigrationReport> {
    let report = migrate_tree(options);
    report
        .write_summary(out, err)
        .context("Failed to print migration summary")?;
    Ok(report)
}

/// Runs the migration described by `args` against the fixed search root.
///
/// # Errors
///
/// Only fails if stdout or stderr cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(&args.run_options(), &mut stdout.lock(), &mut stderr.lock())?;
    Ok(())
}
