//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, MigrateRequest};
use crate::domain::{AppError, MigrationReport};

#[derive(Parser)]
#[command(name = "l10n-migrate")]
#[command(version)]
#[command(
    about = "Migrate localized strings from DTD files to properties files",
    long_about = None
)]
struct Cli {
    /// Path of your l10n repository clone
    path: PathBuf,
    /// Mapping file, or directory of mapping files
    #[arg(short, long, default_value = "config")]
    config: PathBuf,
    /// Settings file (defaults to <PATH>/migrate.toml when present)
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Directory under PATH that mapping file names resolve against
    #[arg(long)]
    base_dir: Option<String>,
    /// Reference (en-US) properties directory or http(s) URL to copy notes from
    #[arg(long)]
    notes_from: Option<String>,
    /// Show what would be migrated without writing files
    #[arg(long)]
    dry_run: bool,
    /// Exit with a failure code when any entry conflicts or fails
    #[arg(long)]
    strict: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match run_migrate(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_migrate(cli: Cli) -> Result<i32, AppError> {
    let request = MigrateRequest {
        repository: cli.path,
        config: cli.config,
        settings: cli.settings,
        base_dir: cli.base_dir,
        notes_from: cli.notes_from,
        dry_run: cli.dry_run,
    };

    let report = api::migrate(request)?;
    print_summary(&report);

    if cli.strict && report.has_problems() {
        return Ok(1);
    }
    Ok(0)
}

fn print_summary(report: &MigrationReport) {
    let verb = if report.dry_run { "Would migrate" } else { "Migrated" };
    println!(
        "{} {} entr{}: {} already migrated, {} conflict(s), {} failure(s), {} line(s) skipped",
        verb,
        report.migrated(),
        if report.migrated() == 1 { "y" } else { "ies" },
        report.already_migrated(),
        report.conflicts(),
        report.failures(),
        report.skipped_lines.len()
    );
}
