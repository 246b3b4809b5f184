//! pathmap-migrator - Artifact Storage Scanner
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use pathmap_migrator::config::{CliArgs, ScanConfig};
use pathmap_migrator::coordinator::ScanCoordinator;
use pathmap_migrator::progress::{print_header, print_summary, ProgressReporter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose())?;

    // Validate and create config
    let config = ScanConfig::from_args(args).context("Invalid configuration")?;

    // Print header
    if config.show_progress {
        print_header(&config);
    }

    let progress = if config.show_progress {
        Some(ProgressReporter::new())
    } else {
        None
    };

    // Run the scan
    let coordinator = ScanCoordinator::new(config);
    let report = coordinator
        .run_with_progress(progress.as_ref())
        .context("Scan failed")?;

    // Finish progress
    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    // Print summary
    print_summary(&report);

    if report.paths_lost() > 0 {
        info!(
            paths_lost = report.paths_lost(),
            "Scan completed with failed batch writes"
        );
    }
    if report.walk_errors() > 0 {
        info!(
            skipped = report.walk_errors(),
            "Scan completed with unreadable entries"
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("pathmap_migrator=debug,warn")
    } else {
        EnvFilter::new("pathmap_migrator=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
