//! Configuration types for pathmap-migrator
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Default storage volume root on Indy hosts
pub const DEFAULT_BASE_DIR: &str = "/opt/indy/var/lib/indy/storage";

/// Default number of paths per batch file
pub const DEFAULT_BATCH_SIZE: usize = 50_000;

/// Artifact storage scanner for pathmap migration
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pathmap-migrator",
    version,
    about = "Scan artifact storage and record file paths for pathmap migration",
    long_about = "Walks the package-type subdirectories of an artifact storage volume and \
                  writes the paths of all regular files into fixed-size batch files for a \
                  downstream migration process to consume.",
    after_help = "EXAMPLES:\n    \
        pathmap-migrator scan\n    \
        pathmap-migrator scan -b /mnt/storage -w /tmp/migration\n    \
        pathmap-migrator scan --batch 10000 -v",
    arg_required_else_help = true
)]
pub struct CliArgs {
    /// Subcommand (scan)
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Scan storage for files that need migration
    Scan {
        /// Base dir of storage for all artifacts
        #[arg(short = 'b', long, default_value = DEFAULT_BASE_DIR, value_name = "DIR")]
        base: PathBuf,

        /// Work dir to store all generated working files
        #[arg(short = 'w', long, default_value = "./", value_name = "DIR")]
        workdir: PathBuf,

        /// Number of paths to store in each batch file
        #[arg(short = 'B', long, default_value_t = DEFAULT_BATCH_SIZE, value_name = "NUM")]
        batch: usize,

        /// Quiet mode - suppress progress output
        #[arg(short = 'q', long)]
        quiet: bool,

        /// Verbose output (show skipped entries and batch details)
        #[arg(short = 'v', long)]
        verbose: bool,
    },
}

impl CliArgs {
    /// Verbose flag of the invoked subcommand
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Scan { verbose, .. } => *verbose,
        }
    }
}

/// Validated runtime configuration
///
/// Immutable once the run starts; every component borrows it rather than
/// reading process-wide state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root of the artifact storage tree
    pub base_dir: PathBuf,

    /// Root for generated working files
    pub work_dir: PathBuf,

    /// Maximum path count per batch file
    pub batch_size: usize,

    /// Show progress indicator
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl ScanConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let Command::Scan {
            base,
            workdir,
            batch,
            quiet,
            verbose,
        } = args.command;

        if batch == 0 {
            return Err(ConfigError::InvalidBatchSize { size: batch });
        }

        Ok(Self {
            base_dir: base,
            work_dir: workdir,
            batch_size: batch,
            show_progress: !quiet,
            verbose,
        })
    }

    /// Configuration for library callers and tests; same validation as
    /// `from_args`, progress display off.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        work_dir: impl Into<PathBuf>,
        batch_size: usize,
    ) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize { size: batch_size });
        }

        Ok(Self {
            base_dir: base_dir.into(),
            work_dir: work_dir.into(),
            batch_size,
            show_progress: false,
            verbose: false,
        })
    }

    /// Path of a package-type subdirectory under the base dir
    pub fn package_dir(&self, package: &str) -> PathBuf {
        self.base_dir.join(package)
    }
}
