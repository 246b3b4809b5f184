//! Scan orchestration
//!
//! Drives the full pipeline: validate the storage volume, prepare the work
//! dir, scan each known package subtree in order, and record the grand
//! total. Packages are scanned one at a time on the calling thread; the only
//! per-run state is the report being accumulated.
//!
//! ```text
//! Init → ValidateBase → PrepareWorkDir → {ScanPackage}* → StoreTotal → Done
//! ```
//!
//! Validation and work-dir preparation failures abort the run. Batch and
//! status-file write failures are logged, counted, and never abort it.

use crate::config::ScanConfig;
use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::scanner::{PackageScanner, ScanStats};
use crate::volume;
use crate::workdir::prepare_work_dir;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Known package-type subdirectories, scanned in this order when present.
/// The set is fixed; unknown subdirectories under the base dir are ignored.
pub const PACKAGE_DIRS: [&str; 3] = ["generic-http", "maven", "npm"];

/// Outcome of a full scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Files found across all packages
    pub total: u64,

    /// Per-package stats, in scan order
    pub packages: Vec<(String, ScanStats)>,

    /// Wall-clock duration of the whole run
    pub duration: Duration,

    /// Where the grand total was recorded, if that write succeeded
    pub status_path: Option<PathBuf>,
}

impl ScanReport {
    /// Entries skipped as unreadable, across all packages
    pub fn walk_errors(&self) -> u64 {
        self.packages.iter().map(|(_, s)| s.walk_errors).sum()
    }

    /// Failed batch flushes, across all packages
    pub fn write_errors(&self) -> u64 {
        self.packages.iter().map(|(_, s)| s.write_errors).sum()
    }

    /// Paths dropped by failed flushes, across all packages
    pub fn paths_lost(&self) -> u64 {
        self.packages.iter().map(|(_, s)| s.paths_lost).sum()
    }
}

/// Runs the scan pipeline against one immutable configuration.
pub struct ScanCoordinator {
    config: ScanConfig,
}

impl ScanCoordinator {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the full pipeline without progress display.
    pub fn run(&self) -> Result<ScanReport> {
        self.run_with_progress(None)
    }

    /// Run the full pipeline, pushing per-package status into `progress`.
    pub fn run_with_progress(&self, progress: Option<&ProgressReporter>) -> Result<ScanReport> {
        volume::validate_base_dir(&self.config.base_dir)?;

        // Destructive: wipes prior to-do and processed contents. Must finish
        // before the first batch is written.
        prepare_work_dir(&self.config.work_dir)?;

        let start = Instant::now();
        let mut report = ScanReport::default();

        for package in self.existing_packages() {
            if let Some(p) = progress {
                p.set_status(&format!("Scanning {}...", package));
            }

            let scanner = PackageScanner::new(&self.config, package);
            let scanned_before = report.total;
            let stats = match progress {
                Some(p) => {
                    scanner.scan_with_progress(|files| p.update(package, scanned_before + files))
                }
                None => scanner.scan(),
            };

            info!(
                "Package {} scanned: {} files in {} batches",
                package, stats.files, stats.batches
            );
            report.total += stats.files;
            report.packages.push((package.to_string(), stats));
        }

        if report.write_errors() > 0 {
            warn!(
                "{} batch writes failed; {} paths were not recorded",
                report.write_errors(),
                report.paths_lost()
            );
        }
        if report.walk_errors() > 0 {
            warn!(
                "{} entries could not be read and were skipped",
                report.walk_errors()
            );
        }

        match volume::store_total(&self.config.base_dir, report.total) {
            Ok(path) => report.status_path = Some(path),
            Err(e) => warn!(
                "Failed to record scan total under {}: {}",
                self.config.base_dir.display(),
                e
            ),
        }

        report.duration = start.elapsed();
        Ok(report)
    }

    /// Package dirs that exist directly under the base dir, in fixed order.
    fn existing_packages(&self) -> Vec<&'static str> {
        PACKAGE_DIRS
            .iter()
            .copied()
            .filter(|package| {
                let exists = self.config.package_dir(package).is_dir();
                if exists {
                    info!("{} is a valid package to scan", package);
                } else {
                    debug!("{} not present, skipping", package);
                }
                exists
            })
            .collect()
    }
}
