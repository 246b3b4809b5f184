//! Progress reporting for the scan pipeline
//!
//! Provides a live spinner during the scan plus styled header and summary
//! blocks around it.

use crate::config::ScanConfig;
use crate::coordinator::ScanReport;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter that displays scan status
pub struct ProgressReporter {
    /// Progress bar
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Update the progress display with the running file count
    pub fn update(&self, package: &str, files: u64) {
        self.bar.set_message(format!(
            "Scanning {} | Files: {}",
            package,
            format_number(files)
        ));
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish the progress display with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .map(|&b| b as char)
                .collect::<String>()
        })
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of the run
pub fn print_header(config: &ScanConfig) {
    println!();
    println!(
        "{} {}",
        style("pathmap-migrator").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Storage:").bold(),
        config.base_dir.display()
    );
    println!(
        "  {} {}",
        style("Work dir:").bold(),
        config.work_dir.display()
    );
    println!(
        "  {} {}",
        style("Batch size:").bold(),
        format_number(config.batch_size as u64)
    );
    println!();
}

/// Print a summary of the scan results
pub fn print_summary(report: &ScanReport) {
    let duration_secs = report.duration.as_secs_f64();
    let rate = if duration_secs > 0.0 {
        report.total as f64 / duration_secs
    } else {
        0.0
    };

    println!();
    println!("{}", style("Scan Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Files to migrate:").bold(),
        format_number(report.total)
    );
    for (package, stats) in &report.packages {
        println!(
            "    {:<13} {} files, {} batches",
            format!("{}:", package),
            format_number(stats.files),
            stats.batches
        );
    }
    println!(
        "  {} {:.1}s ({:.0} files/sec)",
        style("Duration:").bold(),
        duration_secs,
        rate
    );
    if report.walk_errors() > 0 {
        println!(
            "  {} {}",
            style("Skipped entries:").yellow().bold(),
            format_number(report.walk_errors())
        );
    }
    if report.paths_lost() > 0 {
        println!(
            "  {} {}",
            style("Paths lost:").red().bold(),
            format_number(report.paths_lost())
        );
    }
    if let Some(path) = &report.status_path {
        println!("  {} {}", style("Status file:").bold(), path.display());
    }
    println!();
}
