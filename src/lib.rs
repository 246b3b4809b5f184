//! pathmap-migrator - Artifact Storage Scan Pipeline
//!
//! A tool that scans an artifact storage volume, collects the paths of all
//! regular files that need later migration, and writes those paths in
//! fixed-size batches for a downstream migration process to consume. The
//! tool itself never moves or modifies artifacts.
//!
//! # Features
//!
//! - **Fixed-Size Batching**: Paths accumulate in a bounded buffer and are
//!   flushed to numbered batch files, keeping per-file memory and file-handle
//!   pressure low for the downstream consumer.
//!
//! - **Resilient Traversal**: Unreadable entries are skipped and counted
//!   rather than aborting a multi-hour scan; write failures are surfaced as
//!   counters in the final report.
//!
//! - **Destructive Work-Dir Preparation**: Each run starts from a fresh
//!   `todo`/`processed` layout, so stale batches from a prior run can never
//!   leak into the current one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Storage volume (--base)                     │
//! │   generic-http/          maven/            npm/              │
//! └───────────┬──────────────────┬────────────────┬─────────────┘
//!             │                  │                │
//!             ▼                  ▼                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ScanCoordinator                          │
//! │  validate volume → prepare work dir → scan packages in order │
//! │                                                              │
//! │   ┌────────────────────┐       ┌───────────────────────┐    │
//! │   │   PackageScanner   │──────▶│      BatchWriter      │    │
//! │   │  walkdir traversal │ flush │  todo-<pkg>-batch-N   │    │
//! │   │  bounded buffer    │       │  append, one per line │    │
//! │   └────────────────────┘       └───────────────────────┘    │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//!                                ▼
//!                 ┌──────────────────────────────┐
//!                 │  <workdir>/todo/*.txt        │
//!                 │  <workdir>/processed/        │
//!                 │  <base>/scan_status          │
//!                 └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Scan the default storage volume into the current directory
//! pathmap-migrator scan
//!
//! # Custom volume and work dir, smaller batches
//! pathmap-migrator scan -b /mnt/storage -w /tmp/migration -B 10000
//!
//! # Feed a batch to the downstream migrator
//! wc -l migration/todo/todo-maven-batch-0.txt
//! ```

pub mod batch;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod progress;
pub mod scanner;
pub mod volume;
pub mod workdir;

pub use config::{CliArgs, ScanConfig};
pub use coordinator::{ScanCoordinator, ScanReport, PACKAGE_DIRS};
pub use error::{MigratorError, Result};
pub use scanner::{PackageScanner, ScanStats};
