//! Storage-volume preconditions and the scan status record
//!
//! A directory counts as an artifact storage volume only if it contains the
//! `maven` marker subdirectory. Validation runs once, before the work dir is
//! touched; nothing is scanned if it fails.

use crate::error::ValidationError;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Marker subdirectory that identifies an artifact storage volume
pub const VOLUME_MARKER: &str = "maven";

/// Status file written under the base dir after a completed run
pub const STATUS_FILE: &str = "scan_status";

/// Check that `base` is a directory holding an artifact storage volume.
pub fn validate_base_dir(base: &Path) -> Result<(), ValidationError> {
    if !base.is_dir() {
        return Err(ValidationError::BaseDirInvalid {
            path: base.to_path_buf(),
        });
    }

    if !base.join(VOLUME_MARKER).is_dir() {
        return Err(ValidationError::NotAStorageVolume {
            path: base.to_path_buf(),
            marker: VOLUME_MARKER,
        });
    }

    Ok(())
}

/// Append `Total:<N>` to the status file under `base`.
///
/// Appending keeps one line per run, so prior totals stay visible.
pub fn store_total(base: &Path, total: u64) -> io::Result<PathBuf> {
    let status_path = base.join(STATUS_FILE);

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&status_path)?;
    writeln!(file, "Total:{}", total)?;

    info!("Total number stored in {}", status_path.display());
    Ok(status_path)
}
