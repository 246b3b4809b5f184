//! Batch file writer
//!
//! Appends path batches to numbered text files in the work dir's to-do
//! subdirectory, one path per line. Files are named
//! `todo-<package>-batch-<index>.txt` and opened in append+create mode, so a
//! handle never persists across flushes. Paths are written in buffer order;
//! no deduplication or sorting happens here.

use crate::error::{BatchError, BatchResult};
use crate::workdir::{todo_dir, TODO_FILES_DIR};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes path batches for a single package.
pub struct BatchWriter {
    todo_dir: PathBuf,
    prefix: String,
}

impl BatchWriter {
    /// Create a writer for `package`, rooted at `work_dir`.
    pub fn new(work_dir: &Path, package: &str) -> Self {
        Self {
            todo_dir: todo_dir(work_dir),
            prefix: format!("{}-{}", TODO_FILES_DIR, package),
        }
    }

    /// The file a given batch index lands in.
    pub fn batch_path(&self, index: u32) -> PathBuf {
        self.todo_dir
            .join(format!("{}-batch-{}.txt", self.prefix, index))
    }

    /// Append `paths` to the batch file for `index`, one per line.
    ///
    /// The file is opened, written through a buffered writer, flushed, and
    /// closed within this call. Returns the number of lines written.
    pub fn write_batch(&self, paths: &[PathBuf], index: u32) -> BatchResult<usize> {
        let batch_path = self.batch_path(index);
        debug!(
            "Storing {} paths for batch {} to {}",
            paths.len(),
            index,
            batch_path.display()
        );

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&batch_path)
            .map_err(|e| BatchError::Open {
                path: batch_path.clone(),
                source: e,
            })?;

        let mut writer = BufWriter::new(file);
        for path in paths {
            writeln!(writer, "{}", path.display()).map_err(|e| BatchError::Write {
                path: batch_path.clone(),
                source: e,
            })?;
        }
        writer.flush().map_err(|e| BatchError::Write {
            path: batch_path,
            source: e,
        })?;

        Ok(paths.len())
    }
}
