//! Package subtree scanner
//!
//! Walks a single package subtree depth-first, accumulating regular-file
//! paths into a bounded buffer and flushing a numbered batch to the writer
//! whenever the buffer fills. Directories, symlinks, and special files are
//! skipped and not counted. The buffer and batch counter are scoped to one
//! scan; nothing is shared across packages.

use crate::batch::BatchWriter;
use crate::config::ScanConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Per-package scan outcome.
///
/// Error counts make the skip-and-continue policy observable: traversal and
/// write failures never abort a scan, but they are never silent either.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Regular files found under the package subtree
    pub files: u64,

    /// Batch files flushed (full batches plus any remainder)
    pub batches: u32,

    /// Directory entries skipped because they could not be read
    pub walk_errors: u64,

    /// Batch flushes that failed
    pub write_errors: u64,

    /// Paths dropped by failed flushes
    pub paths_lost: u64,
}

/// Scans one package subtree and flushes path batches.
pub struct PackageScanner<'a> {
    config: &'a ScanConfig,
    package: &'a str,
    writer: BatchWriter,
}

impl<'a> PackageScanner<'a> {
    pub fn new(config: &'a ScanConfig, package: &'a str) -> Self {
        Self {
            config,
            package,
            writer: BatchWriter::new(&config.work_dir, package),
        }
    }

    /// Walk the package subtree and flush batches as the buffer fills.
    pub fn scan(&self) -> ScanStats {
        self.scan_with_progress(|_| {})
    }

    /// Like [`scan`](Self::scan), invoking `on_file` with the running file
    /// count after each regular file is buffered.
    pub fn scan_with_progress<F>(&self, mut on_file: F) -> ScanStats
    where
        F: FnMut(u64),
    {
        let root = self.config.package_dir(self.package);
        info!("Start to scan package {} for files", self.package);

        let mut stats = ScanStats::default();
        let mut buffer: Vec<PathBuf> = Vec::with_capacity(self.config.batch_size);
        let mut batch_num: u32 = 0;

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Keep walking; unreadable entries are counted, not fatal.
                    stats.walk_errors += 1;
                    debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            buffer.push(entry.into_path());
            stats.files += 1;
            on_file(stats.files);

            if buffer.len() >= self.config.batch_size {
                self.flush(&buffer, batch_num, &mut stats);
                batch_num += 1;
                buffer.clear();
            }
        }

        // The remainder keeps the historical numbering: one past the next
        // sequential index. Consumers glob for batch files rather than
        // counting indices, so the gap is part of the on-disk contract.
        if !buffer.is_empty() {
            self.flush(&buffer, batch_num + 1, &mut stats);
        }

        stats
    }

    fn flush(&self, buffer: &[PathBuf], index: u32, stats: &mut ScanStats) {
        match self.writer.write_batch(buffer, index) {
            Ok(written) => {
                stats.batches += 1;
                debug!(
                    "Batch {} for {} finished ({} paths)",
                    index, self.package, written
                );
            }
            Err(e) => {
                stats.write_errors += 1;
                stats.paths_lost += buffer.len() as u64;
                warn!(
                    "Dropping {} paths for package {}: {}",
                    buffer.len(),
                    self.package,
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workdir::prepare_work_dir;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"artifact").unwrap();
    }

    fn setup(batch_size: usize) -> (tempfile::TempDir, tempfile::TempDir, ScanConfig) {
        let base = tempdir().unwrap();
        let work = tempdir().unwrap();
        prepare_work_dir(work.path()).unwrap();
        let config = ScanConfig::new(base.path(), work.path(), batch_size).unwrap();
        (base, work, config)
    }

    #[test]
    fn test_scan_counts_nested_regular_files() {
        let (base, _work, config) = setup(10);
        touch(&base.path().join("maven/a.jar"));
        touch(&base.path().join("maven/sub/b.jar"));
        touch(&base.path().join("maven/sub/deeper/c.pom"));
        fs::create_dir_all(base.path().join("maven/empty")).unwrap();

        let stats = PackageScanner::new(&config, "maven").scan();

        assert_eq!(stats.files, 3);
        assert_eq!(stats.batches, 1);
        assert_eq!(stats.walk_errors, 0);
        assert_eq!(stats.write_errors, 0);
    }

    #[test]
    fn test_full_batches_then_remainder_numbering() {
        let (base, work, config) = setup(2);
        for name in ["a", "b", "c", "d", "e"] {
            touch(&base.path().join(format!("maven/{}.jar", name)));
        }

        let scanner = PackageScanner::new(&config, "maven");
        let stats = scanner.scan();

        assert_eq!(stats.files, 5);
        assert_eq!(stats.batches, 3);

        // Two full batches at 0 and 1; the remainder skips an index.
        let todo = crate::workdir::todo_dir(work.path());
        let line_count = |name: &str| {
            fs::read_to_string(todo.join(name))
                .map(|s| s.lines().count())
                .unwrap_or(0)
        };
        assert_eq!(line_count("todo-maven-batch-0.txt"), 2);
        assert_eq!(line_count("todo-maven-batch-1.txt"), 2);
        assert!(!todo.join("todo-maven-batch-2.txt").exists());
        assert_eq!(line_count("todo-maven-batch-3.txt"), 1);
    }

    #[test]
    fn test_exact_multiple_writes_no_remainder() {
        let (base, work, config) = setup(2);
        for name in ["a", "b", "c", "d"] {
            touch(&base.path().join(format!("maven/{}.jar", name)));
        }

        let stats = PackageScanner::new(&config, "maven").scan();

        assert_eq!(stats.files, 4);
        assert_eq!(stats.batches, 2);

        let todo = crate::workdir::todo_dir(work.path());
        assert!(todo.join("todo-maven-batch-0.txt").exists());
        assert!(todo.join("todo-maven-batch-1.txt").exists());
        assert!(!todo.join("todo-maven-batch-2.txt").exists());
        assert!(!todo.join("todo-maven-batch-3.txt").exists());
    }

    #[test]
    fn test_single_file_lands_in_remainder_batch() {
        let (base, work, config) = setup(50);
        touch(&base.path().join("npm/pkg/c.tgz"));

        let stats = PackageScanner::new(&config, "npm").scan();

        assert_eq!(stats.files, 1);
        assert_eq!(stats.batches, 1);

        let todo = crate::workdir::todo_dir(work.path());
        assert!(!todo.join("todo-npm-batch-0.txt").exists());
        assert!(todo.join("todo-npm-batch-1.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_counted() {
        let (base, _work, config) = setup(10);
        let target = base.path().join("maven/real.jar");
        touch(&target);
        std::os::unix::fs::symlink(&target, base.path().join("maven/link.jar")).unwrap();

        let stats = PackageScanner::new(&config, "maven").scan();

        assert_eq!(stats.files, 1);
    }

    #[test]
    fn test_batch_union_covers_every_file() {
        use std::collections::HashSet;

        let (base, work, config) = setup(3);
        let mut expected = HashSet::new();
        for i in 0..10 {
            let path = base.path().join(format!("maven/group/artifact-{}.jar", i));
            touch(&path);
            expected.insert(path.display().to_string());
        }

        PackageScanner::new(&config, "maven").scan();

        let todo = crate::workdir::todo_dir(work.path());
        let mut found = HashSet::new();
        for entry in fs::read_dir(&todo).unwrap() {
            let contents = fs::read_to_string(entry.unwrap().path()).unwrap();
            for line in contents.lines() {
                assert!(found.insert(line.to_string()), "duplicate path {}", line);
            }
        }

        assert_eq!(found, expected);
    }

    #[test]
    fn test_write_failure_is_counted_not_fatal() {
        let base = tempdir().unwrap();
        let work = tempdir().unwrap();
        // No prepare_work_dir: the to-do dir is missing, so every flush fails.
        let config = ScanConfig::new(base.path(), work.path(), 2).unwrap();
        for name in ["a", "b", "c"] {
            touch(&base.path().join(format!("maven/{}.jar", name)));
        }

        let stats = PackageScanner::new(&config, "maven").scan();

        assert_eq!(stats.files, 3);
        assert_eq!(stats.batches, 0);
        assert_eq!(stats.write_errors, 2);
        assert_eq!(stats.paths_lost, 3);
    }

    #[test]
    fn test_missing_package_root_is_a_walk_error() {
        let (_base, _work, config) = setup(10);

        let stats = PackageScanner::new(&config, "generic-http").scan();

        assert_eq!(stats.files, 0);
        assert_eq!(stats.walk_errors, 1);
    }
}
