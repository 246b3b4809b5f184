//! Working-directory layout and preparation
//!
//! The work dir holds two subdirectories: `todo` receives the generated
//! batch files, `processed` is created empty for the downstream consumer to
//! move finished batches into. Preparation is destructive and must complete
//! before the first batch is written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Subdirectory holding generated to-do batch files
pub const TODO_FILES_DIR: &str = "todo";

/// Subdirectory reserved for batches consumed downstream
pub const PROCESSED_FILES_DIR: &str = "processed";

/// Path of the to-do subdirectory under `work_dir`
pub fn todo_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(TODO_FILES_DIR)
}

/// Path of the processed subdirectory under `work_dir`
pub fn processed_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(PROCESSED_FILES_DIR)
}

/// Recreate the to-do and processed subdirectories, destroying any prior
/// contents.
pub fn prepare_work_dir(work_dir: &Path) -> io::Result<()> {
    recreate_dir(&todo_dir(work_dir))?;
    recreate_dir(&processed_dir(work_dir))
}

fn recreate_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        info!("{} is not empty, cleaning it first", path.display());
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_creates_both_subdirs() {
        let dir = tempdir().unwrap();
        prepare_work_dir(dir.path()).unwrap();

        assert!(todo_dir(dir.path()).is_dir());
        assert!(processed_dir(dir.path()).is_dir());
    }

    #[test]
    fn test_prepare_wipes_prior_contents() {
        let dir = tempdir().unwrap();
        let todo = todo_dir(dir.path());
        fs::create_dir_all(&todo).unwrap();
        let stale = todo.join("todo-maven-batch-0.txt");
        fs::write(&stale, "old\n").unwrap();

        prepare_work_dir(dir.path()).unwrap();

        assert!(todo.is_dir());
        assert!(!stale.exists());
    }

    #[test]
    fn test_prepare_creates_missing_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/work");
        prepare_work_dir(&nested).unwrap();

        assert!(todo_dir(&nested).is_dir());
        assert!(processed_dir(&nested).is_dir());
    }
}
