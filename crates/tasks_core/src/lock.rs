//! Cross-process advisory lock on the task file's `.lock` sibling.

use crate::error::{Result, TaskError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Lock mode requested for one store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LockMode {
    Shared,
    Exclusive,
}

/// RAII guard for the sidecar lock file.
///
/// The lock is released when the guard is dropped. The lock file itself is
/// left in place: removing it while another handle waits on it would let two
/// holders lock different inodes.
pub(crate) struct FileLock {
    file: Option<File>,
}

impl FileLock {
    /// Blocks until the lock on `path` is held in the given mode.
    pub(crate) fn acquire(path: &Path, mode: LockMode) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| TaskError::storage(path, format!("failed to open lock file: {e}")))?;

        let locked = match mode {
            LockMode::Shared => FileExt::lock_shared(&file),
            LockMode::Exclusive => FileExt::lock_exclusive(&file),
        };
        locked.map_err(|e| TaskError::storage(path, format!("failed to lock: {e}")))?;

        Ok(Self { file: Some(file) })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = FileExt::unlock(&file);
        }
    }
}
