//! Durable task store backed by a single JSON document.

use crate::config::StorageConfig;
use crate::error::{Result, TaskError};
use crate::lock::{FileLock, LockMode};
use crate::mutation::Mutation;
use crate::task::{Task, TaskId, TaskList, TaskStatus};
use crate::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Task store handle.
///
/// Every public operation is a complete load → apply → persist cycle over the
/// whole document; nothing is cached between calls. Reads hold the lock in
/// shared mode while loading, mutations hold it exclusively from load through
/// the atomic replace of the file, so concurrent mutations cannot lose each
/// other's updates.
///
/// The handle is `Send + Sync`; share it behind an `Arc` to use it from more
/// than one thread.
pub struct Store {
    /// Location of the task document.
    path: PathBuf,
    /// Sidecar file locked for cross-process exclusion.
    lock_path: PathBuf,
    /// In-process reader/writer lock guarding the backing file.
    lock: RwLock<()>,
    /// Write indented JSON.
    pretty: bool,
    /// Source of `created_at`/`updated_at` values.
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Opens the store at `path`, creating an empty document if none exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the file cannot be created, read, or
    /// parsed (missing parent directory, permissions, corrupt content).
    ///
    /// # Examples
    ///
    /// ```
    /// use tasks_core::Store;
    /// use tempfile::TempDir;
    ///
    /// let tmp = TempDir::new().unwrap();
    /// let store = Store::initialize(tmp.path().join("db.json")).unwrap();
    /// assert!(store.list().unwrap().is_empty());
    /// ```
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self> {
        let config = StorageConfig {
            path: path.as_ref().to_path_buf(),
            ..StorageConfig::default()
        };
        Self::from_config(&config)
    }

    /// Opens the store described by `config`. See [`Store::initialize`].
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let path = config.path.clone();
        let store = Self {
            lock_path: sibling(&path, ".lock"),
            path,
            lock: RwLock::new(()),
            pretty: config.pretty,
            clock: Arc::new(SystemClock),
        };
        store.ensure_document()?;
        Ok(store)
    }

    /// Replaces the time source used for timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a task with the next free id and status `Incomplete`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTask` if `description` is empty or exactly matches an
    /// existing task's description.
    pub fn create(&self, description: impl Into<String>) -> Result<Task> {
        self.apply(Mutation::Create {
            description: description.into(),
        })
    }

    /// Returns the task with the given id.
    pub fn get(&self, id: TaskId) -> Result<Task> {
        self.read(|tasks| tasks.get(id).cloned())?.ok_or(TaskError::NotFound(id))
    }

    /// Returns every task in storage (insertion) order.
    pub fn list(&self) -> Result<Vec<Task>> {
        self.read(|tasks| tasks.tasks)
    }

    /// Returns the tasks with the given status, in storage order.
    pub fn list_by_status(&self, status: TaskStatus) -> Result<Vec<Task>> {
        self.filter(|task| task.status == status)
    }

    /// Returns every task that is not `Complete`, in storage order.
    pub fn list_open(&self) -> Result<Vec<Task>> {
        self.filter(|task| task.status.is_open())
    }

    /// Replaces the description of a task that is not `Complete`.
    pub fn edit(&self, id: TaskId, description: impl Into<String>) -> Result<Task> {
        self.apply(Mutation::Edit {
            id,
            description: description.into(),
        })
    }

    /// Moves an `Incomplete` task to `InProgress`.
    pub fn start(&self, id: TaskId) -> Result<Task> {
        self.apply(Mutation::Start(id))
    }

    /// Marks a task `Complete`.
    pub fn complete(&self, id: TaskId) -> Result<Task> {
        self.apply(Mutation::Complete(id))
    }

    /// Resets a task to `Incomplete` from any status.
    pub fn undo(&self, id: TaskId) -> Result<Task> {
        self.apply(Mutation::Undo(id))
    }

    /// Removes a task and returns it. Its id is never handed out again while
    /// a larger id survives.
    pub fn delete(&self, id: TaskId) -> Result<Task> {
        self.apply(Mutation::Delete(id))
    }

    /// Runs one mutation inside a transaction and returns the affected task.
    ///
    /// If the mutation is rejected or the write fails, the file on disk is
    /// left as it was.
    pub fn apply(&self, mutation: Mutation) -> Result<Task> {
        let mut tx = self.begin()?;
        let task = mutation.apply(&mut tx.snapshot, self.now())?;
        tx.commit()?;
        Ok(task)
    }

    /// Acquires the exclusive lock and loads a private snapshot.
    fn begin(&self) -> Result<Transaction<'_>> {
        let guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let file_lock = FileLock::acquire(&self.lock_path, LockMode::Exclusive)?;
        let snapshot = self.load()?;
        Ok(Transaction {
            store: self,
            snapshot,
            _file_lock: file_lock,
            _guard: guard,
        })
    }

    fn read<T>(&self, f: impl FnOnce(TaskList) -> T) -> Result<T> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        let _file_lock = FileLock::acquire(&self.lock_path, LockMode::Shared)?;
        let tasks = self.load()?;
        Ok(f(tasks))
    }

    fn filter(&self, keep: impl Fn(&Task) -> bool) -> Result<Vec<Task>> {
        self.read(|tasks| tasks.tasks.into_iter().filter(|t| keep(t)).collect())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Creates the document if absent, otherwise checks that it parses.
    ///
    /// A zero-byte file is rewritten as an empty collection.
    fn ensure_document(&self) -> Result<()> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let _file_lock = FileLock::acquire(&self.lock_path, LockMode::Exclusive)?;

        match fs::read(&self.path) {
            Ok(data) if data.iter().all(u8::is_ascii_whitespace) => {
                self.write(&TaskList::default())
            }
            Ok(data) => self.parse(&data).map(|_| ()),
            Err(e) if e.kind() == ErrorKind::NotFound => self.write(&TaskList::default()),
            Err(e) => Err(TaskError::storage(&self.path, format!("failed to read: {e}"))),
        }
    }

    fn load(&self) -> Result<TaskList> {
        let data = fs::read(&self.path)
            .map_err(|e| TaskError::storage(&self.path, format!("failed to read: {e}")))?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(TaskList::default());
        }
        self.parse(&data)
    }

    /// Decodes the document and rejects collections that break the id and
    /// description rules.
    fn parse(&self, data: &[u8]) -> Result<TaskList> {
        let tasks: TaskList = serde_json::from_slice(data)
            .map_err(|e| TaskError::storage(&self.path, format!("failed to parse: {e}")))?;
        tasks.validate().map_err(|reason| {
            TaskError::storage(&self.path, format!("invalid document: {reason}"))
        })?;
        Ok(tasks)
    }

    /// Writes the whole document atomically.
    ///
    /// Uses temp file + fsync + rename; on failure the temp file is removed
    /// and the previous document is untouched.
    fn write(&self, tasks: &TaskList) -> Result<()> {
        let data = if self.pretty {
            serde_json::to_vec_pretty(tasks)
        } else {
            serde_json::to_vec(tasks)
        }
        .map_err(|e| TaskError::storage(&self.path, format!("failed to serialize: {e}")))?;

        let tmp_path = sibling(&self.path, ".tmp");
        if let Err(e) = write_synced(&tmp_path, &data) {
            // Only clean up a file we may have created, never a directory or
            // something else squatting on the name.
            if tmp_path.is_file() {
                let _ = fs::remove_file(&tmp_path);
            }
            return Err(TaskError::storage(&tmp_path, format!("failed to write: {e}")));
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TaskError::storage(&self.path, format!("failed to replace: {e}")));
        }

        // fsync parent directory (Unix-specific for crash safety)
        #[cfg(unix)]
        {
            let parent = match self.path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            if let Ok(dir_file) = File::open(parent) {
                let _ = dir_file.sync_all();
            }
        }

        Ok(())
    }
}

/// One exclusive-locked load → mutate → persist span.
///
/// Dropping a transaction without committing releases the locks and leaves
/// the file untouched.
struct Transaction<'a> {
    store: &'a Store,
    snapshot: TaskList,
    // Field order matters: the file lock is released before the in-process one.
    _file_lock: FileLock,
    _guard: RwLockWriteGuard<'a, ()>,
}

impl Transaction<'_> {
    fn commit(self) -> Result<()> {
        self.store.write(&self.snapshot)
    }
}

/// The task file is private to its owner: `0600` on Unix.
fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);
    let mut file = options.open(path)?;
    // A stale temp file left by a crash keeps its old mode.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(data)?;
    file.sync_all()
}

/// `db.json` + `.tmp` → `db.json.tmp`, in the same directory.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("tasks"));
    name.push(suffix);
    path.with_file_name(name)
}
