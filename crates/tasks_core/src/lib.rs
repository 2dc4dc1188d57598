//! Task tracker core library.
//!
//! Owns the durable task collection behind the `tasks` REPL:
//! - Task records and their status state machine
//! - Pure, storage-free mutation rules
//! - A file-backed [`Store`] with locked, atomic read-modify-write cycles
//!
//! # Quick Start
//!
//! ```
//! use tasks_core::{Store, TaskStatus};
//! use tempfile::TempDir;
//!
//! let tmp = TempDir::new().unwrap();
//! let store = Store::initialize(tmp.path().join("db.json")).unwrap();
//!
//! let task = store.create("Buy milk").unwrap();
//! store.start(task.id).unwrap();
//!
//! let started = store.list_by_status(TaskStatus::InProgress).unwrap();
//! assert_eq!(started[0].description, "Buy milk");
//! ```
//!
//! # Mutations without storage
//!
//! The rules every mutating operation enforces are available as a pure
//! function over a snapshot:
//!
//! ```
//! use chrono::Utc;
//! use tasks_core::{Mutation, TaskList};
//!
//! let mut tasks = TaskList::default();
//! let first = Mutation::Create { description: "a".into() }
//!     .apply(&mut tasks, Utc::now())
//!     .unwrap();
//! assert!(Mutation::Start(first.id).apply(&mut tasks, Utc::now()).is_ok());
//! assert!(Mutation::Start(first.id).apply(&mut tasks, Utc::now()).is_err());
//! ```

mod config;
mod error;
mod lock;
mod mutation;
mod store;
mod task;

pub use config::{Config, DisplayConfig, StorageConfig, DEFAULT_CONFIG_FILE};
pub use error::{Action, ErrorKind, Result, TaskError};
pub use mutation::Mutation;
pub use store::Store;
pub use task::{Task, TaskId, TaskList, TaskStatus};

use chrono::{DateTime, Utc};

/// Time source for task timestamps.
///
/// Tests inject a controlled clock through [`Store::with_clock`]; any
/// `Fn() -> DateTime<Utc>` closure works.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
