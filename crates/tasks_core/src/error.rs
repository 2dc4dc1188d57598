//! Error types for tasks_core operations.

use crate::task::{TaskId, TaskStatus};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for task store operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The backing file could not be read, written, or parsed.
    #[error("storage unavailable at {}: {}", path.display(), reason)]
    StorageUnavailable {
        /// Path to the backing file (or its temp/lock sibling)
        path: PathBuf,
        /// Description of what failed
        reason: String,
    },

    /// No task with the given id exists in the current snapshot.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// Creation was rejected because the description is empty or already in use.
    #[error("{}", duplicate_message(.description))]
    DuplicateTask {
        /// The offending description
        description: String,
    },

    /// The requested status change is not legal from the task's current status.
    #[error("cannot {action} task {id}: task is {from}")]
    InvalidTransition {
        /// Task the transition was requested for
        id: TaskId,
        /// Status at the time of the request
        from: TaskStatus,
        /// Operation that was refused
        action: Action,
    },

    /// The collection already holds the largest representable id, so no new
    /// task can be numbered.
    #[error("no task id left after {0}")]
    IdsExhausted(TaskId),

    /// Configuration error (loading, parsing, writing).
    #[error("configuration error: {0}")]
    ConfigError(String),
}

fn duplicate_message(description: &str) -> String {
    if description.is_empty() {
        "task description must not be empty".to_string()
    } else {
        format!("a task with description \"{description}\" already exists")
    }
}

/// Coarse error classification, used by callers to pick a handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StorageUnavailable,
    NotFound,
    DuplicateTask,
    InvalidTransition,
    Config,
}

/// Status-changing operations that can be refused with `InvalidTransition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Complete,
    Edit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Edit => "edit",
        };
        f.write_str(name)
    }
}

impl TaskError {
    pub(crate) fn storage(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StorageUnavailable { .. } => ErrorKind::StorageUnavailable,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DuplicateTask { .. } => ErrorKind::DuplicateTask,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::IdsExhausted(_) => ErrorKind::StorageUnavailable,
            Self::ConfigError(_) => ErrorKind::Config,
        }
    }

    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::StorageUnavailable { .. } => {
                Some("Check that the task file's directory exists and is writable, and that the file contains valid JSON.")
            }
            Self::NotFound(_) => Some("Type 'show all' to list task ids."),
            Self::IdsExhausted(_) => Some("Delete the task with the largest id to free new ids."),
            Self::InvalidTransition {
                action: Action::Edit | Action::Complete,
                ..
            } => Some("Use 'undo <id>' to reopen the task first."),
            Self::InvalidTransition {
                action: Action::Start,
                from: TaskStatus::Complete,
                ..
            } => Some("Use 'undo <id>' to reopen the task first."),
            _ => None,
        }
    }
}

/// Convenience Result type for tasks_core operations.
pub type Result<T> = std::result::Result<T, TaskError>;
