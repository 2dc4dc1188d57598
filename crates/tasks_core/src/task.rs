//! Task records, identifiers, and the status state machine.

use crate::error::{Action, Result, TaskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Store-assigned task identifier.
///
/// Ids are positive and never reused: a new id is always one greater than the
/// largest id present in the snapshot it was assigned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// The id assigned to the first task of an empty collection.
    pub const FIRST: TaskId = TaskId(1);

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` once `u64` is exhausted.
    pub fn next(self) -> Option<TaskId> {
        self.0.checked_add(1).map(TaskId)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    /// Parses a positive decimal id. Zero is rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let id: NonZeroU64 = s.parse()?;
        Ok(TaskId(id.get()))
    }
}

/// Lifecycle tag on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Incomplete,
    #[serde(alias = "In Progress")]
    InProgress,
    Complete,
}

impl TaskStatus {
    /// Status after `start`. Only an `Incomplete` task can be started.
    pub fn start(self) -> std::result::Result<TaskStatus, TaskStatus> {
        match self {
            Self::Incomplete => Ok(Self::InProgress),
            other => Err(other),
        }
    }

    /// Status after `complete`. `Complete` is terminal until undone.
    pub fn complete(self) -> std::result::Result<TaskStatus, TaskStatus> {
        match self {
            Self::Incomplete | Self::InProgress => Ok(Self::Complete),
            Self::Complete => Err(self),
        }
    }

    /// Status after `undo`, legal from every state.
    pub fn undo(self) -> TaskStatus {
        Self::Incomplete
    }

    /// Whether the description may still be edited.
    pub fn is_editable(self) -> bool {
        self != Self::Complete
    }

    /// Whether the task still needs work.
    pub fn is_open(self) -> bool {
        self != Self::Complete
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Incomplete => "Incomplete",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        };
        f.write_str(name)
    }
}

/// One unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            status: TaskStatus::Incomplete,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`, never moving it before `created_at`.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub(crate) fn set_status(
        &mut self,
        action: Action,
        next: std::result::Result<TaskStatus, TaskStatus>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        match next {
            Ok(status) => {
                self.status = status;
                self.touch(now);
                Ok(())
            }
            Err(from) => Err(TaskError::InvalidTransition {
                id: self.id,
                from,
                action,
            }),
        }
    }
}

/// The persisted document: every task in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id to assign to the next created task.
    ///
    /// # Errors
    ///
    /// Returns `IdsExhausted` if the largest id is already `u64::MAX`.
    pub fn next_id(&self) -> Result<TaskId> {
        match self.tasks.iter().map(|t| t.id).max() {
            None => Ok(TaskId::FIRST),
            Some(max) => max.next().ok_or(TaskError::IdsExhausted(max)),
        }
    }

    /// Checks the rules every stored collection must satisfy: ids are
    /// positive and unique, descriptions are non-empty and unique.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut ids = HashSet::new();
        let mut descriptions = HashSet::new();
        for task in &self.tasks {
            if task.id.0 == 0 {
                return Err(format!("task {:?} has id 0", task.description));
            }
            if !ids.insert(task.id) {
                return Err(format!("id {} appears more than once", task.id));
            }
            if task.description.is_empty() {
                return Err(format!("task {} has an empty description", task.id));
            }
            if !descriptions.insert(task.description.as_str()) {
                return Err(format!(
                    "description {:?} appears more than once",
                    task.description
                ));
            }
        }
        Ok(())
    }

    /// Exact, case-sensitive description match.
    pub fn contains_description(&self, description: &str) -> bool {
        self.tasks.iter().any(|t| t.description == description)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    pub(crate) fn remove(&mut self, id: TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }
}
