//! Pure in-memory mutations of a task snapshot.
//!
//! Every mutating store operation is expressed as a [`Mutation`] applied to a
//! [`TaskList`]. Applying never touches storage, so the rules here can be
//! exercised without a backing file.

use crate::error::{Action, Result, TaskError};
use crate::task::{Task, TaskId, TaskList};
use chrono::{DateTime, Utc};

/// A single-task change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create { description: String },
    Edit { id: TaskId, description: String },
    Start(TaskId),
    Complete(TaskId),
    Undo(TaskId),
    Delete(TaskId),
}

impl Mutation {
    /// Applies the mutation to `tasks` in place and returns the affected task.
    ///
    /// For `Delete` the returned task is the removed entry. On error `tasks`
    /// is left exactly as it was.
    pub fn apply(self, tasks: &mut TaskList, now: DateTime<Utc>) -> Result<Task> {
        match self {
            Mutation::Create { description } => {
                if description.is_empty() || tasks.contains_description(&description) {
                    return Err(TaskError::DuplicateTask { description });
                }
                let task = Task::new(tasks.next_id()?, description, now);
                tasks.tasks.push(task.clone());
                Ok(task)
            }
            Mutation::Edit { id, description } => {
                let taken = tasks
                    .tasks
                    .iter()
                    .any(|t| t.id != id && t.description == description);
                let task = tasks.get_mut(id)?;
                if !task.status.is_editable() {
                    return Err(TaskError::InvalidTransition {
                        id,
                        from: task.status,
                        action: Action::Edit,
                    });
                }
                if description.is_empty() || taken {
                    return Err(TaskError::DuplicateTask { description });
                }
                task.description = description;
                task.touch(now);
                Ok(task.clone())
            }
            Mutation::Start(id) => {
                let task = tasks.get_mut(id)?;
                let next = task.status.start();
                task.set_status(Action::Start, next, now)?;
                Ok(task.clone())
            }
            Mutation::Complete(id) => {
                let task = tasks.get_mut(id)?;
                let next = task.status.complete();
                task.set_status(Action::Complete, next, now)?;
                Ok(task.clone())
            }
            Mutation::Undo(id) => {
                let task = tasks.get_mut(id)?;
                task.status = task.status.undo();
                task.touch(now);
                Ok(task.clone())
            }
            Mutation::Delete(id) => tasks.remove(id),
        }
    }
}
