use anyhow::Result;
use tasks_core::{ErrorKind, Store, TaskStatus};

/// Result of the most recent store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Err(ErrorKind),
}

/// Declarative assertions on store state
pub enum Assertion {
    // Last operation
    LastOutcome(Outcome),

    // Collection
    TaskCount(usize),
    IdsInOrder(Vec<u64>),
    NoTask { id: u64 },

    // Single task
    Status { id: u64, status: TaskStatus },
    Description { id: u64, text: String },
    /// `updated_at` is exactly this many seconds after `created_at`.
    UpdatedAfter { id: u64, secs: i64 },

    // Durability
    /// `list()` equals the list captured just before the last restart.
    UnchangedAcrossRestart,
    NoTempFile,

    // Custom
    Custom(Box<dyn Fn(&Store) -> Result<()> + Send + Sync>),
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastOutcome(o) => write!(f, "LastOutcome({:?})", o),
            Self::TaskCount(n) => write!(f, "TaskCount({})", n),
            Self::IdsInOrder(ids) => write!(f, "IdsInOrder({:?})", ids),
            Self::NoTask { id } => write!(f, "NoTask {{ id: {} }}", id),
            Self::Status { id, status } => {
                write!(f, "Status {{ id: {}, status: {:?} }}", id, status)
            }
            Self::Description { id, text } => {
                write!(f, "Description {{ id: {}, text: {:?} }}", id, text)
            }
            Self::UpdatedAfter { id, secs } => {
                write!(f, "UpdatedAfter {{ id: {}, secs: {} }}", id, secs)
            }
            Self::UnchangedAcrossRestart => write!(f, "UnchangedAcrossRestart"),
            Self::NoTempFile => write!(f, "NoTempFile"),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}
