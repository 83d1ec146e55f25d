//! Task model definitions

use serde::Serialize;

/// Identifier assigned to a task by its repository.
pub type TaskId = i64;

/// Id carried by a task that has not been assigned one yet.
pub const UNASSIGNED_ID: TaskId = 0;

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
}

impl Task {
    /// Create a new task with the given description and no id
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            description: description.into(),
        }
    }

    /// A task is valid when its description is non-empty
    pub fn is_valid(&self) -> bool {
        !self.description.is_empty()
    }

    /// Whether a repository has assigned an id to this task
    pub fn has_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}
