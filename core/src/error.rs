//! Error types for the core library

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Task data is invalid")]
    InvalidTask,

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// Raised by repositories when a write targets an id they do not hold.
    #[error("Not found: {0}")]
    NotFound(TaskId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Whether the error refers to a task id that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_) | Self::NotFound(_))
    }

    /// Whether the error was caused by caller input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyDescription | Self::InvalidTask | Self::InvalidArgument(_)
        )
    }
}
