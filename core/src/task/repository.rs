//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskId};
use crate::Result;

/// Repository interface for task storage.
///
/// Implementations report a missing task from `find_by_id` as `Ok(None)`;
/// turning that into a business failure is left to the service.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks, in backend-defined order
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// Append a task whose id was obtained from `next_id`
    async fn save(&self, task: Task) -> Result<()>;

    /// Replace the stored task carrying the same id
    async fn update(&self, task: Task) -> Result<()>;

    /// Delete a task by ID
    async fn delete(&self, id: TaskId) -> Result<()>;

    /// Allocate the next task id. Ids start at 1 and are never reissued.
    async fn next_id(&self) -> Result<TaskId>;
}
