//! Task service
//!
//! Applies task rules on top of a [`TaskRepository`]. Input validation and
//! the translation of missing tasks into [`Error::TaskNotFound`] happen here
//! and nowhere else; repository failures are passed through untouched.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// Use-case service for task CRUD operations
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a service on top of the given repository
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// List every stored task
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Get a single task, failing with `TaskNotFound` when it is absent
    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        self.find_existing(id).await
    }

    /// Create a task from a description.
    ///
    /// The description is checked before the repository is touched, so a
    /// rejected request does not consume an id.
    pub async fn create_task(&self, description: impl Into<String>) -> Result<Task> {
        let description = description.into();
        if description.is_empty() {
            warn!("Rejected task creation with empty description");
            return Err(Error::EmptyDescription);
        }

        let mut task = Task::new(description);
        task.id = self.repository.next_id().await?;

        if !task.is_valid() {
            return Err(Error::InvalidTask);
        }

        self.repository.save(task.clone()).await?;
        info!(task_id = task.id, "Created task");
        Ok(task)
    }

    /// Replace the description of an existing task
    pub async fn update_task(&self, id: TaskId, description: impl Into<String>) -> Result<Task> {
        let description = description.into();
        if description.is_empty() {
            warn!(task_id = id, "Rejected task update with empty description");
            return Err(Error::EmptyDescription);
        }

        let mut task = self.find_existing(id).await?;
        task.description = description;

        if !task.is_valid() {
            return Err(Error::InvalidTask);
        }

        self.repository.update(task.clone()).await?;
        info!(task_id = task.id, "Updated task");
        Ok(task)
    }

    /// Delete an existing task
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.find_existing(id).await?;
        self.repository.delete(id).await?;
        info!(task_id = id, "Deleted task");
        Ok(())
    }

    async fn find_existing(&self, id: TaskId) -> Result<Task> {
        match self.repository.find_by_id(id).await? {
            Some(task) => Ok(task),
            None => {
                debug!(task_id = id, "Task lookup missed");
                Err(Error::TaskNotFound(id))
            }
        }
    }
}
