//! In-memory task storage implementation
//!
//! Keeps tasks in insertion order for the lifetime of the store. Nothing is
//! written anywhere else, so the data is gone once the store is dropped.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Task, TaskId};
use super::repository::TaskRepository;
use crate::{Error, Result};

const FIRST_ID: TaskId = 1;

/// Tasks and the id counter live behind the same lock so that id
/// allocation and writes are serialized together.
struct StoreState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

/// In-memory task store
pub struct InMemoryTaskStore {
    state: RwLock<StoreState>,
}

impl InMemoryTaskStore {
    /// Create an empty store whose first allocated id is 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Create a store pre-populated with tasks.
    ///
    /// Id allocation resumes after the highest seeded id. Tasks without an id
    /// or with a repeated id are rejected.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self> {
        let mut seeded: Vec<Task> = Vec::new();
        for task in tasks {
            if !task.has_id() {
                return Err(Error::InvalidArgument(
                    "Seeded task must carry an id".to_string(),
                ));
            }
            if seeded.iter().any(|t| t.id == task.id) {
                return Err(Error::InvalidArgument(format!(
                    "Task with ID {} already exists",
                    task.id
                )));
            }
            seeded.push(task);
        }

        let next_id = seeded
            .iter()
            .map(|t| t.id.saturating_add(1))
            .max()
            .unwrap_or(FIRST_ID)
            .max(FIRST_ID);

        Ok(Self {
            state: RwLock::new(StoreState {
                tasks: seeded,
                next_id,
            }),
        })
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn find_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn save(&self, task: Task) -> Result<()> {
        if !task.has_id() {
            return Err(Error::InvalidArgument(
                "Task must have an id before it is saved".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if state.tasks.iter().any(|t| t.id == task.id) {
            return Err(Error::InvalidArgument(format!(
                "Task with ID {} already exists",
                task.id
            )));
        }
        state.tasks.push(task);
        Ok(())
    }

    async fn update(&self, task: Task) -> Result<()> {
        if !task.has_id() {
            return Err(Error::InvalidArgument(
                "Task must have an id to be updated".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        match state.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(Error::NotFound(task.id)),
        }
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        let mut state = self.state.write().await;
        let position = state
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;
        // Vec::remove shifts the tail, keeping the remaining order intact.
        state.tasks.remove(position);
        Ok(())
    }

    async fn next_id(&self) -> Result<TaskId> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::Storage("Task id space exhausted".to_string()))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn task(id: TaskId, description: &str) -> Task {
        Task {
            id,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_next_id_starts_at_one_and_increments() {
        let store = InMemoryTaskStore::new();

        assert_eq!(store.next_id().await.unwrap(), 1);
        assert_eq!(store.next_id().await.unwrap(), 2);
        assert_eq!(store.next_id().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryTaskStore::new();
        let id = store.next_id().await.unwrap();
        store.save(task(id, "Test task")).await.unwrap();

        let retrieved = store.find_by_id(id).await.unwrap();
        assert_eq!(retrieved, Some(task(id, "Test task")));

        // Missing ids are a normal outcome, not an error
        let missing = store.find_by_id(42).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryTaskStore::new();
        store.save(task(3, "Task 3")).await.unwrap();
        store.save(task(1, "Task 1")).await.unwrap();
        store.save(task(2, "Task 2")).await.unwrap();

        let ids: Vec<TaskId> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_save_without_id_is_rejected() {
        let store = InMemoryTaskStore::new();

        let result = store.save(Task::new("no id")).await;
        match result.unwrap_err() {
            Error::InvalidArgument(_) => {}
            e => panic!("Expected InvalidArgument error, got: {:?}", e),
        }
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let store = InMemoryTaskStore::new();
        store.save(task(1, "first")).await.unwrap();

        let result = store.save(task(1, "second")).await;
        match result.unwrap_err() {
            Error::InvalidArgument(msg) => assert!(msg.contains("already exists")),
            e => panic!("Expected InvalidArgument error, got: {:?}", e),
        }
        assert_eq!(store.find_all().await.unwrap(), vec![task(1, "first")]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = InMemoryTaskStore::new();
        store.save(task(1, "A")).await.unwrap();
        store.save(task(2, "B")).await.unwrap();

        store.update(task(1, "A2")).await.unwrap();

        assert_eq!(
            store.find_all().await.unwrap(),
            vec![task(1, "A2"), task(2, "B")]
        );
    }

    #[tokio::test]
    async fn test_update_nonexistent_task() {
        let store = InMemoryTaskStore::new();
        store.save(task(1, "A")).await.unwrap();

        let result = store.update(task(9, "ghost")).await;
        assert_eq!(result.unwrap_err(), Error::NotFound(9));
        assert_eq!(store.find_all().await.unwrap(), vec![task(1, "A")]);
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected() {
        let store = InMemoryTaskStore::new();

        let result = store.update(Task::new("no id")).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let store = InMemoryTaskStore::new();
        store.save(task(1, "A")).await.unwrap();
        store.save(task(2, "B")).await.unwrap();
        store.save(task(3, "C")).await.unwrap();

        store.delete(2).await.unwrap();
        assert_eq!(
            store.find_all().await.unwrap(),
            vec![task(1, "A"), task(3, "C")]
        );

        // Delete again should report the missing id
        assert_eq!(store.delete(2).await.unwrap_err(), Error::NotFound(2));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryTaskStore::new();
        let first = store.next_id().await.unwrap();
        store.save(task(first, "A")).await.unwrap();
        store.delete(first).await.unwrap();

        let second = store.next_id().await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_with_tasks_resumes_after_highest_id() {
        let store = InMemoryTaskStore::with_tasks(vec![task(4, "four"), task(2, "two")]).unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 2);
        assert_eq!(store.next_id().await.unwrap(), 5);
    }

    #[test]
    fn test_with_tasks_rejects_bad_seeds() {
        assert!(matches!(
            InMemoryTaskStore::with_tasks(vec![Task::new("no id")]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            InMemoryTaskStore::with_tasks(vec![task(1, "a"), task(1, "b")]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_id_allocation_is_unique() {
        let store = Arc::new(InMemoryTaskStore::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.next_id().await.unwrap() })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<TaskId>>());
    }
}
