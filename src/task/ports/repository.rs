//! Repository port for task persistence and project-scoped listing.

use crate::task::domain::{MemberId, NewTask, PageRequest, ProjectId, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task row and returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownProject`] or
    /// [`TaskRepositoryError::UnknownMember`] when a referenced collaborator
    /// does not exist.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId>;

    /// Fetches one task by identifier, with project and member resolved.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Overwrites the mutable fields of an existing task row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist, or [`TaskRepositoryError::UnknownMember`] when the new
    /// assignee does not exist.
    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<()>;

    /// Removes the task row.
    ///
    /// Deleting an identifier with no matching row succeeds and changes
    /// nothing.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task, fully resolved, ordered by identifier.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns one page of a project's tasks, ordered by identifier.
    async fn list_for_project(
        &self,
        project: ProjectId,
        window: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the number of tasks belonging to a project.
    async fn count_for_project(&self, project: ProjectId) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The referenced project does not exist.
    #[error("unknown project: {0}")]
    UnknownProject(ProjectId),

    /// The referenced member does not exist.
    #[error("unknown member: {0}")]
    UnknownMember(MemberId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
