//! Service layer for task creation, mutation, and project-scoped listing.

use crate::task::{
    domain::{
        MemberId, NewTask, PageRequest, ProjectId, Task, TaskChanges, TaskDomainError, TaskId,
        TaskPriority, TaskStatus, TaskTitle, page_count, parse_due_date,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Priority and due date arrive as raw boundary strings and are validated by
/// the service, not the constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: String,
    due_date: String,
    project: ProjectId,
    assignee: Option<MemberId>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
        project: ProjectId,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: priority.into(),
            due_date: due_date.into(),
            project,
            assignee: None,
        }
    }

    /// Sets the task description. Blank values are treated as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Assigns a member to the task.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Request payload for updating a task's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    priority: String,
    due_date: String,
    assignee: Option<MemberId>,
}

impl UpdateTaskRequest {
    /// Creates a request with required replacement fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: priority.into(),
            due_date: due_date.into(),
            assignee: None,
        }
    }

    /// Sets the replacement description. Blank values are treated as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Reassigns the task to a member.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed; storage was not touched.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new task, returning its assigned identifier.
    ///
    /// New tasks always start in [`TaskStatus::ToDo`] with the creation date
    /// taken from the injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is empty, the
    /// priority is unknown, or the due date does not parse; in those cases
    /// nothing is written. Returns [`TaskBoardError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<TaskId> {
        let title = TaskTitle::new(request.title)?;
        let priority = TaskPriority::try_from(request.priority.as_str())?;
        let due_on = parse_due_date(&request.due_date)?;

        let new_task = NewTask {
            title,
            description: request.description,
            priority,
            status: TaskStatus::ToDo,
            created_on: self.clock.utc().date_naive(),
            due_on,
            project: request.project,
            assignee: request.assignee,
        };
        let id = self.repository.create(&new_task).await?;
        Ok(id)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates replacement fields and merges them into an existing task.
    ///
    /// Status, creation date, and owning project keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] on invalid replacement fields and
    /// [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let changes = TaskChanges {
            title: TaskTitle::new(request.title)?,
            description: request.description,
            priority: TaskPriority::try_from(request.priority.as_str())?,
            due_on: parse_due_date(&request.due_date)?,
            assignee: request.assignee,
        };
        self.repository.update(existing.id, &changes).await?;

        let updated = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(updated)
    }

    /// Removes a task. Removing an unknown identifier succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Returns every task, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns one page of a project's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails.
    pub async fn project_tasks_page(
        &self,
        project: ProjectId,
        window: PageRequest,
    ) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list_for_project(project, window).await?)
    }

    /// Returns the number of tasks belonging to a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails.
    pub async fn project_task_count(&self, project: ProjectId) -> TaskBoardResult<u64> {
        Ok(self.repository.count_for_project(project).await?)
    }

    /// Returns the number of pages needed to list a project at `size` tasks
    /// per page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when `size` is zero and
    /// [`TaskBoardError::Repository`] when the count query fails.
    pub async fn project_page_count(&self, project: ProjectId, size: u32) -> TaskBoardResult<u64> {
        let total = self.repository.count_for_project(project).await?;
        Ok(page_count(total, size)?)
    }
}
