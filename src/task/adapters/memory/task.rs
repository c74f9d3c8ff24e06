//! In-memory repository for task board tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Member, MemberId, NewTask, PageRequest, Project, ProjectId, Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository with seeded collaborator tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    next_id: i32,
    tasks: BTreeMap<TaskId, NewTask>,
    projects: HashMap<ProjectId, Project>,
    members: HashMap<MemberId, Member>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository with no known collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given projects and members.
    #[must_use]
    pub fn with_collaborators(
        projects: impl IntoIterator<Item = Project>,
        members: impl IntoIterator<Item = Member>,
    ) -> Self {
        let state = InMemoryBoardState {
            next_id: 0,
            tasks: BTreeMap::new(),
            projects: projects
                .into_iter()
                .map(|project| (project.id, project))
                .collect(),
            members: members.into_iter().map(|member| (member.id, member)).collect(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

/// Resolves a stored record against the collaborator tables.
fn resolve(state: &InMemoryBoardState, id: TaskId, record: &NewTask) -> TaskRepositoryResult<Task> {
    let project = state.projects.get(&record.project).cloned().ok_or_else(|| {
        TaskRepositoryError::persistence(std::io::Error::other(format!(
            "stored task {id} references missing project {}",
            record.project
        )))
    })?;
    let assignee = match record.assignee {
        Some(member_id) => Some(state.members.get(&member_id).cloned().ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(format!(
                "stored task {id} references missing member {member_id}"
            )))
        })?),
        None => None,
    };

    Ok(Task {
        id,
        title: record.title.clone(),
        description: record.description.clone(),
        priority: record.priority,
        status: record.status,
        created_on: record.created_on,
        due_on: record.due_on,
        project,
        assignee,
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.projects.contains_key(&task.project) {
            return Err(TaskRepositoryError::UnknownProject(task.project));
        }
        if let Some(member_id) = task.assignee
            && !state.members.contains_key(&member_id)
        {
            return Err(TaskRepositoryError::UnknownMember(member_id));
        }

        state.next_id += 1;
        let id = TaskId::new(state.next_id);
        state.tasks.insert(id, task.clone());
        Ok(id)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .tasks
            .get(&id)
            .map(|record| resolve(&state, id, record))
            .transpose()
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.tasks.contains_key(&id) {
            return Err(TaskRepositoryError::NotFound(id));
        }
        if let Some(member_id) = changes.assignee
            && !state.members.contains_key(&member_id)
        {
            return Err(TaskRepositoryError::UnknownMember(member_id));
        }

        if let Some(record) = state.tasks.get_mut(&id) {
            record.title = changes.title.clone();
            record.description = changes.description.clone();
            record.priority = changes.priority;
            record.due_on = changes.due_on;
            record.assignee = changes.assignee;
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Removing an absent identifier is fine: delete is idempotent.
        state.tasks.remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .tasks
            .iter()
            .map(|(id, record)| resolve(&state, *id, record))
            .collect()
    }

    async fn list_for_project(
        &self,
        project: ProjectId,
        window: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let skip =
            usize::try_from(window.offset()).map_err(TaskRepositoryError::persistence)?;
        let take = usize::try_from(window.limit()).map_err(TaskRepositoryError::persistence)?;

        state
            .tasks
            .iter()
            .filter(|(_, record)| record.project == project)
            .skip(skip)
            .take(take)
            .map(|(id, record)| resolve(&state, *id, record))
            .collect()
    }

    async fn count_for_project(&self, project: ProjectId) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let count = state
            .tasks
            .values()
            .filter(|record| record.project == project)
            .count();
        u64::try_from(count).map_err(TaskRepositoryError::persistence)
    }
}
