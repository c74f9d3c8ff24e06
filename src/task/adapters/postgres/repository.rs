//! `PostgreSQL` repository implementation for task board storage.

use super::{
    models::{MemberRow, NewTaskRow, ProjectRow, TaskRow},
    schema::{members, projects, tasks},
};
use crate::task::{
    domain::{
        Member, MemberId, NewTask, PageRequest, Project, ProjectId, Task, TaskChanges, TaskId,
        TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Joined row shape produced by resolved task queries.
type ResolvedRow = (TaskRow, ProjectRow, Option<MemberRow>);

/// `PostgreSQL`-backed task repository.
///
/// Each operation takes a connection from the pool for its own scope, so
/// concurrent requests never share a connection.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let project = task.project;
        let assignee = task.assignee;
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i32>(connection)
                .map_err(|err| map_reference_error(err, Some(project), assignee))?;
            Ok(TaskId::new(id))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .inner_join(projects::table)
                .left_join(members::table)
                .select(resolved_columns())
                .filter(tasks::id.eq(id.into_inner()))
                .first::<ResolvedRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<()> {
        let assignee = changes.assignee;
        let changed = changes.clone();

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set((
                    tasks::title.eq(changed.title.as_str().to_owned()),
                    tasks::description.eq(changed.description.clone()),
                    tasks::priority.eq(changed.priority.as_str().to_owned()),
                    tasks::due_on.eq(changed.due_on),
                    tasks::member_id.eq(changed.assignee.map(MemberId::into_inner)),
                ))
                .execute(connection)
                .map_err(|err| map_reference_error(err, None, assignee))?;

            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Zero affected rows is fine: delete is idempotent.
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(projects::table)
                .left_join(members::table)
                .select(resolved_columns())
                .order(tasks::id.asc())
                .load::<ResolvedRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_for_project(
        &self,
        project: ProjectId,
        window: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(projects::table)
                .left_join(members::table)
                .select(resolved_columns())
                .filter(tasks::project_id.eq(project.into_inner()))
                .order(tasks::id.asc())
                .offset(window.offset())
                .limit(window.limit())
                .load::<ResolvedRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_for_project(&self, project: ProjectId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let total = tasks::table
                .filter(tasks::project_id.eq(project.into_inner()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// Select clause resolving a task together with its project and assignee.
fn resolved_columns() -> (
    diesel::dsl::AsSelect<TaskRow, diesel::pg::Pg>,
    diesel::dsl::AsSelect<ProjectRow, diesel::pg::Pg>,
    diesel::dsl::AsSelect<Option<MemberRow>, diesel::pg::Pg>,
) {
    (
        TaskRow::as_select(),
        ProjectRow::as_select(),
        Option::<MemberRow>::as_select(),
    )
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: task.title.as_str().to_owned(),
        description: task.description.clone(),
        priority: task.priority.as_str().to_owned(),
        status: task.status.as_str().to_owned(),
        created_on: task.created_on,
        due_on: task.due_on,
        project_id: task.project.into_inner(),
        member_id: task.assignee.map(MemberId::into_inner),
    }
}

fn row_to_task(row: ResolvedRow) -> TaskRepositoryResult<Task> {
    let (task_row, project_row, member_row) = row;

    let title = TaskTitle::new(task_row.title).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(task_row.priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(task_row.status.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task {
        id: TaskId::new(task_row.id),
        title,
        description: task_row.description,
        priority,
        status,
        created_on: task_row.created_on,
        due_on: task_row.due_on,
        project: Project {
            id: ProjectId::new(project_row.id),
            name: project_row.name,
        },
        assignee: member_row.map(|member| Member {
            id: MemberId::new(member.id),
            name: member.name,
        }),
    })
}

/// Maps foreign-key violations on writes to their collaborator error.
fn map_reference_error(
    err: DieselError,
    project: Option<ProjectId>,
    assignee: Option<MemberId>,
) -> TaskRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) = &err {
        if let Some(project_id) = project
            && is_constraint(info.as_ref(), "tasks_project_id_fkey")
        {
            return TaskRepositoryError::UnknownProject(project_id);
        }
        if let Some(member_id) = assignee
            && is_constraint(info.as_ref(), "tasks_member_id_fkey")
        {
            return TaskRepositoryError::UnknownMember(member_id);
        }
    }
    TaskRepositoryError::persistence(err)
}

fn is_constraint(info: &dyn DatabaseErrorInformation, name: &str) -> bool {
    info.constraint_name().is_some_and(|found| found == name)
}
