//! Action dispatch for the task board's single `/tasks` endpoint.
//!
//! GET serves `list`, `get`, and `edit`; POST serves `insert`, `update`,
//! and `delete`. Validation failures render the error template with a
//! human-readable message instead of failing the request outright.

use super::error::WebError;
use super::routes::AppState;
use super::templates::TaskView;
use crate::task::{
    domain::{MemberId, PageRequest, ProjectId, TaskId, TaskPriority},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskBoardError, UpdateTaskRequest},
};
use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use mockable::Clock;
use serde::Deserialize;

use crate::task::ports::TaskRepository;

/// Page used when the `page` parameter is absent.
const DEFAULT_PAGE: u32 = 1;
/// Page length used when the `size` parameter is absent.
const DEFAULT_PAGE_SIZE: u32 = 5;

/// Query parameters accepted by GET actions.
#[derive(Debug, Deserialize)]
pub struct TaskQueryParams {
    action: Option<String>,
    #[serde(rename = "projectID")]
    project_id: Option<i32>,
    page: Option<u32>,
    size: Option<u32>,
    #[serde(rename = "taskId")]
    task_id: Option<i32>,
}

/// Form parameters accepted by POST actions.
#[derive(Debug, Deserialize)]
pub struct TaskFormParams {
    action: Option<String>,
    #[serde(rename = "taskId")]
    task_id: Option<i32>,
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    #[serde(rename = "dueDate")]
    due_date: Option<String>,
    #[serde(rename = "projectID")]
    project_id: Option<i32>,
    #[serde(rename = "memberId")]
    member_id: Option<i32>,
}

/// Dispatches read actions: `list`, `get`, and `edit`.
///
/// # Errors
///
/// Returns [`WebError::UnknownAction`] for a missing or unknown action and
/// [`WebError::Render`] when a template fails to render.
pub async fn dispatch_get<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<TaskQueryParams>,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let action = params.action.clone();
    match action.as_deref() {
        Some("list") => list_tasks(&state, &params).await,
        Some("get") => task_detail(&state, &params).await,
        Some("edit") => edit_task(&state, &params).await,
        _ => Err(WebError::UnknownAction(action)),
    }
}

/// Dispatches write actions: `insert`, `update`, and `delete`.
///
/// # Errors
///
/// Returns [`WebError::UnknownAction`] for a missing or unknown action and
/// [`WebError::Render`] when a template fails to render.
pub async fn dispatch_post<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<TaskFormParams>,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let action = form.action.clone();
    match action.as_deref() {
        Some("insert") => insert_task(&state, form).await,
        Some("update") => update_task(&state, form).await,
        Some("delete") => delete_task(&state, &form).await,
        _ => Err(WebError::UnknownAction(action)),
    }
}

async fn list_tasks<R, C>(
    state: &AppState<R, C>,
    params: &TaskQueryParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(project_id) = params.project_id else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required parameter projectID.",
        );
    };
    let project = ProjectId::new(project_id);
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);

    let window = match PageRequest::new(page, size) {
        Ok(window) => window,
        Err(err) => {
            return error_page(state, StatusCode::UNPROCESSABLE_ENTITY, &err.to_string());
        }
    };

    let listing = async {
        let tasks = state.service.project_tasks_page(project, window).await?;
        let total = state.service.project_task_count(project).await?;
        let pages = state.service.project_page_count(project, size).await?;
        Ok::<_, TaskBoardError>((tasks, total, pages))
    };
    let (tasks, total, pages) = match listing.await {
        Ok(listing) => listing,
        Err(err) => return board_error_page(state, &err),
    };

    let views: Vec<TaskView> = tasks.iter().map(TaskView::from_task).collect();
    let body = state.templates.render(
        "task_list.html",
        context! {
            tasks => views,
            project_id => project_id,
            current_page => page,
            total_pages => pages,
            total_tasks => total,
            size => size,
        },
    )?;
    Ok(Html(body).into_response())
}

async fn task_detail<R, C>(
    state: &AppState<R, C>,
    params: &TaskQueryParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    render_task_page(state, params, "task_detail.html").await
}

async fn edit_task<R, C>(
    state: &AppState<R, C>,
    params: &TaskQueryParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    render_task_page(state, params, "task_form.html").await
}

/// Renders a single-task page (`get` and `edit` share the lookup).
async fn render_task_page<R, C>(
    state: &AppState<R, C>,
    params: &TaskQueryParams,
    template: &str,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(task_id) = params.task_id else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required parameter taskId.",
        );
    };

    match state.service.get_task(TaskId::new(task_id)).await {
        Ok(Some(task)) => {
            let body = state.templates.render(
                template,
                context! {
                    task => TaskView::from_task(&task),
                    priorities => [
                        TaskPriority::Low.as_str(),
                        TaskPriority::Medium.as_str(),
                        TaskPriority::High.as_str(),
                    ],
                },
            )?;
            Ok(Html(body).into_response())
        }
        Ok(None) => error_page(
            state,
            StatusCode::NOT_FOUND,
            &format!("Task {task_id} was not found."),
        ),
        Err(err) => board_error_page(state, &err),
    }
}

async fn insert_task<R, C>(
    state: &AppState<R, C>,
    form: TaskFormParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(project_id) = form.project_id else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required parameter projectID.",
        );
    };
    let (Some(title), Some(priority), Some(due_date)) = (form.title, form.priority, form.due_date)
    else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required task fields: title, priority, and dueDate.",
        );
    };

    let mut request = CreateTaskRequest::new(title, priority, due_date, ProjectId::new(project_id));
    if let Some(description) = form.description {
        request = request.with_description(description);
    }
    if let Some(member_id) = form.member_id {
        request = request.with_assignee(MemberId::new(member_id));
    }

    match state.service.create_task(request).await {
        Ok(id) => {
            tracing::info!(task = %id, project = project_id, "task created");
            Ok(Redirect::to(&listing_path(project_id)).into_response())
        }
        Err(err) => board_error_page(state, &err),
    }
}

async fn update_task<R, C>(
    state: &AppState<R, C>,
    form: TaskFormParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(task_id) = form.task_id else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required parameter taskId.",
        );
    };
    let (Some(title), Some(priority), Some(due_date)) = (form.title, form.priority, form.due_date)
    else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required task fields: title, priority, and dueDate.",
        );
    };

    let mut request = UpdateTaskRequest::new(title, priority, due_date);
    if let Some(description) = form.description {
        request = request.with_description(description);
    }
    if let Some(member_id) = form.member_id {
        request = request.with_assignee(MemberId::new(member_id));
    }

    match state.service.update_task(TaskId::new(task_id), request).await {
        Ok(task) => {
            tracing::info!(task = %task.id, "task updated");
            Ok(Redirect::to(&listing_path(task.project.id.into_inner())).into_response())
        }
        Err(err) => board_error_page(state, &err),
    }
}

async fn delete_task<R, C>(
    state: &AppState<R, C>,
    form: &TaskFormParams,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (Some(task_id), Some(project_id)) = (form.task_id, form.project_id) else {
        return error_page(
            state,
            StatusCode::BAD_REQUEST,
            "Missing required parameters taskId and projectID.",
        );
    };

    match state.service.delete_task(TaskId::new(task_id)).await {
        Ok(()) => {
            tracing::info!(task = task_id, "task deleted");
            Ok(Redirect::to(&listing_path(project_id)).into_response())
        }
        Err(err) => board_error_page(state, &err),
    }
}

fn listing_path(project_id: i32) -> String {
    format!("/tasks?action=list&projectID={project_id}")
}

/// Renders the error template with the given status.
fn error_page<R, C>(
    state: &AppState<R, C>,
    status: StatusCode,
    message: &str,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let body = state.templates.render(
        "error.html",
        context! {
            status => status.as_u16(),
            message => message,
        },
    )?;
    Ok((status, Html(body)).into_response())
}

/// Maps a service error onto the error template.
fn board_error_page<R, C>(
    state: &AppState<R, C>,
    err: &TaskBoardError,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let status = match err {
        TaskBoardError::Domain(_)
        | TaskBoardError::Repository(
            TaskRepositoryError::UnknownProject(_) | TaskRepositoryError::UnknownMember(_),
        ) => StatusCode::UNPROCESSABLE_ENTITY,
        TaskBoardError::Repository(TaskRepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        TaskBoardError::Repository(TaskRepositoryError::Persistence(_)) => {
            tracing::error!(error = %err, "task board storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_page(state, status, &err.to_string())
}
