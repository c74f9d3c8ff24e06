//! End-to-end tests for the task board web surface.
//!
//! These tests drive the router directly over the in-memory adapter,
//! covering action dispatch, pagination defaults, redirect-after-write, and
//! the rendered error paths.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use eyre::Result;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::domain::{Member, MemberId, Project, ProjectId};
use taskboard::task::services::TaskBoardService;
use taskboard::web::{AppState, TemplateEngine, router};
use tower::ServiceExt;

fn board_router() -> Result<Router> {
    let repository = Arc::new(InMemoryTaskRepository::with_collaborators(
        [Project {
            id: ProjectId::new(1),
            name: "Apollo".to_owned(),
        }],
        [Member {
            id: MemberId::new(1),
            name: "alice".to_owned(),
        }],
    ));
    let service = Arc::new(TaskBoardService::new(repository, Arc::new(DefaultClock)));
    let templates = Arc::new(TemplateEngine::new()?);
    Ok(router(AppState::new(service, templates)))
}

async fn get(app: &Router, uri: &str) -> Result<(StatusCode, String)> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    into_parts(response).await
}

async fn post_form(app: &Router, form: &str) -> Result<Response> {
    let request = Request::builder()
        .method("POST")
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))?;
    Ok(app.clone().oneshot(request).await?)
}

async fn into_parts(response: Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(bytes.to_vec())?))
}

fn insert_form(title: &str, due_date: &str) -> String {
    format!("action=insert&title={title}&priority=high&dueDate={due_date}&projectID=1")
}

#[tokio::test(flavor = "multi_thread")]
async fn list_uses_default_page_and_size() -> Result<()> {
    let app = board_router()?;
    for index in 1..=7 {
        let response = post_form(&app, &insert_form(&format!("Job {index}"), "12/31/2026")).await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let (status, body) = get(&app, "/tasks?action=list&projectID=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("7 task(s), page 1 of 2"));
    assert!(body.contains("Job 5"));
    assert!(!body.contains("Job 6"));

    let (status, body) = get(&app, "/tasks?action=list&projectID=1&page=2&size=5").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Job 6"));
    assert!(body.contains("Job 7"));
    assert!(!body.contains("Job 5"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_requires_a_project() -> Result<()> {
    let app = board_router()?;
    let (status, body) = get(&app, "/tasks?action=list").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("projectID"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_rejects_zero_size() -> Result<()> {
    let app = board_router()?;
    let (status, body) = get(&app, "/tasks?action=list&projectID=1&size=0").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("page size"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_or_missing_action_is_a_bad_request() -> Result<()> {
    let app = board_router()?;

    let (status, _) = get(&app, "/tasks?action=explode").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/tasks").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response = post_form(&app, "action=explode").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_redirects_to_the_project_listing() -> Result<()> {
    let app = board_router()?;

    let response = post_form(
        &app,
        "action=insert&title=Write spec&description=Listing contract&priority=HIGH&dueDate=12/31/2025&projectID=1&memberId=1",
    )
    .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a location")
        .to_str()?;
    assert_eq!(location, "/tasks?action=list&projectID=1");

    let (status, body) = get(&app, "/tasks?action=list&projectID=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Write spec"));
    assert!(body.contains("alice"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_with_malformed_due_date_renders_the_error_page() -> Result<()> {
    let app = board_router()?;

    let response = post_form(&app, &insert_form("Bad date", "13/40/2024")).await?;
    let (status, body) = into_parts(response).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("invalid due date"));

    let (_, listing) = get(&app, "/tasks?action=list&projectID=1").await?;
    assert!(listing.contains("0 task(s)"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_with_blank_title_renders_the_error_page() -> Result<()> {
    let app = board_router()?;

    let response = post_form(&app, &insert_form("+++", "12/31/2025")).await?;
    let (status, body) = into_parts(response).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("title must not be empty"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_changes_the_rendered_detail() -> Result<()> {
    let app = board_router()?;
    post_form(&app, &insert_form("Original", "12/31/2025")).await?;

    let response = post_form(
        &app,
        "action=update&taskId=1&title=Renamed&priority=low&dueDate=01/15/2026",
    )
    .await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (status, body) = get(&app, "/tasks?action=get&taskId=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Renamed"));
    assert!(body.contains("01/15/2026"));
    assert!(body.contains("low"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_renders_a_prefilled_form() -> Result<()> {
    let app = board_router()?;
    post_form(&app, &insert_form("Editable", "12/31/2025")).await?;

    let (status, body) = get(&app, "/tasks?action=edit&taskId=1").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"Editable\""));
    assert!(body.contains("name=\"dueDate\" value=\"12/31/2025\""));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_task_pages_render_not_found() -> Result<()> {
    let app = board_router()?;

    let (status, _) = get(&app, "/tasks?action=get&taskId=42").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/tasks?action=edit&taskId=42").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent_over_http() -> Result<()> {
    let app = board_router()?;
    post_form(&app, &insert_form("Victim", "12/31/2025")).await?;

    let response = post_form(&app, "action=delete&taskId=1&projectID=1").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Deleting the same task again, or one that never existed, still
    // redirects back to the listing.
    let response = post_form(&app, "action=delete&taskId=1&projectID=1").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let response = post_form(&app, "action=delete&taskId=99&projectID=1").await?;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, listing) = get(&app, "/tasks?action=list&projectID=1").await?;
    assert!(listing.contains("0 task(s)"));
    Ok(())
}
