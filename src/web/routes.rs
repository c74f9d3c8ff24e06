//! Router and shared application state for the task board web surface.

use super::handlers;
use super::templates::TemplateEngine;
use crate::task::{ports::TaskRepository, services::TaskBoardService};
use axum::Router;
use axum::routing::get;
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by all request handlers.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    pub(crate) service: Arc<TaskBoardService<R, C>>,
    pub(crate) templates: Arc<TemplateEngine>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates application state from a service and template engine.
    #[must_use]
    pub const fn new(service: Arc<TaskBoardService<R, C>>, templates: Arc<TemplateEngine>) -> Self {
        Self { service, templates }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            templates: Arc::clone(&self.templates),
        }
    }
}

/// Builds the task board router.
///
/// A single `/tasks` route dispatches on the `action` parameter, GET for
/// reads and POST for writes.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(handlers::dispatch_get::<R, C>).post(handlers::dispatch_post::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
