//! Web surface for the task board.
//!
//! A single `/tasks` endpoint dispatches on the `action` request parameter,
//! mirroring the form-driven interface the board serves: `list`, `get`, and
//! `edit` over GET; `insert`, `update`, and `delete` over POST. Pages are
//! rendered with minijinja templates embedded in the binary.

pub mod error;
mod handlers;
pub mod routes;
pub mod templates;

pub use error::WebError;
pub use routes::{AppState, router};
pub use templates::{TaskView, TemplateEngine};
