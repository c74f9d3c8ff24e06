//! Template rendering for the task board web surface.

use crate::task::domain::{DUE_DATE_FORMAT, Task};
use minijinja::Environment;
use serde::Serialize;

/// Template environment with the board's pages registered at startup.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Creates the environment and registers the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when an embedded template fails to
    /// parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("task_list.html", include_str!("../../templates/task_list.html"))?;
        env.add_template(
            "task_detail.html",
            include_str!("../../templates/task_detail.html"),
        )?;
        env.add_template("task_form.html", include_str!("../../templates/task_form.html"))?;
        env.add_template("error.html", include_str!("../../templates/error.html"))?;
        Ok(Self { env })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the template is unknown or
    /// rendering fails.
    pub fn render(&self, name: &str, ctx: impl Serialize) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// Render model for one task, with dates formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority in canonical form.
    pub priority: &'static str,
    /// Status in canonical form.
    pub status: &'static str,
    /// Creation date in `MM/DD/YYYY` form.
    pub created_on: String,
    /// Due date in `MM/DD/YYYY` form.
    pub due_on: String,
    /// Owning project identifier.
    pub project_id: i32,
    /// Owning project name.
    pub project_name: String,
    /// Assigned member name, if any.
    pub assignee: Option<String>,
}

impl TaskView {
    /// Builds a render model from a resolved task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.into_inner(),
            title: task.title.as_str().to_owned(),
            description: task.description.clone(),
            priority: task.priority.as_str(),
            status: task.status.as_str(),
            created_on: task.created_on.format(DUE_DATE_FORMAT).to_string(),
            due_on: task.due_on.format(DUE_DATE_FORMAT).to_string(),
            project_id: task.project.id.into_inner(),
            project_name: task.project.name.clone(),
            assignee: task.assignee.as_ref().map(|member| member.name.clone()),
        }
    }
}
