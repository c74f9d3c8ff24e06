//! Diesel row models for task board persistence.

use super::schema::{members, projects, tasks};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Urgency level.
    pub priority: String,
    /// Progress state.
    pub status: String,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Due date.
    pub due_on: NaiveDate,
    /// Owning project.
    pub project_id: i32,
    /// Assigned member, if any.
    pub member_id: Option<i32>,
}

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: i32,
    /// Project display name.
    pub name: String,
}

/// Query result row for member records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    /// Member identifier.
    pub id: i32,
    /// Member display name.
    pub name: String,
}

/// Insert model for task records. The `id` column is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Urgency level.
    pub priority: String,
    /// Progress state.
    pub status: String,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Due date.
    pub due_on: NaiveDate,
    /// Owning project.
    pub project_id: i32,
    /// Assigned member, if any.
    pub member_id: Option<i32>,
}
