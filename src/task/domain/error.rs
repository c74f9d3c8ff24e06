//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is unsupported.
    #[error("unsupported task priority: {0}")]
    InvalidPriority(String),

    /// The status value is unsupported.
    #[error("unsupported task status: {0}")]
    InvalidStatus(String),

    /// The due date does not parse as a calendar date.
    #[error("invalid due date '{0}', expected MM/DD/YYYY")]
    InvalidDueDate(String),

    /// The page number is invalid.
    #[error("invalid page number {0}, expected a positive integer")]
    InvalidPageNumber(u32),

    /// The page size is invalid.
    #[error("invalid page size {0}, expected a positive integer")]
    InvalidPageSize(u32),
}
