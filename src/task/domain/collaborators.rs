//! External collaborator snapshots resolved alongside task records.

use super::{MemberId, ProjectId};
use serde::{Deserialize, Serialize};

/// Project that owns a set of tasks, as resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// Project display name.
    pub name: String,
}

/// Member optionally assigned to a task, as resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member identifier.
    pub id: MemberId,
    /// Member display name.
    pub name: String,
}
