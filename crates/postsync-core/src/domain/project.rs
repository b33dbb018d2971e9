//! Project records displayed in the menu-bar list.
//!
//! A project is a Final Cut Pro library that a user has checked out from the
//! server.  There is no backing store yet: the menu shows the fixed records
//! returned by [`sample_projects`] until the check-out engine exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a project row.
pub type ProjectId = Uuid;

/// One checked-out project as shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Library name, also used as the repository name on the server.
    pub name: String,
    /// Human-readable age of the last autosave checkpoint (e.g. `"2 hours ago"`).
    pub last_checkpoint: String,
    /// User who holds the check-out.
    pub checked_out_by: String,
}

impl Project {
    /// Creates a project with a fresh random id.
    pub fn new(
        name: impl Into<String>,
        last_checkpoint: impl Into<String>,
        checked_out_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_checkpoint: last_checkpoint.into(),
            checked_out_by: checked_out_by.into(),
        }
    }
}

/// Placeholder rows shown in the menu.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("Wedding_2024_Johnson", "2 hours ago", "scott"),
        Project::new("Corporate_Video_Q4", "1 day ago", "alex"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_projects_has_two_rows() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Wedding_2024_Johnson");
        assert_eq!(projects[0].checked_out_by, "scott");
        assert_eq!(projects[1].name, "Corporate_Video_Q4");
        assert_eq!(projects[1].last_checkpoint, "1 day ago");
    }

    #[test]
    fn test_new_projects_get_distinct_ids() {
        let a = Project::new("a", "now", "u");
        let b = Project::new("a", "now", "u");
        assert_ne!(a.id, b.id);
    }
}
