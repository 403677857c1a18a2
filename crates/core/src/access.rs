//! Project visibility and edit rules.
//!
//! Ownership is keyed by the session's display name (`createdBy`), and team
//! membership by the same name string.

use crate::roles::is_admin;

/// A project is visible to a user who created it or is on its team.
pub fn is_visible_to(created_by: &str, team_members: &[String], user: &str) -> bool {
    created_by == user || team_members.iter().any(|m| m == user)
}

/// The creator and admins may edit a project. Only consulted when the edit
/// guard is enabled.
pub fn can_edit(created_by: &str, user: &str, role: &str) -> bool {
    created_by == user || is_admin(role)
}
