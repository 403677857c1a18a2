//! Well-known role names carried in the session `role` claim.
//!
//! A session without a role claim is treated as [`ROLE_MEMBER`].

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

/// Returns `true` if the role string names the admin role.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_is_recognised() {
        assert!(is_admin(ROLE_ADMIN));
    }

    #[test]
    fn member_and_unknown_roles_are_not_admin() {
        assert!(!is_admin(ROLE_MEMBER));
        assert!(!is_admin("Admin"));
        assert!(!is_admin(""));
    }
}
