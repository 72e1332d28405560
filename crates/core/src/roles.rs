//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the
//! `create_users_table` migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
pub const ROLE_MEMBER: &str = "member";

/// All assignable role names, used to validate role-change requests.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER, ROLE_MEMBER];

/// Whether `role` is one of the known role names.
pub fn is_known_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
