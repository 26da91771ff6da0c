//! Role name constants and helpers.
//!
//! Roles are stored as plain strings on the `users` table and embedded in
//! JWT claims. The API layer enforces them via extractors; repositories
//! never check roles themselves.

/// Full administrative access: user management, all cases.
pub const ROLE_ADMIN: &str = "admin";

/// Staff members handle cases and exchange opinions.
pub const ROLE_STAFF: &str = "staff";

/// Client users see only cases belonging to their organization.
pub const ROLE_CLIENT: &str = "client";

/// All valid role names.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STAFF, ROLE_CLIENT];

/// Check whether a role name is one of the known roles.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}

/// Staff-level access: staff or admin.
pub fn is_staff_or_admin(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_STAFF
}
