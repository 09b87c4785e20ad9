//! User domain type.

use serde::{Deserialize, Serialize};

use shopfront_core::{Role, UserId};

/// The signed-in storefront identity.
///
/// At most one exists at a time; it is created by login or registration
/// and dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (e.g., "admin-1").
    pub id: UserId,
    /// Email address used to sign in.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
}

impl User {
    /// Returns `true` if this user has the administrative role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
