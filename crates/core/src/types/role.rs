//! Account roles.

use serde::{Deserialize, Serialize};

/// Storefront account role.
///
/// The set is closed: every signed-in identity is either a shopper or an
/// administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Standard shopper account.
    #[default]
    User,
    /// Store administrator with dashboard access.
    Admin,
}

impl Role {
    /// Returns `true` for the administrative role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}
