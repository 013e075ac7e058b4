//! The closed user role enumeration.
//!
//! Exactly two roles exist, and every authorization decision in the system
//! matches on this enum exhaustively. The variants map to the PostgreSQL
//! `user_role` enum created in `20260301000001_create_users_table.sql`.

use serde::{Deserialize, Serialize};

/// A user's role. Controls all authorization decisions system-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access, including user management and outing administration.
    Admin,
    /// Regular member: may view outings, enrol, cancel, and upload files.
    User,
}

impl Role {
    /// The wire/database representation (`"ADMIN"` or `"USER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// True for [`Role::Admin`], false for [`Role::User`].
    pub fn is_admin(self) -> bool {
        match self {
            Role::Admin => true,
            Role::User => false,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
