//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stichting_core::roles::Role;
use stichting_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    /// Dutch name infix ("van", "de", ...), optional.
    pub tussenvoegsel: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub password_hash: String,
    pub must_change_password: bool,
    pub special_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub tussenvoegsel: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub must_change_password: bool,
    pub special_notes: Option<String>,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            tussenvoegsel: user.tussenvoegsel.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            must_change_password: user.must_change_password,
            special_notes: user.special_notes.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub first_name: String,
    pub tussenvoegsel: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub password_hash: String,
    pub must_change_password: bool,
    pub special_notes: Option<String>,
}

/// DTO for updating an existing user's profile. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub tussenvoegsel: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub special_notes: Option<String>,
}
