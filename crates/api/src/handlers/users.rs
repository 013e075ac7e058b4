//! Handlers for the `/users` resource (member administration).
//!
//! Listing, creation, and password resets require the admin role via
//! [`RequireAdmin`]; profile updates follow a self-or-admin rule.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use stichting_core::error::CoreError;
use stichting_core::roles::Role;
use stichting_core::types::DbId;
use stichting_db::models::user::{CreateUser, UpdateUser, UserResponse};
use stichting_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Initial password assigned on creation and reset. Members must change
/// it on first login (`must_change_password`).
const DEFAULT_PASSWORD: &str = "1234";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub tussenvoegsel: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: Role,
    pub special_notes: Option<String>,
}

fn default_role() -> Role {
    Role::User
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub tussenvoegsel: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub special_notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users
///
/// List all users ordered by id, projected without password hashes.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/users
///
/// Create a new member with the default password and the must-change flag
/// set, returning the safe projection with 201 Created.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if input.username.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username is required".into(),
        )));
    }

    let hashed = hash_password(DEFAULT_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        first_name: input.first_name,
        tussenvoegsel: input.tussenvoegsel,
        last_name: input.last_name,
        phone: input.phone,
        role: input.role,
        password_hash: hashed,
        must_change_password: true,
        special_notes: input.special_notes,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /api/users/{id}
///
/// Update a member's profile. Admins may update anyone; regular users may
/// only update themselves and may not change their own role.
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if !auth_user.role.is_admin() {
        if auth_user.user_id != id {
            return Err(AppError::Core(CoreError::Forbidden(
                "You can only update your own profile".into(),
            )));
        }
        if input.role.is_some() {
            return Err(AppError::Core(CoreError::Forbidden(
                "You cannot change your own role".into(),
            )));
        }
    }

    let update_dto = UpdateUser {
        username: input.username,
        first_name: input.first_name,
        tussenvoegsel: input.tussenvoegsel,
        last_name: input.last_name,
        phone: input.phone,
        role: input.role,
        special_notes: input.special_notes,
    };

    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /api/users/{id}/reset-password
///
/// Reset a member's password to the default and re-arm the must-change flag.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let hashed = hash_password(DEFAULT_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::set_password(&state.pool, id, &hashed, true).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    Ok(Json(json!({ "ok": true })))
}
