//! Route definitions for the `/users` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /                     -> list users (admin only)
/// POST /                     -> create user (admin only)
/// PUT  /{id}                 -> update profile (self or admin)
/// POST /{id}/reset-password  -> reset to default password (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", put(users::update_user))
        .route("/{id}/reset-password", post(users::reset_password))
}
