pub mod auth;
pub mod health;
pub mod outings;
pub mod settings;
pub mod uploads;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             current user (requires auth)
/// /auth/change-password                rotate own password (requires auth)
///
/// /users                               list, create (admin only)
/// /users/{id}                          update profile (self or admin)
/// /users/{id}/reset-password           reset password (admin only)
///
/// /uitjes                              public list, create (admin)
/// /uitjes/admin                        all outings + participants (admin)
/// /uitjes/{id}                         detail, update, delete
/// /uitjes/{id}/enrol                   enrol self (POST)
/// /uitjes/{id}/cancel                  cancel self, once (POST)
/// /uitjes/{id}/reset-cancel/{userId}   re-arm cancel gate (admin, POST)
/// /uitjes/{id}/payflags/{userId}       set payment flags (admin, POST)
///
/// /upload                              store multipart file (requires auth)
/// /uploads/{filename}                  serve stored file (public)
///
/// /settings                            read (public), overwrite (admin)
///
/// /health                              service + database health (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, me, change-password).
        .nest("/auth", auth::router())
        // Member administration.
        .nest("/users", users::router())
        // Outings with their enrolment sub-routes.
        .nest("/uitjes", outings::router())
        // File intake and retrieval, mounted at the /api root.
        .merge(uploads::router())
        // Singleton site settings.
        .nest("/settings", settings::router())
        // Liveness probe.
        .merge(health::router())
}
