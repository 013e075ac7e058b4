//! Route definitions for file upload and retrieval.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at the `/api` root.
///
/// ```text
/// POST /upload               -> store a multipart file (requires auth)
/// GET  /uploads/{filename}   -> serve a stored file (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(uploads::upload_file))
        .route("/uploads/{filename}", get(uploads::get_upload))
}
