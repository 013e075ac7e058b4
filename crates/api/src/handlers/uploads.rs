//! Handlers for file uploads and retrieval.
//!
//! Files live on disk under the configured upload directory; a metadata
//! row per file records owner, original name, content type, and size.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stichting_core::error::CoreError;
use stichting_core::uploads::{stored_filename, strip_unsafe_chars};
use stichting_db::models::upload::{CreateUpload, Upload};
use stichting_db::repositories::UploadRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `POST /upload`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub file: Upload,
}

/// POST /api/upload
///
/// Accept a single multipart `file` field, write it to the upload
/// directory under `{unix-millis}-{sanitized-original}`, and record a
/// metadata row.
pub async fn upload_file(
    State(state): State<AppState>,
    auth_user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("unknown").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let stored_name =
            stored_filename(chrono::Utc::now().timestamp_millis(), &original_name);
        let dest = state.config.upload_dir.join(&stored_name);

        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        let upload = UploadRepo::create(
            &state.pool,
            &CreateUpload {
                user_id: auth_user.user_id,
                stored_name,
                original_name,
                mime_type,
                size_bytes: data.len() as i64,
            },
        )
        .await?;

        return Ok(Json(UploadResponse { ok: true, file: upload }));
    }

    Err(AppError::Core(CoreError::Validation(
        "No file field in multipart upload".into(),
    )))
}

/// GET /api/uploads/{filename}
///
/// Serve a stored file. The requested name is stripped to the safe
/// character class before touching the filesystem, so a traversal
/// attempt resolves to a plain name inside the upload directory. A miss
/// is a 404 with an empty body, not a JSON error.
pub async fn get_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let safe_name = strip_unsafe_chars(&filename);
    if safe_name.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let path = state.config.upload_dir.join(&safe_name);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StatusCode::NOT_FOUND.into_response());
        }
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to read upload: {e}"
            )));
        }
    };

    // Prefer the recorded content type; fall back to a generic one for
    // files that predate the metadata table.
    let mime_type = UploadRepo::find_by_stored_name(&state.pool, &safe_name)
        .await?
        .map(|u| u.mime_type)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime_type)],
        Body::from(data),
    )
        .into_response())
}
