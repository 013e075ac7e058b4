//! Upload metadata model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stichting_core::types::{DbId, Timestamp};

/// Metadata row for a file stored on disk under `UPLOAD_DIR`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Upload {
    pub id: DbId,
    pub user_id: DbId,
    /// The sanitized, timestamp-prefixed on-disk filename.
    pub stored_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// DTO for recording an upload.
#[derive(Debug, Deserialize)]
pub struct CreateUpload {
    pub user_id: DbId,
    pub stored_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
}
