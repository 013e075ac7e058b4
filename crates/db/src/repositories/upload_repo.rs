//! Repository for the `uploads` metadata table.

use sqlx::PgPool;

use crate::models::upload::{CreateUpload, Upload};

const COLUMNS: &str = "id, user_id, stored_name, original_name, mime_type, size_bytes, created_at";

pub struct UploadRepo;

impl UploadRepo {
    /// Record an upload, returning the created metadata row.
    pub async fn create(pool: &PgPool, input: &CreateUpload) -> Result<Upload, sqlx::Error> {
        let query = format!(
            "INSERT INTO uploads (user_id, stored_name, original_name, mime_type, size_bytes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Upload>(&query)
            .bind(input.user_id)
            .bind(&input.stored_name)
            .bind(&input.original_name)
            .bind(&input.mime_type)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Look up an upload by its on-disk filename. Used on retrieval to
    /// serve the recorded content type.
    pub async fn find_by_stored_name(
        pool: &PgPool,
        stored_name: &str,
    ) -> Result<Option<Upload>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM uploads WHERE stored_name = $1");
        sqlx::query_as::<_, Upload>(&query)
            .bind(stored_name)
            .fetch_optional(pool)
            .await
    }
}
