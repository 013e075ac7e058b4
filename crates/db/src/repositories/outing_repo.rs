//! Repository for the `outings` table.

use sqlx::PgPool;
use stichting_core::types::DbId;

use crate::models::outing::{CreateOuting, Outing, OutingSummary, UpdateOuting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, date, description, image_url, collect_point, collect_time, \
                        registration_until, cancel_until, published, show_on_frontend, \
                        maps_url, terms_url, created_at, updated_at";

const SUMMARY_COLUMNS: &str = "id, date, title, description, image_url, published, show_on_frontend";

/// Provides CRUD operations for outings.
pub struct OutingRepo;

impl OutingRepo {
    /// Insert a new outing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOuting) -> Result<Outing, sqlx::Error> {
        let query = format!(
            "INSERT INTO outings (title, date, description, image_url, collect_point, \
                                  collect_time, registration_until, cancel_until, published, \
                                  show_on_frontend, maps_url, terms_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Outing>(&query)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.collect_point)
            .bind(&input.collect_time)
            .bind(input.registration_until)
            .bind(input.cancel_until)
            .bind(input.published)
            .bind(input.show_on_frontend)
            .bind(&input.maps_url)
            .bind(&input.terms_url)
            .fetch_one(pool)
            .await
    }

    /// Find an outing by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Outing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outings WHERE id = $1");
        sqlx::query_as::<_, Outing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public frontend list: `show_on_frontend` outings only, newest first,
    /// projected to the public-safe column subset.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<OutingSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM outings
             WHERE show_on_frontend = TRUE
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, OutingSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Admin list: all outings regardless of visibility flags, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Outing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outings ORDER BY date DESC");
        sqlx::query_as::<_, Outing>(&query).fetch_all(pool).await
    }

    /// Update an outing. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOuting,
    ) -> Result<Option<Outing>, sqlx::Error> {
        let query = format!(
            "UPDATE outings SET
                title = COALESCE($2, title),
                date = COALESCE($3, date),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                collect_point = COALESCE($6, collect_point),
                collect_time = COALESCE($7, collect_time),
                registration_until = COALESCE($8, registration_until),
                cancel_until = COALESCE($9, cancel_until),
                published = COALESCE($10, published),
                show_on_frontend = COALESCE($11, show_on_frontend),
                maps_url = COALESCE($12, maps_url),
                terms_url = COALESCE($13, terms_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Outing>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.collect_point)
            .bind(&input.collect_time)
            .bind(input.registration_until)
            .bind(input.cancel_until)
            .bind(input.published)
            .bind(input.show_on_frontend)
            .bind(&input.maps_url)
            .bind(&input.terms_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an outing. Sub-activities and participants cascade in the
    /// schema. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
