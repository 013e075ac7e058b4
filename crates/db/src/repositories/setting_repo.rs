//! Repository for the singleton `settings` row.

use sqlx::PgPool;

use crate::models::setting::{Setting, UpdateSetting};

const COLUMNS: &str = "id, site_title, updated_at";

/// The settings row has a fixed id; there is exactly one.
const SINGLETON_ID: i16 = 1;

pub struct SettingRepo;

impl SettingRepo {
    /// Fetch the singleton settings row. The row is seeded by migration,
    /// so a missing row indicates a broken database.
    pub async fn get(pool: &PgPool) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the singleton row with the given fields.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSetting,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                site_title = COALESCE($2, site_title),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SINGLETON_ID)
            .bind(&input.site_title)
            .fetch_optional(pool)
            .await
    }

    /// Idempotently ensure the singleton row exists with the given title.
    /// Used by the seed binary; an existing row is left untouched.
    pub async fn seed(pool: &PgPool, site_title: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings (id, site_title) VALUES ($1, $2)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SINGLETON_ID)
        .bind(site_title)
        .execute(pool)
        .await?;
        Ok(())
    }
}
