//! The singleton site settings row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stichting_core::types::Timestamp;

/// The one row of the `settings` table (id fixed at 1).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: i16,
    pub site_title: String,
    pub updated_at: Timestamp,
}

/// DTO for updating the singleton settings row.
#[derive(Debug, Deserialize)]
pub struct UpdateSetting {
    pub site_title: Option<String>,
}
