//! Outing (uitje) entity, its three sub-activity kinds, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stichting_core::types::{DbId, Timestamp};

/// Full outing row from the `outings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Outing {
    pub id: DbId,
    pub title: String,
    pub date: Timestamp,
    pub description: String,
    pub image_url: Option<String>,
    pub collect_point: Option<String>,
    /// Display string, e.g. "09:15".
    pub collect_time: Option<String>,
    pub registration_until: Option<Timestamp>,
    pub cancel_until: Option<Timestamp>,
    pub published: bool,
    pub show_on_frontend: bool,
    pub maps_url: Option<String>,
    pub terms_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public-safe field subset served on the unauthenticated frontend list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutingSummary {
    pub id: DbId,
    pub date: Timestamp,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub show_on_frontend: bool,
}

/// DTO for creating an outing.
#[derive(Debug, Deserialize)]
pub struct CreateOuting {
    pub title: String,
    pub date: Timestamp,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub collect_point: Option<String>,
    pub collect_time: Option<String>,
    pub registration_until: Option<Timestamp>,
    pub cancel_until: Option<Timestamp>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub show_on_frontend: bool,
    pub maps_url: Option<String>,
    pub terms_url: Option<String>,
}

/// DTO for partially updating an outing. All fields are optional; absent
/// fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOuting {
    pub title: Option<String>,
    pub date: Option<Timestamp>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub collect_point: Option<String>,
    pub collect_time: Option<String>,
    pub registration_until: Option<Timestamp>,
    pub cancel_until: Option<Timestamp>,
    pub published: Option<bool>,
    pub show_on_frontend: Option<bool>,
    pub maps_url: Option<String>,
    pub terms_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Sub-activities
// ---------------------------------------------------------------------------

/// A scheduled event within an outing (museum visit, boat tour, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutingEvent {
    pub id: DbId,
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Price per person in euros.
    pub price_pp: Option<f64>,
    pub position: i32,
}

/// A meal within an outing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutingMeal {
    pub id: DbId,
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub position: i32,
}

/// A travel leg within an outing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutingTravel {
    pub id: DbId,
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub mode: Option<String>,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub position: i32,
}

/// DTO for creating an event row.
#[derive(Debug, Deserialize)]
pub struct CreateOutingEvent {
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub price_pp: Option<f64>,
    #[serde(default)]
    pub position: i32,
}

/// DTO for creating a meal row.
#[derive(Debug, Deserialize)]
pub struct CreateOutingMeal {
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default)]
    pub position: i32,
}

/// DTO for creating a travel row.
#[derive(Debug, Deserialize)]
pub struct CreateOutingTravel {
    pub outing_id: DbId,
    pub title: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub mode: Option<String>,
    pub from_location: Option<String>,
    pub to_location: Option<String>,
    #[serde(default)]
    pub position: i32,
}
