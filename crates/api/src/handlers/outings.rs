//! Handlers for the `/uitjes` resource (outings).
//!
//! The public list and the detail view are unauthenticated so the
//! frontend can render them before login; everything mutating is
//! admin-only.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use stichting_core::error::CoreError;
use stichting_core::types::DbId;
use stichting_db::models::outing::{
    CreateOuting, Outing, OutingEvent, OutingMeal, OutingSummary, OutingTravel, UpdateOuting,
};
use stichting_db::models::participant::{Participant, ParticipantWithUser};
use stichting_db::repositories::{ActivityRepo, OutingRepo, ParticipantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Admin list entry: the full outing row with its participant rows attached.
#[derive(Debug, Serialize)]
pub struct OutingWithParticipants {
    #[serde(flatten)]
    pub outing: Outing,
    pub participants: Vec<Participant>,
}

/// Detail view: the outing, its schedule in position order, and every
/// participant joined to a sanitized user projection.
#[derive(Debug, Serialize)]
pub struct OutingDetail {
    #[serde(flatten)]
    pub outing: Outing,
    pub events: Vec<OutingEvent>,
    pub meals: Vec<OutingMeal>,
    pub travels: Vec<OutingTravel>,
    pub participants: Vec<ParticipantWithUser>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/uitjes
///
/// Public frontend list: `show_on_frontend` outings only, newest first,
/// projected to the public-safe field subset.
pub async fn list_outings(State(state): State<AppState>) -> AppResult<Json<Vec<OutingSummary>>> {
    let outings = OutingRepo::list_public(&state.pool).await?;
    Ok(Json(outings))
}

/// GET /api/uitjes/admin
///
/// All outings regardless of visibility flags, each with its participant
/// rows. Participants are fetched in one query and grouped here to avoid
/// a query per outing.
pub async fn admin_list_outings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<OutingWithParticipants>>> {
    let outings = OutingRepo::list_all(&state.pool).await?;
    let participants = ParticipantRepo::list_all(&state.pool).await?;

    let mut by_outing: HashMap<DbId, Vec<Participant>> = HashMap::new();
    for p in participants {
        by_outing.entry(p.outing_id).or_default().push(p);
    }

    let responses = outings
        .into_iter()
        .map(|outing| {
            let participants = by_outing.remove(&outing.id).unwrap_or_default();
            OutingWithParticipants {
                outing,
                participants,
            }
        })
        .collect();

    Ok(Json(responses))
}

/// GET /api/uitjes/{id}
///
/// One outing with its full schedule and participant list.
pub async fn get_outing(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OutingDetail>> {
    let outing = OutingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outing",
            id,
        }))?;

    let events = ActivityRepo::list_events(&state.pool, id).await?;
    let meals = ActivityRepo::list_meals(&state.pool, id).await?;
    let travels = ActivityRepo::list_travels(&state.pool, id).await?;
    let participants = ParticipantRepo::list_by_outing_with_user(&state.pool, id)
        .await?
        .into_iter()
        .map(|row| row.into_response())
        .collect();

    Ok(Json(OutingDetail {
        outing,
        events,
        meals,
        travels,
        participants,
    }))
}

/// POST /api/uitjes
///
/// Create an outing from the explicit DTO, returning 201 Created.
pub async fn create_outing(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateOuting>,
) -> AppResult<(StatusCode, Json<Outing>)> {
    if input.title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }

    let outing = OutingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(outing)))
}

/// PUT /api/uitjes/{id}
///
/// Partial update: absent fields keep their stored value.
pub async fn update_outing(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOuting>,
) -> AppResult<Json<Outing>> {
    let outing = OutingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outing",
            id,
        }))?;

    Ok(Json(outing))
}

/// DELETE /api/uitjes/{id}
///
/// Delete an outing. Sub-activities and participants cascade in the schema.
pub async fn delete_outing(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let deleted = OutingRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Outing",
            id,
        }));
    }

    Ok(Json(json!({ "ok": true })))
}
