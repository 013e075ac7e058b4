//! Handlers for enrolment, cancellation, and payment flags on an outing.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use stichting_core::error::CoreError;
use stichting_core::participation::check_cancel_allowed;
use stichting_core::types::DbId;
use stichting_db::models::participant::Participant;
use stichting_db::repositories::{OutingRepo, ParticipantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /uitjes/{id}/payflags/{userId}`.
#[derive(Debug, Deserialize)]
pub struct PayFlagsRequest {
    #[serde(default)]
    pub prepaid: bool,
    #[serde(default)]
    pub postpaid: bool,
}

/// POST /api/uitjes/{id}/enrol
///
/// Enrol the caller. Creates a GOING row, or forces an existing row's
/// status back to GOING; the cancel gate and payment flags are untouched.
pub async fn enrol(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(outing_id): Path<DbId>,
) -> AppResult<Json<Participant>> {
    // The FK would also reject an unknown outing, but a clean 404 beats a
    // constraint error surfaced as 500.
    OutingRepo::find_by_id(&state.pool, outing_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outing",
            id: outing_id,
        }))?;

    let participant = ParticipantRepo::enrol(&state.pool, outing_id, auth_user.user_id).await?;
    Ok(Json(participant))
}

/// POST /api/uitjes/{id}/cancel
///
/// Self-cancel the caller's enrolment. Allowed exactly once per row:
/// the gate burns on use and only an admin can re-arm it.
pub async fn cancel(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(outing_id): Path<DbId>,
) -> AppResult<Json<Participant>> {
    let existing = ParticipantRepo::find_by_pair(&state.pool, outing_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: outing_id,
        }))?;

    check_cancel_allowed(existing.can_cancel).map_err(AppError::Core)?;

    let participant = ParticipantRepo::cancel(&state.pool, outing_id, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: outing_id,
        }))?;

    Ok(Json(participant))
}

/// POST /api/uitjes/{id}/reset-cancel/{userId}
///
/// Admin re-arms a member's cancel gate and puts the row back to GOING.
pub async fn reset_cancel(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((outing_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Participant>> {
    let participant = ParticipantRepo::reset_cancel(&state.pool, outing_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: user_id,
        }))?;

    Ok(Json(participant))
}

/// POST /api/uitjes/{id}/payflags/{userId}
///
/// Admin overwrites both payment flags for a member's enrolment.
pub async fn set_pay_flags(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path((outing_id, user_id)): Path<(DbId, DbId)>,
    Json(input): Json<PayFlagsRequest>,
) -> AppResult<Json<Participant>> {
    let participant =
        ParticipantRepo::set_pay_flags(&state.pool, outing_id, user_id, input.prepaid, input.postpaid)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Participant",
                id: user_id,
            }))?;

    Ok(Json(participant))
}
