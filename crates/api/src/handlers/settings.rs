//! Handlers for the singleton `/settings` resource.

use axum::extract::State;
use axum::Json;
use stichting_db::models::setting::{Setting, UpdateSetting};
use stichting_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/settings
///
/// The singleton settings row, publicly readable so the frontend can
/// render the site title before login.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Setting>> {
    let setting = SettingRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::InternalError("Settings row missing".into()))?;
    Ok(Json(setting))
}

/// PUT /api/settings
///
/// Overwrite the singleton settings fields.
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<UpdateSetting>,
) -> AppResult<Json<Setting>> {
    let setting = SettingRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| AppError::InternalError("Settings row missing".into()))?;
    Ok(Json(setting))
}
