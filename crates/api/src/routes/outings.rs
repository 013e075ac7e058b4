//! Route definitions for the `/uitjes` resource, including enrolment.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{outings, participants};
use crate::state::AppState;

/// Routes mounted at `/uitjes`.
///
/// ```text
/// GET    /                            -> public list (show_on_frontend only)
/// POST   /                            -> create (admin only)
/// GET    /admin                       -> all outings + participants (admin only)
/// GET    /{id}                        -> detail with schedule + participants
/// PUT    /{id}                        -> partial update (admin only)
/// DELETE /{id}                        -> delete (admin only)
/// POST   /{id}/enrol                  -> enrol self (requires auth)
/// POST   /{id}/cancel                 -> cancel self, once (requires auth)
/// POST   /{id}/reset-cancel/{userId}  -> re-arm cancel gate (admin only)
/// POST   /{id}/payflags/{userId}      -> set payment flags (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(outings::list_outings).post(outings::create_outing),
        )
        .route("/admin", get(outings::admin_list_outings))
        .route(
            "/{id}",
            get(outings::get_outing)
                .put(outings::update_outing)
                .delete(outings::delete_outing),
        )
        .route("/{id}/enrol", post(participants::enrol))
        .route("/{id}/cancel", post(participants::cancel))
        .route(
            "/{id}/reset-cancel/{user_id}",
            post(participants::reset_cancel),
        )
        .route("/{id}/payflags/{user_id}", post(participants::set_pay_flags))
}
