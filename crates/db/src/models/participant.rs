//! Participant entity: the (outing, user) join row with its status,
//! cancel gate and payment flags.

use serde::Serialize;
use sqlx::FromRow;
use stichting_core::participation::ParticipantStatus;
use stichting_core::roles::Role;
use stichting_core::types::{DbId, Timestamp};

use crate::models::user::UserResponse;

/// Full participant row from the `participants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participant {
    pub id: DbId,
    pub outing_id: DbId,
    pub user_id: DbId,
    pub status: ParticipantStatus,
    /// One-shot cancel gate: flips false on self-cancel, admin-resettable.
    pub can_cancel: bool,
    pub prepaid: bool,
    pub postpaid: bool,
    pub created_at: Timestamp,
}

/// A participant row joined to its user, flattened for a single query.
///
/// Column aliases in [`crate::repositories::ParticipantRepo`] keep the two
/// `id` columns apart. Convert with [`ParticipantWithUserRow::into_response`].
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantWithUserRow {
    pub id: DbId,
    pub outing_id: DbId,
    pub user_id: DbId,
    pub status: ParticipantStatus,
    pub can_cancel: bool,
    pub prepaid: bool,
    pub postpaid: bool,
    pub created_at: Timestamp,
    pub username: String,
    pub first_name: String,
    pub tussenvoegsel: Option<String>,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub must_change_password: bool,
    pub special_notes: Option<String>,
    pub user_created_at: Timestamp,
}

/// API shape for a participant with its user attached.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantWithUser {
    #[serde(flatten)]
    pub participant: Participant,
    pub user: UserResponse,
}

impl ParticipantWithUserRow {
    pub fn into_response(self) -> ParticipantWithUser {
        ParticipantWithUser {
            participant: Participant {
                id: self.id,
                outing_id: self.outing_id,
                user_id: self.user_id,
                status: self.status,
                can_cancel: self.can_cancel,
                prepaid: self.prepaid,
                postpaid: self.postpaid,
                created_at: self.created_at,
            },
            user: UserResponse {
                id: self.user_id,
                username: self.username,
                first_name: self.first_name,
                tussenvoegsel: self.tussenvoegsel,
                last_name: self.last_name,
                phone: self.phone,
                role: self.role,
                must_change_password: self.must_change_password,
                special_notes: self.special_notes,
                created_at: self.user_created_at,
            },
        }
    }
}
