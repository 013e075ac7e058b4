//! Participant status enumeration and the self-cancel gate.
//!
//! A (outing, user) pair moves `unregistered -> GOING -> CANCELED`. The
//! `can_cancel` flag is the only gate on cancellation: it flips to false
//! the moment a member cancels, and only an admin reset re-arms it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Registration status of a participant row. Maps to the PostgreSQL
/// `participant_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "participant_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantStatus {
    Going,
    Canceled,
}

impl ParticipantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ParticipantStatus::Going => "GOING",
            ParticipantStatus::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check the one-shot cancel gate for a participant row.
///
/// `can_cancel` is true exactly once per admin arm: it defaults true at
/// enrol time and an admin reset is the only path back. A row that has
/// already burned the flag fails with [`CoreError::Validation`].
pub fn check_cancel_allowed(can_cancel: bool) -> Result<(), CoreError> {
    if can_cancel {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Cancel not allowed (once only). Contact an admin.".into(),
        ))
    }
}
