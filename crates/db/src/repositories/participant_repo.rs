//! Repository for the `participants` table.
//!
//! Enrolment is an upsert on the unique (outing_id, user_id) pair, so a
//! concurrent double enrol resolves inside PostgreSQL instead of racing
//! in application code.

use sqlx::PgPool;
use stichting_core::types::DbId;

use crate::models::participant::{Participant, ParticipantWithUserRow};

const COLUMNS: &str = "id, outing_id, user_id, status, can_cancel, prepaid, postpaid, created_at";

pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Enrol a user: create a GOING row, or force an existing row's status
    /// back to GOING (the prior status and flags are otherwise preserved).
    pub async fn enrol(
        pool: &PgPool,
        outing_id: DbId,
        user_id: DbId,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants (outing_id, user_id, status)
             VALUES ($1, $2, 'GOING')
             ON CONFLICT (outing_id, user_id)
             DO UPDATE SET status = 'GOING'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the row for a (outing, user) pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        outing_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM participants
             WHERE outing_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Self-cancel: set status CANCELED and burn the cancel gate.
    ///
    /// Returns `None` if no row exists for the pair. The caller checks
    /// `can_cancel` beforehand; this method just records the transition.
    pub async fn cancel(
        pool: &PgPool,
        outing_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET status = 'CANCELED', can_cancel = FALSE
             WHERE outing_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Admin reset: re-arm the cancel gate and put the row back to GOING.
    /// The only path out of CANCELED.
    pub async fn reset_cancel(
        pool: &PgPool,
        outing_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET status = 'GOING', can_cancel = TRUE
             WHERE outing_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite both payment flags. No interaction with status.
    pub async fn set_pay_flags(
        pool: &PgPool,
        outing_id: DbId,
        user_id: DbId,
        prepaid: bool,
        postpaid: bool,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET prepaid = $3, postpaid = $4
             WHERE outing_id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .bind(user_id)
            .bind(prepaid)
            .bind(postpaid)
            .fetch_optional(pool)
            .await
    }

    /// All participant rows of one outing.
    pub async fn list_by_outing(
        pool: &PgPool,
        outing_id: DbId,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM participants
             WHERE outing_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(outing_id)
            .fetch_all(pool)
            .await
    }

    /// All participant rows across outings, for grouping client-side
    /// (single query instead of one per outing).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants ORDER BY outing_id ASC, id ASC");
        sqlx::query_as::<_, Participant>(&query)
            .fetch_all(pool)
            .await
    }

    /// Participant rows of one outing joined to their users in one query.
    pub async fn list_by_outing_with_user(
        pool: &PgPool,
        outing_id: DbId,
    ) -> Result<Vec<ParticipantWithUserRow>, sqlx::Error> {
        sqlx::query_as::<_, ParticipantWithUserRow>(
            "SELECT p.id, p.outing_id, p.user_id, p.status, p.can_cancel, p.prepaid, p.postpaid, \
                    p.created_at, \
                    u.username, u.first_name, u.tussenvoegsel, u.last_name, u.phone, u.role, \
                    u.must_change_password, u.special_notes, u.created_at AS user_created_at
             FROM participants p
             JOIN users u ON u.id = p.user_id
             WHERE p.outing_id = $1
             ORDER BY p.id ASC",
        )
        .bind(outing_id)
        .fetch_all(pool)
        .await
    }
}
