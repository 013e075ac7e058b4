//! Integration tests for the participant lifecycle:
//! unregistered -> GOING -> CANCELED, the one-shot cancel gate, the
//! unique pair constraint, and the payment flags.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use stichting_core::participation::ParticipantStatus;
use stichting_core::roles::Role;
use stichting_core::types::DbId;
use stichting_db::models::outing::CreateOuting;
use stichting_db::models::user::CreateUser;
use stichting_db::repositories::{OutingRepo, ParticipantRepo, UserRepo};

async fn fixture(pool: &PgPool) -> (DbId, DbId) {
    let outing = OutingRepo::create(
        pool,
        &CreateOuting {
            title: "Stranddag Scheveningen".to_string(),
            date: Utc::now() + Duration::days(21),
            description: String::new(),
            image_url: None,
            collect_point: None,
            collect_time: None,
            registration_until: None,
            cancel_until: None,
            published: true,
            show_on_frontend: true,
            maps_url: None,
            terms_url: None,
        },
    )
    .await
    .unwrap();

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "roelie".to_string(),
            first_name: "Roelie".to_string(),
            tussenvoegsel: None,
            last_name: "Gebruiker".to_string(),
            phone: None,
            role: Role::User,
            password_hash: "$argon2id$fake".to_string(),
            must_change_password: true,
            special_notes: None,
        },
    )
    .await
    .unwrap();

    (outing.id, user.id)
}

#[sqlx::test]
async fn enrol_creates_going_row_with_defaults(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;

    let p = ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();
    assert_eq!(p.status, ParticipantStatus::Going);
    assert!(p.can_cancel);
    assert!(!p.prepaid);
    assert!(!p.postpaid);
}

#[sqlx::test]
async fn double_enrol_is_idempotent(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;

    let first = ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();
    let second = ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();

    // Same row, still GOING, no duplicate.
    assert_eq!(first.id, second.id);
    assert_eq!(second.status, ParticipantStatus::Going);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM participants")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test]
async fn cancel_burns_the_gate(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();

    let canceled = ParticipantRepo::cancel(&pool, outing_id, user_id)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(canceled.status, ParticipantStatus::Canceled);
    assert!(!canceled.can_cancel);
}

#[sqlx::test]
async fn reset_cancel_rearms_and_restores_going(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();
    ParticipantRepo::cancel(&pool, outing_id, user_id).await.unwrap();

    let reset = ParticipantRepo::reset_cancel(&pool, outing_id, user_id)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(reset.status, ParticipantStatus::Going);
    assert!(reset.can_cancel);
}

#[sqlx::test]
async fn reset_cancel_missing_pair_returns_none(pool: PgPool) {
    let (outing_id, _user_id) = fixture(&pool).await;
    let result = ParticipantRepo::reset_cancel(&pool, outing_id, 999_999).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn enrol_after_cancel_goes_back_to_going_but_gate_stays_burned(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();
    ParticipantRepo::cancel(&pool, outing_id, user_id).await.unwrap();

    // Re-enrol forces status back to GOING; can_cancel stays false until an
    // admin resets it, so a second self-cancel is still blocked.
    let p = ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();
    assert_eq!(p.status, ParticipantStatus::Going);
    assert!(!p.can_cancel);
}

#[sqlx::test]
async fn pay_flags_are_independent_of_status(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();

    let p = ParticipantRepo::set_pay_flags(&pool, outing_id, user_id, true, false)
        .await
        .unwrap()
        .unwrap();
    assert!(p.prepaid);
    assert!(!p.postpaid);
    assert_eq!(p.status, ParticipantStatus::Going);

    let p = ParticipantRepo::set_pay_flags(&pool, outing_id, user_id, false, true)
        .await
        .unwrap()
        .unwrap();
    assert!(!p.prepaid);
    assert!(p.postpaid);
}

#[sqlx::test]
async fn joined_rows_carry_the_user(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();

    let rows = ParticipantRepo::list_by_outing_with_user(&pool, outing_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let row = rows.into_iter().next().unwrap().into_response();
    assert_eq!(row.participant.user_id, user_id);
    assert_eq!(row.user.username, "roelie");
    assert_eq!(row.user.role, Role::User);
}

#[sqlx::test]
async fn direct_duplicate_insert_hits_the_pair_constraint(pool: PgPool) {
    let (outing_id, user_id) = fixture(&pool).await;
    ParticipantRepo::enrol(&pool, outing_id, user_id).await.unwrap();

    // Bypass the upsert to prove the constraint itself guards the pair.
    let result = sqlx::query("INSERT INTO participants (outing_id, user_id) VALUES ($1, $2)")
        .bind(outing_id)
        .bind(user_id)
        .execute(&pool)
        .await;

    let err = result.expect_err("duplicate pair must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_participants_outing_user"));
        }
        other => panic!("expected a database error, got: {other}"),
    }
}
