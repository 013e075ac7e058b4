//! HTTP-level integration tests for member administration.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;
use stichting_api::auth::jwt::generate_token;
use stichting_api::auth::password::hash_password;
use stichting_core::roles::Role;
use stichting_db::models::user::{CreateUser, User};
use stichting_db::repositories::UserRepo;

/// Insert a user directly and mint a token for them.
async fn seed_user(pool: &PgPool, username: &str, role: Role) -> (User, String) {
    let hashed = hash_password("seed-password").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            first_name: username.to_string(),
            tussenvoegsel: None,
            last_name: "Test".to_string(),
            phone: None,
            role,
            password_hash: hashed,
            must_change_password: false,
            special_notes: None,
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_token(user.id, user.role, &common::test_config().jwt)
        .expect("token generation should succeed");
    (user, token)
}

// ---------------------------------------------------------------------------
// Listing and creation
// ---------------------------------------------------------------------------

/// Listing users requires the admin role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_requires_admin(pool: PgPool) {
    let (_user, user_token) = seed_user(&pool, "regular", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let app = common::build_test_app(pool);

    let forbidden = get_auth(app.clone(), "/api/users", &user_token).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let ok = get_auth(app, "/api/users", &admin_token).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let json = body_json(ok).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

/// Creating a member assigns the default password, the must-change flag,
/// and the USER role when none is given.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_defaults(pool: PgPool) {
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/users",
        &admin_token,
        serde_json::json!({
            "username": "nieuwlid",
            "first_name": "Nieuw",
            "last_name": "Lid"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["role"], "USER");
    assert_eq!(json["must_change_password"], true);

    // The default password "1234" must work for the first login.
    let login = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "username": "nieuwlid", "password": "1234" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
}

/// A duplicate username is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_duplicate_username(pool: PgPool) {
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "dubbel",
        "first_name": "Dubbel",
        "last_name": "Lid"
    });
    let first = post_json_auth(app.clone(), "/api/users", &admin_token, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(app, "/api/users", &admin_token, body).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

/// Creation is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_requires_admin(pool: PgPool) {
    let (_user, user_token) = seed_user(&pool, "regular", Role::User).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/users",
        &user_token,
        serde_json::json!({
            "username": "sneaky",
            "first_name": "Sneaky",
            "last_name": "Lid"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// A member may update their own profile but not someone else's, and may
/// not change their own role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_self_or_admin_rule(pool: PgPool) {
    let (user, user_token) = seed_user(&pool, "roelie", Role::User).await;
    let (other, _) = seed_user(&pool, "sandra", Role::User).await;
    let app = common::build_test_app(pool);

    // Own profile: allowed.
    let own = put_json_auth(
        app.clone(),
        &format!("/api/users/{}", user.id),
        &user_token,
        serde_json::json!({ "phone": "06-12345678" }),
    )
    .await;
    assert_eq!(own.status(), StatusCode::OK);
    let json = body_json(own).await;
    assert_eq!(json["phone"], "06-12345678");

    // Someone else's profile: forbidden.
    let foreign = put_json_auth(
        app.clone(),
        &format!("/api/users/{}", other.id),
        &user_token,
        serde_json::json!({ "phone": "06-00000000" }),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::FORBIDDEN);

    // Own role: forbidden.
    let escalate = put_json_auth(
        app,
        &format!("/api/users/{}", user.id),
        &user_token,
        serde_json::json!({ "role": "ADMIN" }),
    )
    .await;
    assert_eq!(escalate.status(), StatusCode::FORBIDDEN);
}

/// An admin may update any profile, including the role.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_updates_role(pool: PgPool) {
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let (user, _) = seed_user(&pool, "promotee", Role::User).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app,
        &format!("/api/users/{}", user.id),
        &admin_token,
        serde_json::json!({ "role": "ADMIN" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["role"], "ADMIN");
}

/// Updating an unknown user id is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_user(pool: PgPool) {
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app,
        "/api/users/99999",
        &admin_token,
        serde_json::json!({ "phone": "06-12345678" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Password reset
// ---------------------------------------------------------------------------

/// Reset puts the account back on the default password with the
/// must-change flag armed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reset_password(pool: PgPool) {
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let (user, _) = seed_user(&pool, "vergeten", Role::User).await;
    let app = common::build_test_app(pool.clone());

    let response = post_auth(
        app.clone(),
        &format!("/api/users/{}/reset-password", user.id),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let login = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "username": "vergeten", "password": "1234" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let json = body_json(login).await;
    assert_eq!(json["user"]["must_change_password"], true);
}

/// Reset is admin-only and 404s on unknown ids.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reset_password_guards(pool: PgPool) {
    let (user, user_token) = seed_user(&pool, "regular", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "boss", Role::Admin).await;
    let app = common::build_test_app(pool);

    let forbidden = post_auth(
        app.clone(),
        &format!("/api/users/{}/reset-password", user.id),
        &user_token,
    )
    .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let missing = post_auth(app, "/api/users/99999/reset-password", &admin_token).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
