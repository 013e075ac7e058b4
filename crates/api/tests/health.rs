//! Health endpoint and middleware-level integration tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// The health endpoint reports an ok status and a reachable database.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_endpoint(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// Responses carry a request id and the hardening headers.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_response_headers(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/health").await;
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

/// Requests beyond the per-window limit are rejected with 429.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rate_limit_rejects_excess(pool: PgPool) {
    let mut config = common::test_config();
    config.rate_limit_per_min = 3;
    let app = common::build_test_app_with_config(pool, config);

    for _ in 0..3 {
        let response = get(app.clone(), "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let limited = get(app, "/api/health").await;
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(limited).await;
    assert_eq!(json["message"], "Too many requests");
}

/// An unknown route under /api is a plain 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
