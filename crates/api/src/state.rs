use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stichting_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Per-address request counters for the rate-limit middleware.
    pub rate_limiter: Arc<RateLimiter>,
}
