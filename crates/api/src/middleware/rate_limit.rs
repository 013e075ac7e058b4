//! Fixed-window per-address rate limiting.
//!
//! Bounds total request volume per client address per minute. This guards
//! the process as a whole, not individual resources: a client that exceeds
//! the window ceiling gets 429 until the window rolls over.
//!
//! The client address comes from [`ConnectInfo`] when the server is run
//! with `into_make_service_with_connect_info`, with an `x-forwarded-for`
//! fallback for deployments behind a reverse proxy.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Length of one counting window.
const WINDOW: Duration = Duration::from_secs(60);

/// Per-address request counters for the current window.
#[derive(Debug)]
pub struct RateLimiter {
    /// Requests allowed per address per window.
    max_per_window: u32,
    windows: Mutex<HashMap<String, WindowCounter>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_per_window: u32) -> Self {
        Self {
            max_per_window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request from `key`. Returns false when the window ceiling
    /// has been reached.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        let counter = windows
            .entry(key.to_string())
            .or_insert(WindowCounter { started: now, count: 0 });

        if now.duration_since(counter.started) >= WINDOW {
            counter.started = now;
            counter.count = 0;
        }

        if counter.count >= self.max_per_window {
            return false;
        }
        counter.count += 1;

        // Expired windows of other clients are dropped opportunistically so
        // the map does not grow without bound.
        if windows.len() > 1024 {
            windows.retain(|_, w| now.duration_since(w.started) < WINDOW);
        }

        true
    }
}

/// Axum middleware enforcing the per-address limit on every request.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if !state.rate_limiter.check(&key) {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            axum::Json(json!({ "message": "Too many requests" })),
        )
            .into_response();
    }

    next.run(request).await
}

/// Resolve the counting key for a request: peer address if known,
/// otherwise the first `x-forwarded-for` entry, otherwise a shared bucket.
fn client_key(request: &Request) -> String {
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_ceiling() {
        let limiter = RateLimiter::new(3);
        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"), "fourth request must be blocked");
    }

    #[test]
    fn addresses_are_counted_independently() {
        let limiter = RateLimiter::new(1);
        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.2"));
        assert!(!limiter.check("10.0.0.1"));
    }
}
