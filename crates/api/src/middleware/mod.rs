//! Authentication, authorization, and rate-limit middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.
//! - [`rate_limit`] -- Fixed-window per-address request limiting.

pub mod auth;
pub mod rate_limit;
pub mod rbac;
