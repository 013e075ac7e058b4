//! Shared domain types for the Stichting outing administration backend.
//!
//! - [`error`] -- the domain error taxonomy.
//! - [`types`] -- id and timestamp aliases used across crates.
//! - [`roles`] -- the closed user role enumeration.
//! - [`participation`] -- participant status enumeration.
//! - [`uploads`] -- upload filename sanitization rules.

pub mod error;
pub mod participation;
pub mod roles;
pub mod types;
pub mod uploads;
