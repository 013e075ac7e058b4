//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod outings;
pub mod participants;
pub mod settings;
pub mod uploads;
pub mod users;
