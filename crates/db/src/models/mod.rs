//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates
//! - A `Serialize` response projection where the row itself is not safe
//!   to expose (users carry their password hash)

pub mod outing;
pub mod participant;
pub mod setting;
pub mod upload;
pub mod user;
