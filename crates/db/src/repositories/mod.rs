//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod outing_repo;
pub mod participant_repo;
pub mod setting_repo;
pub mod upload_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use outing_repo::OutingRepo;
pub use participant_repo::ParticipantRepo;
pub use setting_repo::SettingRepo;
pub use upload_repo::UploadRepo;
pub use user_repo::UserRepo;
