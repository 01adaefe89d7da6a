//! Service layer - use cases on top of a storage backend.

mod user_service;

pub use user_service::{UserManager, UserService};
