//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage backends and the service layer share the types defined here.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::User;
