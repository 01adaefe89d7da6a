//! Repository layer for data access.
//!
//! [`UserRepository`] is the capability set every storage backend
//! implements; the service layer only ever sees `Arc<dyn UserRepository>`.

pub mod entities;
mod memory_store;
mod postgres_store;
mod user_repository;

pub use memory_store::InMemoryUserStore;
pub use postgres_store::PostgresUserStore;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
