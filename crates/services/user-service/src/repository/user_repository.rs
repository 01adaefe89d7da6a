//! User repository trait.

use async_trait::async_trait;

use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation is a single step against the backing medium. Lookups
/// that miss return [`common::AppError::NotFound`] rather than `Ok(None)`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a copy of `user` and write the assigned identifier back into it
    async fn create(&self, user: &mut User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<User>;

    /// Replace the stored record whose ID matches `user.id`
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Remove user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}
