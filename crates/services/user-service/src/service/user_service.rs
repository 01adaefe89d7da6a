//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Validates input, then hands off to the repository.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user; both fields must be non-empty
    async fn create_user(&self, username: String, email: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: i32) -> AppResult<User>;

    /// Replace every field of an existing user
    async fn update_user(&self, user: &User) -> AppResult<()>;

    /// Delete user by ID
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, username: String, email: String) -> AppResult<User> {
        let mut user = User::new(username, email);
        if let Err(e) = user.validate() {
            warn!("rejected user: {}", e);
            return Err(e.into());
        }

        self.repo.create(&mut user).await?;
        debug!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await.map_err(|e| log_missing(e, id))
    }

    async fn update_user(&self, user: &User) -> AppResult<()> {
        self.repo.update(user).await.map_err(|e| log_missing(e, user.id))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await.map_err(|e| log_missing(e, id))
    }
}

fn log_missing(err: AppError, id: i32) -> AppError {
    if err.is_not_found() {
        warn!(user_id = id, "user not found");
    }
    err
}
