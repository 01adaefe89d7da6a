//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use common::{AppError, AppResult, OptionExt};
use domain::{DomainError, User, FIRST_USER_ID};

use super::UserRepository;

/// User repository backed by a process-local `Vec`.
///
/// Records are lost when the store is dropped. Lookups are linear scans
/// returning the first match.
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    users: Vec<User>,
    next_id: i32,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                users: Vec::new(),
                next_id: FIRST_USER_ID,
            }),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Whether the store holds no users
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.users.is_empty()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: &mut User) -> AppResult<()> {
        let mut state = self.state.write().await;

        if user.is_persisted() {
            // Caller picked the ID: refuse to shadow an existing record
            if state.users.iter().any(|u| u.id == user.id) {
                return Err(DomainError::conflict(format!("User with ID {}", user.id)).into());
            }
            if user.id >= state.next_id {
                state.next_id = user.id.saturating_add(1);
            }
        } else {
            let id = state.next_id;
            if state.users.iter().any(|u| u.id == id) {
                return Err(AppError::internal("user id space exhausted"));
            }
            user.id = id;
            state.next_id = id.saturating_add(1);
        }

        state.users.push(user.clone());
        debug!(user_id = user.id, "user stored in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        let state = self.state.read().await;
        state.users.iter().find(|u| u.id == id).cloned().ok_or_not_found()
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut state = self.state.write().await;
        let stored = state
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AppError::NotFound)?;

        *stored = user.clone();
        debug!(user_id = user.id, "user replaced in memory");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut state = self.state.write().await;
        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::NotFound)?;

        state.users.remove(index);
        debug!(user_id = id, "user removed from memory");
        Ok(())
    }
}
