//! User domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::{MSG_USERNAME_AND_EMAIL_REQUIRED, UNASSIGNED_USER_ID};
use crate::error::{DomainError, DomainResult};

/// User domain entity
///
/// `id` is assigned by the storage backend on creation. A user that has not
/// been stored yet carries [`UNASSIGNED_USER_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    /// Create an unsaved user
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_USER_ID,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Create a user with a caller-chosen identifier
    pub fn with_id(id: i32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Check if the backend has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_USER_ID
    }

    /// Both username and email must be present
    pub fn validate(&self) -> DomainResult<()> {
        if self.username.is_empty() || self.email.is_empty() {
            return Err(DomainError::validation(MSG_USERNAME_AND_EMAIL_REQUIRED));
        }
        Ok(())
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.username, self.email)
    }
}
