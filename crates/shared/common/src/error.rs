//! Unified error handling.
//!
//! Every storage backend and service returns [`AppError`], so callers can
//! tell a missing record apart from bad input or a failing medium.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "INVALID_INPUT",
            #[cfg(feature = "database")]
            AppError::Database(_) => "BACKEND_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides driver details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }

    /// Whether the error reports a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_validation_maps_to_validation() {
        let err: AppError = DomainError::validation("username and email are required").into();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.code(), "INVALID_INPUT");
        assert_eq!(err.user_message(), "username and email are required");
    }

    #[test]
    fn test_domain_conflict_maps_to_conflict() {
        let err = AppError::from(DomainError::conflict("User with ID 1"));

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.user_message(), "User with ID 1 already exists");
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_driver_error_is_backend_error() {
        let err = AppError::from(sea_orm::DbErr::Custom("connection refused".to_string()));

        assert!(!err.is_not_found());
        assert_eq!(err.code(), "BACKEND_ERROR");
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn test_option_ext() {
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
        assert!(None::<i32>.ok_or_not_found().unwrap_err().is_not_found());
    }
}
