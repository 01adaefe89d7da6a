//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier carried by a user that has not been stored yet
pub const UNASSIGNED_USER_ID: i32 = 0;

/// First identifier handed out by a fresh in-memory store
pub const FIRST_USER_ID: i32 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Message returned when a required user field is empty
pub const MSG_USERNAME_AND_EMAIL_REQUIRED: &str = "username and email are required";
