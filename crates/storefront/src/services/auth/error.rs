//! Authentication error types.

use organi_live_core::EmailError;

/// Errors from authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The email format is invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password doesn't meet requirements. The message is safe to
    /// show to the user.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The operation requires an active session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Password hashing failed.
    #[error("password hashing error: {0}")]
    Hash(String),
}
