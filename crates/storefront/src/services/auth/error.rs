//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// Display text is the message shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email and password do not match a known account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration used an email that already belongs to an account.
    #[error("Email already in use")]
    EmailInUse,
}
