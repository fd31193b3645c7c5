//! Error types for configuration and token issuance.
//!
//! Validation failures are deliberately not represented here: an
//! invalid token is a routine outcome surfaced through
//! [`Verdict::Invalid`](crate::token::Verdict), not an error.

use thiserror::Error;

/// Errors raised during startup configuration or token issuance.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Configuration missing or invalid at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signing primitive failed to encode a token
    #[error("Token signing error: {0}")]
    Signing(String),
}

impl AuthError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AuthError::Signing(err.to_string())
    }
}

/// Result type for configuration and issuance operations.
pub type AuthResult<T> = Result<T, AuthError>;
