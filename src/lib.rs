//! Stateless token authentication core.
//!
//! Provides [`TokenAuthority`], which issues and validates signed,
//! time-bounded identity tokens for stateless session authentication.
//! Validity is a pure function of the token bytes, the configured
//! secret, and the current clock reading; nothing is stored server-side.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod token;

// Re-exports for convenience
pub use config::{Config, TokenAlgorithm};
pub use error::{AuthError, AuthResult};
pub use token::{Claims, TokenAuthority, Verdict};
