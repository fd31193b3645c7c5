//! Validation outcome type.

use crate::token::claims::Claims;

/// Outcome of validating a token.
///
/// All failure modes — malformed encoding, signature mismatch, elapsed
/// expiry — collapse into [`Verdict::Invalid`]. Call sites get a
/// two-branch contract with no error handling required; the underlying
/// rejection reason is emitted as a `tracing` debug event instead.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Signature verified and expiry still in the future; the decoded
    /// claims are attached.
    Valid(Claims),
    /// The token was rejected.
    Invalid,
}

impl Verdict {
    /// Whether the token was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Borrow the claims of a valid token.
    #[must_use]
    pub const fn claims(&self) -> Option<&Claims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid => None,
        }
    }

    /// Consume the verdict, yielding the claims of a valid token.
    #[must_use]
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid => None,
        }
    }
}
