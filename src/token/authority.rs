//! The token authority: stateless issue/validate over a shared secret.

use crate::config::Config;
use crate::error::AuthError;
use crate::token::claims::Claims;
use crate::token::verdict::Verdict;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Wire payload: registered timestamps plus the flattened caller claims.
#[derive(Serialize, Deserialize)]
struct Payload {
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    claims: Claims,
}

/// Issues and validates signed, time-bounded identity tokens.
///
/// Both operations are pure, synchronous and side-effect free; the
/// authority holds only immutable key material derived once from the
/// injected [`Config`], so a single instance (or clones of it) can be
/// shared across any number of concurrent callers.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenAuthority {
    /// Build an authority from the startup configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: config.algorithm.as_jwt(),
            default_ttl: config.default_ttl,
        }
    }

    /// Issue a signed token embedding `claims`, expiring `ttl` from now
    /// (the configured default when `None`).
    ///
    /// Reserved claim names (`iat`, `exp`) in the caller mapping are
    /// stripped; the authority's own timestamps always win.
    ///
    /// # Errors
    ///
    /// Returns an error only when the signing primitive itself fails.
    pub fn issue(&self, mut claims: Claims, ttl: Option<Duration>) -> Result<String, AuthError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let now = chrono::Utc::now().timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        claims.strip_reserved();
        let payload = Payload {
            iat: now,
            exp: now.saturating_add(ttl_secs),
            claims,
        };

        let token = encode(&Header::new(self.algorithm), &payload, &self.encoding_key)?;
        debug!(exp = payload.exp, "issued token");
        Ok(token)
    }

    /// Validate a string purporting to be a token.
    ///
    /// Returns [`Verdict::Valid`] with the decoded claims when the
    /// signature verifies and the expiry is strictly after the current
    /// clock reading; [`Verdict::Invalid`] otherwise. Never panics,
    /// whatever the input.
    pub fn validate(&self, token: &str) -> Verdict {
        // Signature and structure only; expiry is checked below so the
        // boundary stays exclusive (a token is dead at exactly `exp`).
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let payload = match decode::<Payload>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims,
            Err(err) => {
                debug!(reason = ?err.kind(), "token rejected");
                return Verdict::Invalid;
            }
        };

        let now = chrono::Utc::now().timestamp();
        if now >= payload.exp {
            debug!(exp = payload.exp, "token rejected: expired");
            return Verdict::Invalid;
        }

        Verdict::Valid(payload.claims)
    }
}
