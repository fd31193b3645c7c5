//! Centralized configuration for the token authority.
//!
//! All configuration is loaded from environment variables and validated
//! at startup, then injected into [`TokenAuthority::new`] — nothing is
//! read from ambient state at call time.
//!
//! [`TokenAuthority::new`]: crate::token::TokenAuthority::new

use crate::error::AuthError;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

/// Token signing algorithm (HMAC family over the shared secret).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
}

impl TokenAlgorithm {
    /// Parse algorithm from string.
    ///
    /// # Errors
    ///
    /// Returns an error for algorithms outside the HMAC family.
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        match s.to_uppercase().as_str() {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(AuthError::config(format!("Invalid token algorithm: {s}"))),
        }
    }

    /// Get algorithm name for the token header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    pub(crate) const fn as_jwt(&self) -> jsonwebtoken::Algorithm {
        match self {
            Self::HS256 => jsonwebtoken::Algorithm::HS256,
            Self::HS384 => jsonwebtoken::Algorithm::HS384,
            Self::HS512 => jsonwebtoken::Algorithm::HS512,
        }
    }
}

/// Token authority configuration.
///
/// The signing secret is held as a [`SecretString`] so it stays out of
/// `Debug` output and log events.
#[derive(Debug, Clone)]
pub struct Config {
    /// Signing secret (confidential)
    pub secret: SecretString,
    /// Default token lifetime applied when issuance gives no override
    pub default_ttl: Duration,
    /// Signing algorithm
    pub algorithm: TokenAlgorithm,
}

impl Config {
    /// Create a configuration with an explicit secret and default TTL.
    ///
    /// Intended for tests and embedders that manage their own settings;
    /// production startup goes through [`Config::from_env`].
    #[must_use]
    pub fn new(secret: impl Into<String>, default_ttl: Duration) -> Self {
        Self {
            secret: SecretString::from(secret.into()),
            default_ttl,
            algorithm: TokenAlgorithm::HS256,
        }
    }

    /// Set the signing algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: TokenAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `AUTH_TOKEN_SECRET` (required), `AUTH_TOKEN_TTL`
    /// (duration string, default `24h`) and `AUTH_TOKEN_ALGORITHM`
    /// (default `HS256`).
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is missing or empty, or if the
    /// TTL or algorithm fail to parse.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let secret = env::var("AUTH_TOKEN_SECRET")
            .map_err(|_| AuthError::config("AUTH_TOKEN_SECRET is required"))?;
        if secret.is_empty() {
            return Err(AuthError::config("AUTH_TOKEN_SECRET must not be empty"));
        }

        let default_ttl = parse_duration(
            &env::var("AUTH_TOKEN_TTL").unwrap_or_else(|_| "24h".to_string()),
        )?;
        let algorithm = TokenAlgorithm::parse(
            &env::var("AUTH_TOKEN_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
        )?;

        Ok(Self {
            secret: SecretString::from(secret),
            default_ttl,
            algorithm,
        })
    }
}

/// Parse a duration string such as `24h`, `15m`, `90s`, `7d`, or a
/// bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration, AuthError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AuthError::config("Duration must not be empty"));
    }

    let (value, unit_secs) = match s.as_bytes()[s.len() - 1] {
        b's' => (&s[..s.len() - 1], 1),
        b'm' => (&s[..s.len() - 1], 60),
        b'h' => (&s[..s.len() - 1], 3600),
        b'd' => (&s[..s.len() - 1], 86400),
        _ => (s, 1),
    };

    let value: u64 = value
        .parse()
        .map_err(|_| AuthError::config(format!("Invalid duration: {s}")))?;

    value
        .checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| AuthError::config(format!("Duration out of range: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!(TokenAlgorithm::parse("HS256").unwrap(), TokenAlgorithm::HS256);
        assert_eq!(TokenAlgorithm::parse("hs256").unwrap(), TokenAlgorithm::HS256);
        assert_eq!(TokenAlgorithm::parse("HS384").unwrap(), TokenAlgorithm::HS384);
        assert_eq!(TokenAlgorithm::parse("HS512").unwrap(), TokenAlgorithm::HS512);
        assert!(TokenAlgorithm::parse("RS256").is_err());
        assert!(TokenAlgorithm::parse("none").is_err());
    }

    #[test]
    fn test_algorithm_as_str() {
        assert_eq!(TokenAlgorithm::HS256.as_str(), "HS256");
        assert_eq!(TokenAlgorithm::HS384.as_str(), "HS384");
        assert_eq!(TokenAlgorithm::HS512.as_str(), "HS512");
    }

    #[test]
    fn test_parse_duration_suffixes() {
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(900));
        assert_eq!(parse_duration("24h").unwrap(), Duration::from_secs(86400));
        assert_eq!(parse_duration("7d").unwrap(), Duration::from_secs(604800));
        assert_eq!(parse_duration("900").unwrap(), Duration::from_secs(900));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("-5s").is_err());
        assert!(parse_duration("1.5h").is_err());
        // u64::MAX seconds parses, but scaling by the unit must not wrap
        assert!(parse_duration("18446744073709551615d").is_err());
        assert!(parse_duration("18446744073709551615h").is_err());
    }

    #[test]
    fn test_secret_redacted_in_debug() {
        let config = Config::new("super-confidential-secret", Duration::from_secs(900));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-confidential-secret"));
    }

    // Environment variables are process-global, so every from_env test
    // holds this lock and restores a known slate before reading.
    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();
        LOCK.get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn clear_auth_env() {
        env::remove_var("AUTH_TOKEN_SECRET");
        env::remove_var("AUTH_TOKEN_TTL");
        env::remove_var("AUTH_TOKEN_ALGORITHM");
    }

    #[test]
    fn test_from_env_missing_secret_is_startup_error() {
        let _guard = env_lock();
        clear_auth_env();

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
        assert!(err.to_string().contains("AUTH_TOKEN_SECRET"));
    }

    #[test]
    fn test_from_env_empty_secret_is_startup_error() {
        let _guard = env_lock();
        clear_auth_env();
        env::set_var("AUTH_TOKEN_SECRET", "");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
        clear_auth_env();
    }

    #[test]
    fn test_from_env_defaults() {
        use secrecy::ExposeSecret;

        let _guard = env_lock();
        clear_auth_env();
        env::set_var("AUTH_TOKEN_SECRET", "env-secret-key-for-testing-32-bytes!");

        let config = Config::from_env().unwrap();
        assert_eq!(config.secret.expose_secret(), "env-secret-key-for-testing-32-bytes!");
        assert_eq!(config.default_ttl, Duration::from_secs(86400));
        assert_eq!(config.algorithm, TokenAlgorithm::HS256);
        clear_auth_env();
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = env_lock();
        clear_auth_env();
        env::set_var("AUTH_TOKEN_SECRET", "env-secret-key-for-testing-32-bytes!");
        env::set_var("AUTH_TOKEN_TTL", "15m");
        env::set_var("AUTH_TOKEN_ALGORITHM", "hs512");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_ttl, Duration::from_secs(900));
        assert_eq!(config.algorithm, TokenAlgorithm::HS512);
        clear_auth_env();
    }

    #[test]
    fn test_from_env_rejects_bad_ttl_and_algorithm() {
        let _guard = env_lock();
        clear_auth_env();
        env::set_var("AUTH_TOKEN_SECRET", "env-secret-key-for-testing-32-bytes!");

        env::set_var("AUTH_TOKEN_TTL", "soon");
        assert!(Config::from_env().is_err());
        env::remove_var("AUTH_TOKEN_TTL");

        env::set_var("AUTH_TOKEN_ALGORITHM", "RS256");
        assert!(Config::from_env().is_err());
        clear_auth_env();
    }
}
