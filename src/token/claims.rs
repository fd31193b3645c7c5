//! Caller-defined claim payloads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Claim names managed by the authority itself. Caller-supplied values
/// under these names are stripped at issuance so the authority's own
/// timestamps always win.
pub(crate) const RESERVED: &[&str] = &["iat", "exp"];

/// A caller-defined mapping from claim name to value, embedded in a
/// token at issuance and returned unchanged by validation.
///
/// The shape is opaque to the authority; the subject/role helpers only
/// cover the identity payload the login flow commonly embeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    values: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create an empty claims mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the common identity payload: a subject identifier plus a
    /// role claim.
    #[must_use]
    pub fn for_identity(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self::new()
            .with("sub", serde_json::Value::String(subject.into()))
            .with("role", serde_json::Value::String(role.into()))
    }

    /// Add a claim, replacing any existing value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Insert a claim in place.
    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.values.insert(name.into(), value);
    }

    /// Look up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    /// Get the subject identifier claim, if present as a string.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.values.get("sub").and_then(serde_json::Value::as_str)
    }

    /// Get the role claim, if present as a string.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.values.get("role").and_then(serde_json::Value::as_str)
    }

    /// Number of claims in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn strip_reserved(&mut self) {
        for name in RESERVED {
            self.values.remove(*name);
        }
    }
}

impl From<HashMap<String, serde_json::Value>> for Claims {
    fn from(values: HashMap<String, serde_json::Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, serde_json::Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
