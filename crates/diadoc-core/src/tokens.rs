//! Session token type.

use std::fmt;

/// An opaque bearer credential issued by the login endpoint.
///
/// The token is the raw login response body, stored verbatim.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or persisting
    /// the token for a later bootstrap.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the server handed out an empty token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

impl PartialEq<&str> for SessionToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
