//! Shared secret guarding the admin routes.

use std::fmt;
use std::sync::Arc;

use subtle::ConstantTimeEq;

/// Configured admin bearer token.
///
/// An unconfigured token rejects every admin request. Cloning is cheap.
#[derive(Clone, Default)]
pub struct AdminToken {
    secret: Option<Arc<str>>,
}

impl AdminToken {
    /// Creates a token from an optional secret; empty secrets count as unconfigured.
    pub fn new(secret: Option<&str>) -> Self {
        let secret = secret.map(str::trim).filter(|s| !s.is_empty());
        Self {
            secret: secret.map(Arc::from),
        }
    }

    /// Returns whether an admin secret is configured.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Compares a presented token against the secret in constant time.
    pub fn matches(&self, presented: &str) -> bool {
        self.secret
            .as_deref()
            .is_some_and(|secret| secret.as_bytes().ct_eq(presented.as_bytes()).into())
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminToken")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_token_matches_nothing() {
        let token = AdminToken::new(None);
        assert!(!token.is_configured());
        assert!(!token.matches(""));

        let blank = AdminToken::new(Some("   "));
        assert!(!blank.is_configured());
    }

    #[test]
    fn configured_token_matches_exactly() {
        let token = AdminToken::new(Some("s3cret"));
        assert!(token.matches("s3cret"));
        assert!(!token.matches("s3cre"));
        assert!(!token.matches("S3cret"));
        assert!(!token.matches("s3cret "));
        assert!(!token.matches(""));
    }

    #[test]
    fn debug_hides_secret() {
        let token = AdminToken::new(Some("s3cret"));
        assert!(!format!("{token:?}").contains("s3cret"));
    }
}
