//! Shared-secret request authentication
//!
//! Every operation takes the raw `Authorization` header value and is checked
//! here before anything else runs. There are no sessions and no tokens to
//! issue or expire; the secret either matches or the operation is rejected.

use crate::error::{AppError, Result};

/// Guards operations behind the configured shared secret
pub struct AuthGuard {
    secret: String,
}

impl AuthGuard {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Reject the operation unless the header carries the shared secret.
    pub fn require(&self, authorization: Option<&str>) -> Result<()> {
        if self.validate(authorization) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    fn validate(&self, authorization: Option<&str>) -> bool {
        // An empty secret never matches
        if self.secret.is_empty() {
            return false;
        }

        let Some(header) = authorization else {
            return false;
        };

        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();
        token == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bearer_token() {
        let guard = AuthGuard::new("s3cret".to_string());
        assert!(guard.require(Some("Bearer s3cret")).is_ok());
    }

    #[test]
    fn test_accepts_bare_token() {
        let guard = AuthGuard::new("s3cret".to_string());
        assert!(guard.require(Some("s3cret")).is_ok());
    }

    #[test]
    fn test_trims_whitespace_around_token() {
        let guard = AuthGuard::new("s3cret".to_string());
        assert!(guard.require(Some("Bearer s3cret  ")).is_ok());
    }

    #[test]
    fn test_rejects_missing_header() {
        let guard = AuthGuard::new("s3cret".to_string());
        assert!(matches!(
            guard.require(None),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_rejects_wrong_token() {
        let guard = AuthGuard::new("s3cret".to_string());
        assert!(guard.require(Some("Bearer nope")).is_err());
    }

    #[test]
    fn test_empty_secret_rejects_everything() {
        let guard = AuthGuard::new(String::new());
        assert!(guard.require(Some("Bearer ")).is_err());
        assert!(guard.require(Some("")).is_err());
        assert!(guard.require(None).is_err());
    }
}
