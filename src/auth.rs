//! Authentication boundary.
//!
//! Token issuance and verification live outside this crate; the application
//! only consumes an [`Authenticator`] that turns a bearer token into a
//! [`Principal`]. The shipped implementation validates a single configured
//! admin token; deployments substitute their own verifier.

use crate::error::auth::AuthError;

/// Authenticated caller identity.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
    pub super_admin: bool,
}

impl Principal {
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Validates tokens against a single configured admin secret.
pub struct StaticTokenAuthenticator {
    admin_token: String,
}

impl StaticTokenAuthenticator {
    pub fn new(admin_token: impl Into<String>) -> Self {
        Self {
            admin_token: admin_token.into(),
        }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::TokenMalformed);
        }
        if token != self.admin_token {
            return Err(AuthError::TokenInvalid);
        }
        Ok(Principal {
            subject: "admin".to_string(),
            super_admin: true,
        })
    }
}
