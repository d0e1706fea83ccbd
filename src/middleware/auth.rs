use axum::http::HeaderMap;

use crate::auth::{Authenticator, Principal};
use crate::error::{auth::AuthError, AppError};

pub enum Permission {
    SuperAdmin,
}

/// Per-request guard over the bearer token in the `Authorization` header.
///
/// Controllers construct one from the request headers and call `require`
/// before doing any work; read-only public endpoints skip it.
pub struct AuthGuard<'a> {
    authenticator: &'a dyn Authenticator,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(authenticator: &'a dyn Authenticator, headers: &'a HeaderMap) -> Self {
        Self {
            authenticator,
            headers,
        }
    }

    pub fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let Some(header) = self.headers.get(axum::http::header::AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };
        let header = header.to_str().map_err(|_| AuthError::TokenMalformed)?;

        let Some(token) = header.strip_prefix("Bearer ") else {
            return Err(AuthError::TokenMalformed.into());
        };

        let principal = self.authenticator.authenticate(token)?;

        for permission in permissions {
            match permission {
                Permission::SuperAdmin => {
                    if !principal.is_super_admin() {
                        return Err(AuthError::NotSuperAdmin.into());
                    }
                }
            }
        }

        Ok(principal)
    }
}
