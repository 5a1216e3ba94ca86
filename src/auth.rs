//! Capability checks over an explicit [`Principal`].
//!
//! Credential verification lives outside this crate; what arrives here is the
//! already-resolved principal, or `None` when the request carried no valid
//! credential.

use thiserror::Error;

use crate::domain::Principal;

/// Failures raised before any store access happens.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("Insufficient privileges")]
    Forbidden,
}

/// Resolves the caller of an authenticated operation.
pub fn require_authenticated(principal: Option<&Principal>) -> Result<&Principal, AuthError> {
    principal.ok_or(AuthError::Unauthorized)
}

/// Resolves the caller of an admin-only operation.
pub fn require_admin(principal: Option<&Principal>) -> Result<&Principal, AuthError> {
    let principal = require_authenticated(principal)?;
    if principal.is_admin {
        Ok(principal)
    } else {
        Err(AuthError::Forbidden)
    }
}
