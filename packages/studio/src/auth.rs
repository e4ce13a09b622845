//! Shared-password gate.
//!
//! One static credential for the whole tool, compared as plain text. There is
//! no hashing and no expiry beyond the process.

use crate::error::SessionError;

/// Check an operator's attempt against the configured password.
pub fn verify_password(configured: Option<&str>, attempt: &str) -> Result<(), SessionError> {
    let Some(expected) = configured else {
        return Err(SessionError::PasswordNotConfigured);
    };
    if attempt == expected {
        Ok(())
    } else {
        Err(SessionError::AccessDenied)
    }
}
