//! Contact form message and validation.

use serde::Deserialize;
use thiserror::Error;

use organi_live_core::Email;

/// Per-field validation failures, worded as the form shows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Por favor ingresa tu nombre")]
    EmptyName,
    #[error("Por favor ingresa tu email")]
    EmptyEmail,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Por favor ingresa tu mensaje")]
    EmptyMessage,
}

/// A contact form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Validate the required fields. Phone is optional.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactValidationError::EmptyEmail);
        }
        // the form requires a dotted domain, matching the original check
        match Email::parse(&self.email) {
            Ok(email) if email.domain().contains('.') => {}
            _ => return Err(ContactValidationError::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(ContactValidationError::EmptyMessage);
        }
        Ok(())
    }
}
