//! The in-progress registration data.

use super::password::{validate_password, PasswordError};
use thiserror::Error;

/// One of the four text inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Errors detected before any network access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error(transparent)]
    WeakPassword(#[from] PasswordError),
}

/// Unsaved form data, held only while the form is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace one field's value. The other fields are left untouched.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    /// Local checks run at submit time: confirmation first, then complexity.
    pub fn check(&self) -> Result<(), DraftError> {
        if self.password != self.confirm_password {
            return Err(DraftError::PasswordMismatch);
        }
        validate_password(&self.password)?;
        Ok(())
    }
}
