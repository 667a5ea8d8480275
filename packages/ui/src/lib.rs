//! This crate contains all shared UI for the workspace.

pub mod registration;
pub use registration::{
    use_registration_form, validate_password, Field, FormState, Navigation, PasswordError,
    RegistrationForm, RegistrationService, Submission,
};

pub mod views;
pub use views::RegisterView;
