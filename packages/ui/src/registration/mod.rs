//! # Registration — form state, password rules and submission
//!
//! Everything the register view needs that does not touch rendering:
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`validate_password`] | The five complexity rules, first violation wins |
//! | [`RegistrationDraft`] / [`Field`] | The four text inputs as one record |
//! | [`RegistrationForm`] | Field updates and the `submit` state machine over a [`FormState`] |
//! | [`SignalState`] / [`use_registration_form`] | Form state kept in the view's signals |
//! | [`RegistrationService`] / [`Navigation`] | The account API and the router, as traits |
//!
//! A submission attempt goes `Idle → Validating → Rejected | Submitting → Registered | Failed`.
//! Only `Registered` leaves the form; every other path returns to idle with the error
//! slot filled.

mod draft;
mod form;
mod password;
mod services;
mod state;

pub use draft::{DraftError, Field, RegistrationDraft};
pub use form::{RegistrationForm, SubmitGuard, Submission};
pub use password::{validate_password, PasswordError, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};
pub use services::{
    Navigation, RegistrationFailure, RegistrationService, RouterNavigation, ServerRegistration,
    HOME_ROUTE, LOGIN_ROUTE,
};
pub use state::{use_registration_form, FormState, SignalState};
