//! The registration form controller.
//!
//! [`RegistrationForm`] runs the submission state machine over any [`FormState`]. The
//! view hands it signals; every copy of the form refers to the same state, so a second
//! submit can start while the first is pending and is turned away by the
//! [`SubmitGuard`].

use api::AccountInfo;

use super::draft::{DraftError, Field, RegistrationDraft};
use super::services::{Navigation, RegistrationFailure, RegistrationService, HOME_ROUTE, LOGIN_ROUTE};
use super::state::FormState;

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Another attempt was still in flight; nothing changed.
    Busy,
    /// Local validation failed; no network call was made.
    Rejected(DraftError),
    /// The registration call failed.
    Failed(RegistrationFailure),
    /// The account was created and the login view was requested.
    Registered(AccountInfo),
}

/// Draft editing and submission on top of a [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationForm<S> {
    state: S,
}

impl<S: FormState> RegistrationForm<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn draft(&self) -> RegistrationDraft {
        self.state.draft()
    }

    pub fn value(&self, field: Field) -> String {
        self.state.draft().get(field).to_string()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.update_draft(|draft| draft.set(field, value));
    }

    /// Leave the form for the home view.
    pub fn go_home(&self, navigator: &impl Navigation) {
        navigator.navigate_to(HOME_ROUTE);
    }

    /// Run one submission attempt: local checks, then the registration call.
    pub async fn submit<R, N>(&self, service: &R, navigator: &N) -> Submission
    where
        R: RegistrationService,
        N: Navigation,
    {
        let Some(_guard) = SubmitGuard::acquire(&self.state) else {
            tracing::debug!("Ignoring submit while a registration is in flight");
            return Submission::Busy;
        };
        let mut state = self.state.clone();

        state.set_error(None);

        let draft = state.draft();
        if let Err(err) = draft.check() {
            tracing::debug!("Registration rejected locally: {}", err);
            state.set_error(Some(err.to_string()));
            return Submission::Rejected(err);
        }

        let RegistrationDraft {
            username,
            email,
            password,
            ..
        } = draft;

        match service.register(username, email, password).await {
            Ok(account) => {
                tracing::info!("Registered account {}", account.username);
                navigator.navigate_to(LOGIN_ROUTE);
                Submission::Registered(account)
            }
            Err(failure) => {
                tracing::warn!("Registration failed: {}", failure);
                state.set_error(Some(failure.message.clone()));
                Submission::Failed(failure)
            }
        }
    }
}

/// Holds the in-flight flag and releases it on drop.
pub struct SubmitGuard<S: FormState> {
    state: S,
}

impl<S: FormState> SubmitGuard<S> {
    /// Take the flag, or `None` if another attempt already holds it.
    pub fn acquire(state: &S) -> Option<Self> {
        if state.is_submitting() {
            return None;
        }
        let mut state = state.clone();
        state.set_submitting(true);
        Some(Self { state })
    }
}

impl<S: FormState> Drop for SubmitGuard<S> {
    fn drop(&mut self) {
        self.state.set_submitting(false);
    }
}
