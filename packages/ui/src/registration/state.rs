//! Where the registration form keeps its draft, error slot and in-flight flag.

use dioxus::prelude::*;

use super::draft::RegistrationDraft;
use super::form::RegistrationForm;

/// Storage for the form's mutable state.
///
/// Implementations are cheap handles: clones refer to the same underlying state.
pub trait FormState: Clone {
    fn draft(&self) -> RegistrationDraft;
    fn update_draft(&mut self, update: impl FnOnce(&mut RegistrationDraft));
    fn error(&self) -> Option<String>;
    fn set_error(&mut self, error: Option<String>);
    fn is_submitting(&self) -> bool;
    fn set_submitting(&mut self, submitting: bool);
}

/// Form state held in Dioxus signals owned by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalState {
    pub draft: Signal<RegistrationDraft>,
    pub error: Signal<Option<String>>,
    pub submitting: Signal<bool>,
}

impl FormState for SignalState {
    fn draft(&self) -> RegistrationDraft {
        self.draft.cloned()
    }

    fn update_draft(&mut self, update: impl FnOnce(&mut RegistrationDraft)) {
        update(&mut self.draft.write());
    }

    fn error(&self) -> Option<String> {
        self.error.cloned()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error.set(error);
    }

    fn is_submitting(&self) -> bool {
        (self.submitting)()
    }

    fn set_submitting(&mut self, submitting: bool) {
        // The view may already be gone once navigation has happened
        if let Ok(mut flag) = self.submitting.try_write() {
            *flag = submitting;
        }
    }
}

/// Create a registration form whose state lives in the calling component.
pub fn use_registration_form() -> RegistrationForm<SignalState> {
    let draft = use_signal(RegistrationDraft::default);
    let error = use_signal(|| Option::<String>::None);
    let submitting = use_signal(|| false);

    RegistrationForm::new(SignalState {
        draft,
        error,
        submitting,
    })
}
