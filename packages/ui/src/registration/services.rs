//! Collaborators the registration form talks to: the account API and the router.

use std::fmt;
use std::future::Future;

use api::AccountInfo;
use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Home view, reached from the "Have a Loop" button.
pub const HOME_ROUTE: &str = "/";
/// Login view, reached after a successful registration.
pub const LOGIN_ROUTE: &str = "/login";

/// A rejected registration call, carrying the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFailure {
    pub message: String,
}

impl RegistrationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RegistrationFailure {}

impl From<ServerFnError> for RegistrationFailure {
    fn from(err: ServerFnError) -> Self {
        match err {
            // Rejections raised by the server function carry the reason verbatim
            ServerFnError::ServerError { message, .. } => Self { message },
            other => Self {
                message: other.to_string(),
            },
        }
    }
}

/// Async interface for creating an account.
pub trait RegistrationService {
    fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<AccountInfo, RegistrationFailure>>;
}

/// Synchronous, fire-and-forget navigation.
pub trait Navigation {
    fn navigate_to(&self, path: &str);
}

/// Registration through the `api::register` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRegistration;

impl RegistrationService for ServerRegistration {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<AccountInfo, RegistrationFailure> {
        api::register(username, email, password)
            .await
            .map_err(RegistrationFailure::from)
    }
}

/// Navigation through the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigation(pub Navigator);

impl Navigation for RouterNavigation {
    fn navigate_to(&self, path: &str) {
        self.0.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_displays_message_verbatim() {
        let failure = RegistrationFailure::new("Email already registered");
        assert_eq!(failure.to_string(), "Email already registered");
    }

    #[test]
    fn test_server_rejection_keeps_exact_message() {
        let failure = RegistrationFailure::from(ServerFnError::new("Email already registered"));
        assert_eq!(failure.message, "Email already registered");

        let failure = RegistrationFailure::from(ServerFnError::new("Username already taken"));
        assert_eq!(failure.to_string(), "Username already taken");
    }

    #[test]
    fn test_transport_error_uses_display_text() {
        let err = ServerFnError::Deserialization("unexpected end of body".into());
        let expected = err.to_string();

        let failure = RegistrationFailure::from(err);
        assert_eq!(failure.message, expected);
        assert!(failure.message.contains("unexpected end of body"));
    }
}
