//! Local (username + email + password) account authentication.

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::hash_password;
