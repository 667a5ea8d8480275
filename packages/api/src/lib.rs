//! # API crate — shared fullstack server functions for Loop
//!
//! Defines the Dioxus server functions the frontend calls, along with the modules
//! they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`accounts`] | `server` | In-process account directory (lazy `OnceCell` singleton) and duplicate detection |
//! | [`auth`] | `server` | Argon2id password hashing |
//! | [`models`] | — | The server-side `Account` record and its client-safe projection (`AccountInfo`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[post(...)]` and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards the
//! call over HTTP.
//!
//! - **Registration**: `register`

use dioxus::prelude::*;

pub mod accounts;
pub mod auth;
pub mod models;

pub use models::AccountInfo;

/// Create a new account from a username, email and password.
///
/// Fails with a human-readable message when a field is blank or when the email or
/// username already belongs to an account.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<AccountInfo, ServerFnError> {
    use crate::accounts::{get_directory, AccountError, NewAccount};

    let new = NewAccount::parse(&username, &email)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Refuse duplicates before paying for the hash
    get_directory()
        .await
        .lock()
        .await
        .check_available(&new)
        .map_err(|e| {
            tracing::debug!("Registration refused for {}: {}", new.email, e);
            ServerFnError::new(e.to_string())
        })?;

    let password_hash = auth::hash_password(&password)
        .map_err(AccountError::Hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account = get_directory()
        .await
        .lock()
        .await
        .insert(new, password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("Registered account {} ({})", account.username, account.id);

    Ok(account.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    username: String,
    email: String,
    password: String,
) -> Result<AccountInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
