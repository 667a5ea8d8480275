//! # Accounts module — in-process account directory
//!
//! Holds the accounts created through the `register` server function. It is gated
//! behind `#[cfg(feature = "server")]` so client (WASM) builds never pull in Tokio or
//! Argon2.
//!
//! The directory is a **lazy, process-wide singleton** behind a
//! [`tokio::sync::OnceCell`]; [`get_directory`] initialises it empty on first use.
//! Accounts live only as long as the server process.
//!
//! - [`AccountDirectory`] — duplicate detection and insertion.
//! - [`NewAccount`] — normalised registration input (trimmed username, lowercased email).
//! - [`AccountError`] — every way registration can be refused.

#[cfg(feature = "server")]
mod directory;

#[cfg(feature = "server")]
pub use directory::{get_directory, AccountDirectory, AccountError, NewAccount};
