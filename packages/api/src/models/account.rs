//! # Account model for registered users
//!
//! Two representations of a Loop account:
//!
//! ## [`Account`] (server only)
//!
//! The full record kept by the account directory: a `UUID v4` id, the trimmed
//! username, the lowercased email and the Argon2 `password_hash` in PHC format.
//! [`Account::to_info`] projects it into an [`AccountInfo`].
//!
//! ## [`AccountInfo`]
//!
//! The client-safe subset returned by the `register` server function. It omits the
//! password hash and carries the id as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use uuid::Uuid;

/// Full account record held by the directory.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(feature = "server")]
impl Account {
    /// Convert to AccountInfo for client consumption.
    pub fn to_info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    pub id: String,
    pub username: String,
    pub email: String,
}
