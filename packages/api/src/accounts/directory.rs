//! Account directory using the OnceCell pattern.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tokio::sync::{Mutex, OnceCell};
use uuid::Uuid;

use crate::models::Account;

static DIRECTORY: OnceCell<Mutex<AccountDirectory>> = OnceCell::const_new();

/// Get or initialize the process-wide account directory.
pub async fn get_directory() -> &'static Mutex<AccountDirectory> {
    DIRECTORY
        .get_or_init(|| async { Mutex::new(AccountDirectory::default()) })
        .await
}

/// Reasons an account cannot be created.
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Email is required")]
    MissingEmail,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Username already taken")]
    UsernameTaken,
    #[error("{0}")]
    Hash(String),
}

/// Registration input after normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
}

impl NewAccount {
    /// Trim both fields and lowercase the email. Blank fields are refused.
    pub fn parse(username: &str, email: &str) -> Result<Self, AccountError> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if username.is_empty() {
            return Err(AccountError::MissingUsername);
        }
        if email.is_empty() {
            return Err(AccountError::MissingEmail);
        }

        Ok(Self {
            username: username.to_string(),
            email,
        })
    }
}

/// Accounts keyed by email, with a username index for uniqueness.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    by_email: HashMap<String, Account>,
    usernames: HashSet<String>,
}

impl AccountDirectory {
    /// Check whether `new` would collide with an existing account.
    pub fn check_available(&self, new: &NewAccount) -> Result<(), AccountError> {
        if self.by_email.contains_key(&new.email) {
            return Err(AccountError::EmailTaken);
        }
        if self.usernames.contains(&new.username) {
            return Err(AccountError::UsernameTaken);
        }
        Ok(())
    }

    /// Insert a new account with an already computed password hash.
    pub fn insert(
        &mut self,
        new: NewAccount,
        password_hash: String,
    ) -> Result<Account, AccountError> {
        self.check_available(&new)?;

        let account = Account {
            id: Uuid::new_v4(),
            username: new.username,
            email: new.email,
            password_hash,
        };
        self.usernames.insert(account.username.clone());
        self.by_email.insert(account.email.clone(), account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(username: &str, email: &str) -> NewAccount {
        NewAccount::parse(username, email).unwrap()
    }

    #[test]
    fn test_parse_normalises_input() {
        let new = new_account("  looper ", " Looper@Example.COM ");
        assert_eq!(new.username, "looper");
        assert_eq!(new.email, "looper@example.com");
    }

    #[test]
    fn test_parse_rejects_blank_fields() {
        assert_eq!(
            NewAccount::parse("   ", "a@b.c"),
            Err(AccountError::MissingUsername)
        );
        assert_eq!(
            NewAccount::parse("looper", " "),
            Err(AccountError::MissingEmail)
        );
    }

    #[test]
    fn test_insert_reserves_email_and_username() {
        let mut directory = AccountDirectory::default();
        let new = new_account("looper", "looper@example.com");
        assert_eq!(directory.check_available(&new), Ok(()));

        let account = directory.insert(new.clone(), "hash".into()).unwrap();
        assert_eq!(account.username, "looper");
        assert_eq!(account.email, "looper@example.com");
        assert_eq!(account.password_hash, "hash");

        assert_eq!(
            directory.check_available(&new),
            Err(AccountError::EmailTaken)
        );
        assert_eq!(
            directory.check_available(&new_account("looper", "fresh@example.com")),
            Err(AccountError::UsernameTaken)
        );
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut directory = AccountDirectory::default();
        directory
            .insert(new_account("first", "same@example.com"), "h1".into())
            .unwrap();

        let err = directory
            .insert(new_account("second", "Same@Example.com"), "h2".into())
            .unwrap_err();
        assert_eq!(err, AccountError::EmailTaken);
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut directory = AccountDirectory::default();
        directory
            .insert(new_account("looper", "one@example.com"), "h1".into())
            .unwrap();

        let err = directory
            .insert(new_account("looper", "two@example.com"), "h2".into())
            .unwrap_err();
        assert_eq!(err, AccountError::UsernameTaken);
        // The refused email stays free
        assert_eq!(
            directory.check_available(&new_account("other", "two@example.com")),
            Ok(())
        );
    }

    #[test]
    fn test_hash_failure_message_passes_through() {
        let err = AccountError::Hash("Failed to hash password: invalid salt".into());
        assert_eq!(err.to_string(), "Failed to hash password: invalid salt");
    }

    #[tokio::test]
    async fn test_shared_directory_is_singleton() {
        let first = get_directory().await as *const _;
        let second = get_directory().await as *const _;
        assert_eq!(first, second);
    }
}
