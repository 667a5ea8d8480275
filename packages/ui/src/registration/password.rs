//! Password complexity rules.
//!
//! Rules are checked in a fixed order and only the first violation is reported.

use thiserror::Error;

/// Minimum number of characters a password must have.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// The first complexity rule a password violates.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error("Password must contain at least one uppercase letter.")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter.")]
    MissingLowercase,
    #[error("Password must contain at least one number.")]
    MissingNumber,
    #[error("Password must contain at least one special character.")]
    MissingSpecialCharacter,
}

/// Check a candidate password against the complexity rules.
///
/// Length is measured in UTF-16 code units, the unit browsers report for an
/// input's value, so a character outside the Basic Multilingual Plane counts twice.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingNumber);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(PasswordError::MissingSpecialCharacter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert_eq!(validate_password("Abcdef1!"), Ok(()));
    }

    #[test]
    fn test_short_passwords_report_length_first() {
        for password in ["", "A", "Ab1!", "Abcde1!", "!!!!!!!", "aaaaaaa"] {
            assert_eq!(validate_password(password), Err(PasswordError::TooShort));
        }
    }

    #[test]
    fn test_empty_password_is_too_short() {
        let err = validate_password("").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters long.");
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // Four two-byte characters: 8 bytes but only 4 units
        assert_eq!(validate_password("éééé"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("Aé1!abcd"), Ok(()));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // 6 characters, 8 UTF-16 units
        assert_eq!(validate_password("Ab1!😀😀"), Ok(()));
        // 5 characters, 6 UTF-16 units
        assert_eq!(validate_password("Ab1!😀"), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_missing_uppercase_wins_over_later_rules() {
        // Also lacks a number and a special character
        assert_eq!(
            validate_password("abcdefgh"),
            Err(PasswordError::MissingUppercase)
        );
        assert_eq!(
            validate_password("12345678"),
            Err(PasswordError::MissingUppercase)
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            validate_password("ABCDEFG1"),
            Err(PasswordError::MissingLowercase)
        );
    }

    #[test]
    fn test_missing_number() {
        assert_eq!(
            validate_password("Abcdefg!"),
            Err(PasswordError::MissingNumber)
        );
    }

    #[test]
    fn test_missing_special_character() {
        assert_eq!(
            validate_password("Abcdefg1"),
            Err(PasswordError::MissingSpecialCharacter)
        );
        // Characters outside the set do not count
        assert_eq!(
            validate_password("Abcdef1-_+=~"),
            Err(PasswordError::MissingSpecialCharacter)
        );
    }

    #[test]
    fn test_every_special_character_is_accepted() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdef1{c}");
            assert_eq!(validate_password(&password), Ok(()), "rejected {c}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PasswordError::MissingLowercase.to_string(),
            "Password must contain at least one lowercase letter."
        );
        assert_eq!(
            PasswordError::MissingNumber.to_string(),
            "Password must contain at least one number."
        );
        assert_eq!(
            PasswordError::MissingSpecialCharacter.to_string(),
            "Password must contain at least one special character."
        );
    }
}
