//! Credential format validation
//!
//! Pure functions, called from the input handlers and again on submit.
//! The same input always yields the same result; no timers or effect state.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Password length bounds enforced by the authorization server.
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 64;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Local format mismatch; never sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameEmpty,
    #[error("Username may only contain letters, digits and underscores")]
    UsernameFormat,
    #[error("Password is required")]
    PasswordEmpty,
    #[error("Password is too short")]
    PasswordTooShort,
    #[error("Password is too long")]
    PasswordTooLong,
    #[error("Password must contain at least one letter and one digit")]
    PasswordTooSimple,
}

/// Usernames are `^[A-Za-z0-9_]+$`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(ValidationError::UsernameFormat);
    }
    Ok(())
}

/// Passwords are 8..=64 characters with at least one ASCII letter and one
/// ASCII digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordEmpty);
    }
    let length = password.chars().count();
    if length < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if length > PASSWORD_MAX_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::PasswordTooSimple);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordTooSimple);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_usernames() {
        for name in ["alice_01", "Bob", "x", "under_score_", "1234"] {
            assert_eq!(validate_username(name), Ok(()), "rejected {name:?}");
        }
    }

    #[test]
    fn rejects_invalid_usernames() {
        assert_eq!(validate_username(""), Err(ValidationError::UsernameEmpty));
        for name in ["alice!", "has space", "dash-ed", "ümlaut", "a.b"] {
            assert_eq!(
                validate_username(name),
                Err(ValidationError::UsernameFormat),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn accepts_valid_passwords() {
        for password in ["Sup3rSecret!", "abcdefg1", "1234567a", "pa55 word"] {
            assert_eq!(validate_password(password), Ok(()), "rejected {password:?}");
        }
    }

    #[test]
    fn rejects_short_passwords() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordEmpty));
        assert_eq!(
            validate_password("a1"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("abc1234"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn rejects_overlong_passwords() {
        let too_long = format!("a1{}", "x".repeat(PASSWORD_MAX_LENGTH));
        assert_eq!(
            validate_password(&too_long),
            Err(ValidationError::PasswordTooLong)
        );
    }

    #[test]
    fn rejects_passwords_without_letter_and_digit() {
        assert_eq!(
            validate_password("12345678"),
            Err(ValidationError::PasswordTooSimple)
        );
        assert_eq!(
            validate_password("abcdefgh"),
            Err(ValidationError::PasswordTooSimple)
        );
        assert_eq!(
            validate_password("!!!!!!!!"),
            Err(ValidationError::PasswordTooSimple)
        );
    }

    #[test]
    fn validation_is_idempotent() {
        for input in ["alice_01", "bad name", ""] {
            assert_eq!(validate_username(input), validate_username(input));
        }
        for input in ["Sup3rSecret!", "short1", ""] {
            assert_eq!(validate_password(input), validate_password(input));
        }
    }
}
