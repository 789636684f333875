use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult, MAX_EMAIL_LEN, MAX_NICKNAME_LEN};

/// Email value object representing a player's contact address
///
/// # Invariants
/// - Must contain '@' character
/// - Stored lower-cased
/// - At most 120 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Returns
    /// * `Ok(Email)` - The normalised (lower-cased) address
    /// * `Err(DomainError::InvalidEmail)` - If the address has no '@'
    ///
    /// # Example
    /// ```
    /// use gamehive_api::domain::player::Email;
    ///
    /// let email = Email::new("Jack@Example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "jack@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> DomainResult<Self> {
        let email = email.into().to_lowercase();
        if !email.contains('@') {
            return Err(DomainError::InvalidEmail);
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(DomainError::FieldTooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        Ok(Email(email))
    }

    /// Wraps an address read back from storage without re-validating it
    pub(crate) fn from_persistence(email: String) -> Self {
        Email(email)
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player nickname, bounded by the column width
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(nickname: impl Into<String>) -> DomainResult<Self> {
        let nickname = nickname.into();
        if nickname.chars().count() > MAX_NICKNAME_LEN {
            return Err(DomainError::FieldTooLong {
                field: "nickname",
                max: MAX_NICKNAME_LEN,
            });
        }

        Ok(Nickname(nickname))
    }

    pub(crate) fn from_persistence(nickname: String) -> Self {
        Nickname(nickname)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
