//! Phone number type.
//!
//! The phone number is the identity key for members and the join key from an
//! order's shipping details back to the membership directory.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not a digit (or a leading `+`).
    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A phone number.
///
/// This type provides basic validation for phone numbers as the shop collects
/// them: digits only, with an optional leading `+` for an international
/// prefix. No carrier or region semantics are attached.
///
/// ## Constraints
///
/// - Length: 1-20 characters
/// - Optional leading `+`
/// - All remaining characters must be ASCII digits
///
/// ## Examples
///
/// ```
/// use lychee_market_core::Phone;
///
/// assert!(Phone::parse("0912345678").is_ok());
/// assert!(Phone::parse("+886912345678").is_ok());
///
/// assert!(Phone::parse("").is_err());          // empty
/// assert!(Phone::parse("09-1234-5678").is_err()); // punctuation
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Maximum length of a phone number.
    pub const MAX_LENGTH: usize = 20;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 20 characters
    /// - Contains anything other than digits and an optional leading `+`
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let digits = s.strip_prefix('+').unwrap_or(s);
        if digits.is_empty() {
            return Err(PhoneError::InvalidCharacter('+'));
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacter(bad));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
