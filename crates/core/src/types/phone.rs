//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too short to be a phone number.
    #[error("phone number must have at least {min} digits")]
    TooShort {
        /// Minimum number of digits.
        min: usize,
    },
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not a digit, space, dash,
    /// parenthesis, or leading plus sign.
    #[error("phone number contains invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A phone number.
///
/// Stored as entered (formatting preserved), validated to contain only
/// digits plus common separators and at least [`Self::MIN_DIGITS`] digits.
///
/// ## Examples
///
/// ```
/// use wassalni_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+964 770 123 4567").is_ok());
/// assert!(PhoneNumber::parse("07701234567").is_ok());
///
/// assert!(PhoneNumber::parse("").is_err());      // empty
/// assert!(PhoneNumber::parse("12ab34").is_err()); // letters
/// assert!(PhoneNumber::parse("123").is_err());    // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum number of digits required.
    pub const MIN_DIGITS: usize = 7;

    /// Maximum length of a phone number string.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains characters
    /// other than digits and common separators, or has fewer than
    /// [`Self::MIN_DIGITS`] digits.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        if s.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        for (i, c) in s.chars().enumerate() {
            let valid = c.is_ascii_digit()
                || c == ' '
                || c == '-'
                || c == '('
                || c == ')'
                || (c == '+' && i == 0);
            if !valid {
                return Err(PhoneNumberError::InvalidCharacter(c));
            }
        }

        let digits = s.chars().filter(char::is_ascii_digit).count();
        if digits < Self::MIN_DIGITS {
            return Err(PhoneNumberError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PhoneNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PhoneNumber {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PhoneNumber {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("07701234567").is_ok());
        assert!(PhoneNumber::parse("+964 770 123 4567").is_ok());
        assert!(PhoneNumber::parse("(0770) 123-4567").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn test_parse_letters_rejected() {
        assert!(matches!(
            PhoneNumber::parse("0770abc4567"),
            Err(PhoneNumberError::InvalidCharacter('a'))
        ));
    }

    #[test]
    fn test_plus_only_allowed_at_start() {
        assert!(PhoneNumber::parse("+9647701234567").is_ok());
        assert!(matches!(
            PhoneNumber::parse("964+7701234567"),
            Err(PhoneNumberError::InvalidCharacter('+'))
        ));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            PhoneNumber::parse("123"),
            Err(PhoneNumberError::TooShort { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "1".repeat(40);
        assert!(matches!(
            PhoneNumber::parse(&long),
            Err(PhoneNumberError::TooLong { .. })
        ));
    }

    #[test]
    fn test_display_preserves_formatting() {
        let phone = PhoneNumber::parse("+964 770 123 4567").unwrap();
        assert_eq!(phone.to_string(), "+964 770 123 4567");
    }
}
