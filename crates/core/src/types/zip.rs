//! US ZIP codes for the coverage checker.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ZipCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ZipCodeError {
    /// Fewer than five digits remained after sanitizing.
    #[error("Please enter a valid 5-digit ZIP code")]
    TooShort {
        /// Number of digits found.
        digits: usize,
    },
}

/// A five-digit ZIP code.
///
/// Input is sanitized the way the ZIP field does it: non-digits are dropped
/// and the result is cut to five digits before validation.
///
/// ```
/// use black_cable_core::ZipCode;
///
/// assert_eq!(ZipCode::parse("10001-1234").unwrap().as_str(), "10001");
/// assert!(ZipCode::parse("1000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    /// Number of digits in a ZIP code.
    pub const LENGTH: usize = 5;

    /// Sanitize and parse a ZIP code.
    ///
    /// # Errors
    ///
    /// Returns [`ZipCodeError::TooShort`] if fewer than five digits are present.
    pub fn parse(s: &str) -> Result<Self, ZipCodeError> {
        let digits: String = s
            .chars()
            .filter(char::is_ascii_digit)
            .take(Self::LENGTH)
            .collect();
        if digits.len() != Self::LENGTH {
            return Err(ZipCodeError::TooShort {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// Returns the ZIP code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ZipCode {
    type Err = ZipCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = ZipCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}
