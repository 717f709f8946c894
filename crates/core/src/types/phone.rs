//! North American phone numbers as entered on the contact and booking forms.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input did not contain exactly ten digits.
    #[error("Please enter a valid phone number")]
    WrongLength {
        /// Number of digits found.
        digits: usize,
    },
}

/// A ten-digit phone number, displayed as `(555) 123-4567`.
///
/// Any punctuation in the input is ignored; only the digits count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Number of digits in a complete number.
    pub const DIGITS: usize = 10;

    /// Parse a phone number from free-form input.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::WrongLength`] unless the input has exactly ten digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::DIGITS {
            return Err(PhoneError::WrongLength {
                digits: digits.len(),
            });
        }
        Ok(Self { digits })
    }

    /// Returns the bare ten digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Format partially typed input the way the form does while typing.
    ///
    /// Non-digits are dropped. Input stays bare until ten digits are typed;
    /// from then on the first ten render as `(ddd) ddd-dddd` and any extra
    /// digits trail unformatted.
    #[must_use]
    pub fn format_partial(input: &str) -> String {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        match (digits.get(0..3), digits.get(3..6), digits.get(6..10)) {
            (Some(area), Some(exchange), Some(line)) => {
                format!("({area}) {exchange}-{line}{}", digits.get(10..).unwrap_or(""))
            }
            _ => digits,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::format_partial(&self.digits))
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let phone = PhoneNumber::parse("855.569.7568").unwrap();
        assert_eq!(phone.digits(), "8555697568");
        assert_eq!(phone.to_string(), "(855) 569-7568");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            PhoneNumber::parse("555-1234"),
            Err(PhoneError::WrongLength { digits: 7 })
        );
        assert!(PhoneNumber::parse("1 (855) 569-7568").is_err());
    }

    #[test]
    fn test_format_partial() {
        assert_eq!(PhoneNumber::format_partial("85"), "85");
        assert_eq!(PhoneNumber::format_partial("855"), "855");
        assert_eq!(PhoneNumber::format_partial("85556"), "85556");
        assert_eq!(PhoneNumber::format_partial("855569"), "855569");
        assert_eq!(PhoneNumber::format_partial("855-569-756"), "855569756");
        assert_eq!(PhoneNumber::format_partial("8555697568"), "(855) 569-7568");
        assert_eq!(PhoneNumber::format_partial("(855) 569-7568"), "(855) 569-7568");
        assert_eq!(PhoneNumber::format_partial("(855) 569-75681"), "(855) 569-75681");
    }

    #[test]
    fn test_serde_uses_display_form() {
        let phone = PhoneNumber::parse("8555697568").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"(855) 569-7568\"");
        let back: PhoneNumber = serde_json::from_str("\"(855) 569-7568\"").unwrap();
        assert_eq!(back, phone);
    }
}
