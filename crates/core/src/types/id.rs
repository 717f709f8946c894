//! Stable identifiers for catalog entries.
//!
//! Catalog services are keyed by short human-readable slugs (`internet`,
//! `tv`, `phone`) taken from the page markup, so the identifier is a
//! validated string rather than a numeric database key.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ServiceId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceIdError {
    /// The input was empty or whitespace only.
    #[error("service id cannot be empty")]
    Empty,
    /// The input is longer than [`ServiceId::MAX_LENGTH`].
    #[error("service id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Identifier of a service in the catalog.
///
/// Guaranteed non-empty. Surrounding whitespace is trimmed on parse; the
/// remaining text is kept verbatim, so `"TV"` and `"tv"` are distinct ids.
///
/// ```
/// use black_cable_core::ServiceId;
///
/// let id = ServiceId::parse(" internet ").unwrap();
/// assert_eq!(id.as_str(), "internet");
/// assert!(ServiceId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceId(String);

impl ServiceId {
    /// Maximum accepted identifier length.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ServiceId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`].
    pub fn parse(s: &str) -> Result<Self, ServiceIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ServiceIdError::Empty);
        }
        if trimmed.len() > Self::MAX_LENGTH {
            return Err(ServiceIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ServiceId {
    type Err = ServiceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ServiceId {
    type Error = ServiceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
