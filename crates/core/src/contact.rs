//! Contact form validation.
//!
//! The form collects every field problem at once so the page can mark all
//! of them, instead of stopping at the first.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Email, PhoneNumber};

/// Minimum trimmed name length.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed message length.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Maximum message length.
pub const MESSAGE_MAX_CHARS: usize = 1000;
/// Length past which the character counter turns to a warning.
pub const MESSAGE_WARN_CHARS: usize = 800;

/// Raw contact form input.
///
/// Missing fields read as empty so validation can report them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: Email,
    pub phone: Option<PhoneNumber>,
    pub message: String,
}

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Message shown under the field.
    pub message: String,
}

/// All field failures for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded failures.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` if any failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<_> = self.errors.iter().map(|e| e.field).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a name field, reporting under `field`.
pub(crate) fn check_name(errors: &mut ValidationErrors, field: &'static str, name: &str) {
    if name.trim().chars().count() < NAME_MIN_CHARS {
        errors.push(field, "Name must be at least 2 characters");
    }
}

/// Validate an optional phone field, returning the parsed number.
fn check_optional_phone(
    errors: &mut ValidationErrors,
    phone: Option<&str>,
) -> Option<PhoneNumber> {
    let raw = phone.map(str::trim).filter(|p| !p.is_empty())?;
    match PhoneNumber::parse(raw) {
        Ok(phone) => Some(phone),
        Err(e) => {
            errors.push("phone", e.to_string());
            None
        }
    }
}

impl ContactForm {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns all field failures if any field is invalid.
    pub fn validate(&self) -> Result<ContactRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_name(&mut errors, "name", &self.name);

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("email", "Please enter a valid email address");
                None
            }
        };

        let phone = check_optional_phone(&mut errors, self.phone.as_deref());

        let message = self.message.trim();
        let length = message.chars().count();
        if length < MESSAGE_MIN_CHARS {
            errors.push("message", "Message must be at least 10 characters");
        } else if length > MESSAGE_MAX_CHARS {
            errors.push("message", "Message must be at most 1000 characters");
        }

        match email {
            Some(email) if errors.is_empty() => Ok(ContactRequest {
                name: self.name.trim().to_owned(),
                email,
                phone,
                message: message.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

/// Character counter shown under the message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterCount {
    pub count: usize,
    pub max: usize,
    /// Past the warning threshold.
    pub near_limit: bool,
}

impl CharacterCount {
    /// Count the characters in `message`.
    #[must_use]
    pub fn of(message: &str) -> Self {
        let count = message.chars().count();
        Self {
            count,
            max: MESSAGE_MAX_CHARS,
            near_limit: count > MESSAGE_WARN_CHARS,
        }
    }
}

impl fmt::Display for CharacterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.count, self.max)
    }
}
