//! Support flows: agent chat, connection diagnostics, and technician booking.

use core::fmt;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::contact::{ValidationErrors, check_name};
use crate::types::PhoneNumber;

/// Support line shown in chat replies and diagnostic results.
pub const SUPPORT_PHONE: &str = "(855) 569-7568";

// =============================================================================
// Chat
// =============================================================================

/// Which support desk a chat is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Sales,
    Technical,
    Billing,
    /// Any other desk name, kept as given (trimmed).
    Other(String),
}

impl AgentKind {
    /// Parse a desk name from a button's data attribute or a path segment.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let name = s.trim();
        match name.to_lowercase().as_str() {
            "sales" => Self::Sales,
            "technical" | "tech" => Self::Technical,
            "billing" => Self::Billing,
            _ => Self::Other(name.to_owned()),
        }
    }

    /// Desk name used inside sentences; lowercase for the known desks.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sales => "sales",
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Other(name) => name,
        }
    }

    /// Chat window title, e.g. `Chat with Billing Support`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        let capitalized: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("Chat with {capitalized} Support")
    }

    /// First message from the agent when the chat opens.
    #[must_use]
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm here to help you with {} support. What can I assist you with today?",
            self.as_str()
        )
    }

    /// Canned agent reply to any visitor message.
    #[must_use]
    pub fn auto_reply(&self) -> String {
        format!(
            "Thanks for your message! For immediate assistance, please call us at {SUPPORT_PHONE}. \
             Our team will be happy to help you with your {} needs.",
            self.as_str()
        )
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    Agent,
    Visitor,
}

/// A message in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

impl ChatMessage {
    /// A visitor message, or `None` if it is blank.
    #[must_use]
    pub fn visitor(text: &str) -> Option<Self> {
        let text = text.trim();
        (!text.is_empty()).then(|| Self {
            author: ChatAuthor::Visitor,
            text: text.to_owned(),
        })
    }

    /// An agent message.
    #[must_use]
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            author: ChatAuthor::Agent,
            text: text.into(),
        }
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Connection checks run by the troubleshooting wizard, in order.
pub const DIAGNOSTIC_STEPS: [&str; 4] = [
    "Checking your connection status...",
    "Running speed diagnostics...",
    "Analyzing network performance...",
    "Identifying potential issues...",
];

/// One step of a diagnostic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticStep {
    pub index: usize,
    pub message: &'static str,
    /// Progress bar fill once this step completes.
    pub progress_percent: u8,
}

/// Result of a diagnostic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub steps: Vec<DiagnosticStep>,
    pub issue_detected: bool,
    pub summary: String,
    pub support_phone: &'static str,
}

/// Percentage of the wizard completed after `completed` steps.
#[must_use]
pub fn diagnostic_progress(completed: usize) -> u8 {
    let total = DIAGNOSTIC_STEPS.len();
    let done = completed.min(total);
    u8::try_from(done * 100 / total).unwrap_or(100)
}

impl DiagnosticReport {
    /// Run the scripted diagnostics.
    ///
    /// The script always ends by reporting a connectivity issue and pointing
    /// the visitor at a technician.
    #[must_use]
    pub fn run() -> Self {
        let steps = DIAGNOSTIC_STEPS
            .iter()
            .enumerate()
            .map(|(index, message)| DiagnosticStep {
                index,
                message,
                progress_percent: diagnostic_progress(index + 1),
            })
            .collect();

        Self {
            steps,
            issue_detected: true,
            summary: "We found some connectivity issues. Our technician can resolve this \
                      remotely or schedule a visit."
                .to_owned(),
            support_phone: SUPPORT_PHONE,
        }
    }
}

// =============================================================================
// Technician booking
// =============================================================================

/// Visit window offered on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Human-readable window.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (8AM - 12PM)",
            Self::Afternoon => "Afternoon (12PM - 5PM)",
            Self::Evening => "Evening (5PM - 8PM)",
        }
    }
}

/// Raw booking form input.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingForm {
    pub customer_name: String,
    pub customer_phone: String,
    /// `YYYY-MM-DD`.
    pub preferred_date: String,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_phone: PhoneNumber,
    pub preferred_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub notes: Option<String>,
}

impl BookingForm {
    /// Validate the form against today's date.
    ///
    /// # Errors
    ///
    /// Returns all field failures if any field is invalid.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_name(&mut errors, "customer_name", &self.customer_name);

        let phone = match PhoneNumber::parse(&self.customer_phone) {
            Ok(phone) => Some(phone),
            Err(e) => {
                errors.push("customer_phone", e.to_string());
                None
            }
        };

        let date = match NaiveDate::parse_from_str(self.preferred_date.trim(), "%Y-%m-%d") {
            Ok(date) if date < today => {
                errors.push("preferred_date", "Please choose today or a later date");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("preferred_date", "Please choose a valid date");
                None
            }
        };

        match (phone, date) {
            (Some(customer_phone), Some(preferred_date)) if errors.is_empty() => {
                Ok(BookingRequest {
                    customer_name: self.customer_name.trim().to_owned(),
                    customer_phone,
                    preferred_date,
                    time_slot: self.time_slot,
                    notes: self
                        .notes
                        .as_deref()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .map(str::to_owned),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Reference number handed to the customer, e.g. `TCH042917`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct BookingReference(u32);

impl BookingReference {
    const MODULUS: u32 = 1_000_000;

    /// Build a reference from the low six digits of `number`.
    #[must_use]
    pub const fn from_number(number: u32) -> Self {
        Self(number % Self::MODULUS)
    }

    /// Draw a random reference.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(0..Self::MODULUS))
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TCH{:06}", self.0)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.to_string()
    }
}

/// Confirmation shown after a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub reference: BookingReference,
    pub preferred_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub message: String,
}

impl BookingConfirmation {
    /// Confirm a validated booking under `reference`.
    #[must_use]
    pub fn new(request: &BookingRequest, reference: BookingReference) -> Self {
        let message = format!(
            "Your technician visit has been scheduled for {} during {}. \
             We'll call you at {} to confirm the exact time.",
            request.preferred_date.format("%Y-%m-%d"),
            request.time_slot.label(),
            request.customer_phone,
        );
        Self {
            reference,
            preferred_date: request.preferred_date,
            time_slot: request.time_slot,
            message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn booking_form() -> BookingForm {
        BookingForm {
            customer_name: "Sam Ortiz".to_owned(),
            customer_phone: "8555697568".to_owned(),
            preferred_date: "2026-03-14".to_owned(),
            time_slot: TimeSlot::Afternoon,
            notes: Some("  ".to_owned()),
        }
    }

    #[test]
    fn test_agent_kind_parse() {
        assert_eq!(AgentKind::parse("Sales"), AgentKind::Sales);
        assert_eq!(AgentKind::parse("tech"), AgentKind::Technical);
        assert_eq!(AgentKind::parse(" BILLING "), AgentKind::Billing);
        assert_eq!(
            AgentKind::parse(" Moving "),
            AgentKind::Other("Moving".to_owned())
        );
    }

    #[test]
    fn test_other_desk_used_verbatim() {
        let kind = AgentKind::parse("Moving");
        assert_eq!(kind.title(), "Chat with Moving Support");
        assert_eq!(
            kind.greeting(),
            "Hi! I'm here to help you with Moving support. What can I assist you with today?"
        );
        assert!(kind.auto_reply().ends_with("help you with your Moving needs."));
    }

    #[test]
    fn test_chat_text() {
        let kind = AgentKind::Billing;
        assert_eq!(kind.title(), "Chat with Billing Support");
        assert_eq!(
            kind.greeting(),
            "Hi! I'm here to help you with billing support. What can I assist you with today?"
        );
        assert_eq!(
            kind.auto_reply(),
            "Thanks for your message! For immediate assistance, please call us at (855) 569-7568. \
             Our team will be happy to help you with your billing needs."
        );
        assert_eq!(AgentKind::Other(String::new()).title(), "Chat with  Support");
    }

    #[test]
    fn test_blank_visitor_message_ignored() {
        assert!(ChatMessage::visitor("  \n").is_none());
        assert_eq!(ChatMessage::visitor(" hi ").unwrap().text, "hi");
    }

    #[test]
    fn test_diagnostic_progress() {
        assert_eq!(diagnostic_progress(0), 0);
        assert_eq!(diagnostic_progress(1), 25);
        assert_eq!(diagnostic_progress(4), 100);
        assert_eq!(diagnostic_progress(9), 100);
    }

    #[test]
    fn test_diagnostic_report() {
        let report = DiagnosticReport::run();
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[0].message, "Checking your connection status...");
        assert_eq!(report.steps[3].progress_percent, 100);
        assert!(report.issue_detected);
    }

    #[test]
    fn test_time_slot_labels() {
        assert_eq!(TimeSlot::Morning.label(), "Morning (8AM - 12PM)");
        assert_eq!(TimeSlot::Evening.label(), "Evening (5PM - 8PM)");
        let slot: TimeSlot = serde_json::from_str("\"afternoon\"").unwrap();
        assert_eq!(slot, TimeSlot::Afternoon);
    }

    #[test]
    fn test_booking_today_allowed() {
        let request = booking_form().validate(today()).unwrap();
        assert_eq!(request.preferred_date, today());
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_booking_past_date_rejected() {
        let mut form = booking_form();
        form.preferred_date = "2026-03-13".to_owned();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(
            errors.for_field("preferred_date"),
            Some("Please choose today or a later date")
        );
    }

    #[test]
    fn test_booking_collects_errors() {
        let form = BookingForm {
            customer_name: "S".to_owned(),
            customer_phone: "555".to_owned(),
            preferred_date: "next tuesday".to_owned(),
            time_slot: TimeSlot::Morning,
            notes: None,
        };
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert_eq!(
            errors.for_field("customer_name"),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.for_field("preferred_date"),
            Some("Please choose a valid date")
        );
    }

    #[test]
    fn test_reference_format() {
        assert_eq!(BookingReference::from_number(42).to_string(), "TCH000042");
        assert_eq!(
            BookingReference::from_number(1_234_567).to_string(),
            "TCH234567"
        );

        let mut rng = StdRng::seed_from_u64(7);
        let generated = BookingReference::generate(&mut rng).to_string();
        assert_eq!(generated.len(), 9);
        assert!(generated.starts_with("TCH"));
    }

    #[test]
    fn test_confirmation_message() {
        let request = booking_form().validate(today()).unwrap();
        let confirmation = BookingConfirmation::new(&request, BookingReference::from_number(7));
        assert_eq!(
            confirmation.message,
            "Your technician visit has been scheduled for 2026-03-14 during \
             Afternoon (12PM - 5PM). We'll call you at (855) 569-7568 to confirm the exact time."
        );
        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["reference"], "TCH000007");
    }
}
