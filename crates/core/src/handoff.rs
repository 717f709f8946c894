//! Hand-off of a finished bundle from the configurator to the contact flow.
//!
//! At checkout the selection is written to a single named slot as JSON
//! (`[[id, service], ...]`). The contact flow reads the slot later, and
//! anything it cannot make sense of means "no prior selection".

use serde::Serialize;

use crate::bundle::{BundleSelection, Quote};

/// Name of the slot the payload is stored under.
pub const HANDOFF_SLOT: &str = "selected_bundle";

/// Encoding and decoding of the hand-off payload.
pub struct HandoffPayload;

impl HandoffPayload {
    /// Encode a selection as the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails, which does not
    /// happen for well-formed selections.
    pub fn encode(selection: &BundleSelection) -> serde_json::Result<String> {
        serde_json::to_string(selection)
    }

    /// Decode a payload read back from the slot.
    ///
    /// Returns `None` for malformed JSON, invalid records, and empty
    /// selections alike.
    #[must_use]
    pub fn decode(raw: &str) -> Option<BundleSelection> {
        serde_json::from_str::<BundleSelection>(raw)
            .ok()
            .filter(|selection| !selection.is_empty())
    }

    /// Decode a payload that has already been parsed as JSON.
    #[must_use]
    pub fn decode_value(value: serde_json::Value) -> Option<BundleSelection> {
        serde_json::from_value::<BundleSelection>(value)
            .ok()
            .filter(|selection| !selection.is_empty())
    }
}

/// One line of the bundle summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// Service name.
    pub name: String,
    /// Monthly price, e.g. `$49.99`.
    pub price: String,
}

/// Display summary and pre-filled message for the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    /// Selected services in order.
    pub lines: Vec<SummaryLine>,
    /// Discount line, present only when a discount applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    /// Regular (undiscounted) price.
    pub subtotal: String,
    /// Discounted monthly total.
    pub total: String,
    /// Free-text message to pre-fill.
    pub message: String,
}

impl ContactSummary {
    /// Build the summary for a selection, or `None` if it is empty.
    #[must_use]
    pub fn from_selection(selection: &BundleSelection) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }

        let quote: Quote = selection.quote();
        let lines = selection
            .iter()
            .map(|service| SummaryLine {
                name: service.name.clone(),
                price: service.price.to_string(),
            })
            .collect();

        let bullet_list = selection
            .iter()
            .map(|service| format!("• {}", service.name))
            .collect::<Vec<_>>()
            .join("\n");
        let total = quote.display_total();
        let message = format!(
            "Hi! I'm interested in the bundle I configured on your website:\n\n\
             {bullet_list}\n\n\
             Total: {total}/month\n\n\
             Please contact me to get started!"
        );

        Some(Self {
            lines,
            discount: quote.has_discount().then(|| quote.display_discount()),
            subtotal: quote.display_subtotal(),
            total,
            message,
        })
    }
}
