//! Black Cable Core - domain library for the Black Cable site.
//!
//! This crate holds everything the site knows about its products, with no
//! I/O of its own:
//! - `storefront` - JSON API behind the marketing site
//! - `cli` - Command-line tools for quoting bundles and checking coverage
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for service IDs, prices, emails, phones, and ZIP codes
//! - [`catalog`] - The services on offer
//! - [`bundle`] - Bundle selection and tiered discount pricing
//! - [`handoff`] - Carrying a finished bundle into the contact flow
//! - [`coverage`] - ZIP and map based availability
//! - [`contact`] - Contact form validation
//! - [`support`] - Agent chat, diagnostics, and technician booking
//!
//! # Example
//!
//! ```
//! use black_cable_core::{BundleSelection, Catalog};
//!
//! let catalog = Catalog::standard();
//! let mut selection = BundleSelection::new();
//! for id in ["internet", "tv"] {
//!     if let Some(service) = catalog.get(id) {
//!         selection.add(service.clone());
//!     }
//! }
//!
//! let quote = selection.quote();
//! assert_eq!(quote.display_subtotal(), "$89.98");
//! assert_eq!(quote.display_total(), "$80.98");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bundle;
pub mod catalog;
pub mod contact;
pub mod coverage;
pub mod handoff;
pub mod support;
pub mod types;

pub use bundle::{BundleSelection, DiscountTier, Quote, SelectionError};
pub use catalog::{Catalog, CatalogError, Service};
pub use contact::{CharacterCount, ContactForm, ContactRequest, FieldError, ValidationErrors};
pub use coverage::{CoverageLookup, CoverageMap, CoverageResult, CoverageZone, StaticCoverageTable};
pub use handoff::{ContactSummary, HANDOFF_SLOT, HandoffPayload};
pub use support::{
    AgentKind, BookingConfirmation, BookingForm, BookingReference, BookingRequest,
    DiagnosticReport, TimeSlot,
};
pub use types::*;
