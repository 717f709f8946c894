//! Bundle selection store and tiered pricing.
//!
//! A [`BundleSelection`] is the set of services a visitor has picked in the
//! configurator. It is an owned value: the caller (a session, a CLI run, a
//! test) constructs it, mutates it through [`BundleSelection::add`] and
//! [`BundleSelection::remove`], and pulls a [`Quote`] whenever it needs one.
//!
//! # Pricing
//!
//! | Services | Discount |
//! |----------|----------|
//! | 0 or 1   | none     |
//! | 2        | 10% ("Double Play") |
//! | 3+       | 15% ("Triple Play") |
//!
//! The rate applies to the full subtotal with no cap and no per-service
//! floor. Quotes are always recomputed from the whole selection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Service;
use crate::types::{ServiceId, format_dollars};

/// Discount tier reached by a selection, a step function of its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Zero or one service.
    #[default]
    None,
    /// Exactly two services.
    DoublePlay,
    /// Three or more services.
    TriplePlay,
}

impl DiscountTier {
    /// Tier for a selection of `count` services.
    ///
    /// The three-service threshold is checked before the two-service one.
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        if count >= 3 {
            Self::TriplePlay
        } else if count >= 2 {
            Self::DoublePlay
        } else {
            Self::None
        }
    }

    /// Fraction of the subtotal taken off.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::DoublePlay => Decimal::from_parts(10, 0, 0, false, 2),
            Self::TriplePlay => Decimal::from_parts(15, 0, 0, false, 2),
        }
    }

    /// Discount as a whole percentage.
    #[must_use]
    pub const fn percent(self) -> u32 {
        match self {
            Self::None => 0,
            Self::DoublePlay => 10,
            Self::TriplePlay => 15,
        }
    }

    /// Badge label, if the tier carries a discount.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::DoublePlay => Some("Double Play"),
            Self::TriplePlay => Some("Triple Play"),
        }
    }
}

/// Price breakdown for a selection.
///
/// Figures are exact decimals. `discount` and `total` can carry more than two
/// decimal places; use the `display_*` helpers to show them rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Number of services priced.
    pub service_count: usize,
    /// Sum of all monthly prices.
    pub subtotal: Decimal,
    /// Tier reached by `service_count`.
    pub tier: DiscountTier,
    /// Fraction of the subtotal taken off.
    pub discount_rate: Decimal,
    /// `subtotal * discount_rate`.
    pub discount: Decimal,
    /// `subtotal - discount`.
    pub total: Decimal,
}

impl Quote {
    /// Price a list of services.
    #[must_use]
    pub fn for_services<'a>(services: impl IntoIterator<Item = &'a Service>) -> Self {
        let (service_count, subtotal) = services
            .into_iter()
            .fold((0, Decimal::ZERO), |(count, sum), service| {
                (count + 1, sum + service.price.amount())
            });

        let tier = DiscountTier::for_count(service_count);
        let discount_rate = tier.rate();
        // Normalized so 89.98 * 0.10 reads as 8.998 rather than 8.9980.
        let discount = (subtotal * discount_rate).normalize();

        Self {
            service_count,
            subtotal,
            tier,
            discount_rate,
            discount,
            total: (subtotal - discount).normalize(),
        }
    }

    /// Whether any discount applies.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    /// Subtotal rounded to cents, e.g. `$134.97`.
    #[must_use]
    pub fn display_subtotal(&self) -> String {
        format_dollars(self.subtotal)
    }

    /// Discount rounded to cents, e.g. `$20.25`.
    #[must_use]
    pub fn display_discount(&self) -> String {
        format_dollars(self.discount)
    }

    /// Total rounded to cents, e.g. `$114.72`.
    #[must_use]
    pub fn display_total(&self) -> String {
        format_dollars(self.total)
    }
}

/// Errors rebuilding a selection from serialized pairs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A pair's key disagrees with the id of the service it carries.
    #[error("pair key {key} does not match service id {service_id}")]
    KeyMismatch {
        /// Key of the pair.
        key: ServiceId,
        /// Id inside the service record.
        service_id: ServiceId,
    },
}

/// The services a visitor has chosen, keyed by id, in the order they were added.
///
/// Serializes as a sequence of `[id, service]` pairs, the shape of the
/// hand-off payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    into = "Vec<(ServiceId, Service)>",
    try_from = "Vec<(ServiceId, Service)>"
)]
pub struct BundleSelection {
    services: Vec<Service>,
}

impl BundleSelection {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    /// Add a service.
    ///
    /// Returns `false` and leaves the selection untouched if a service with
    /// the same id is already present.
    pub fn add(&mut self, service: Service) -> bool {
        if self.contains(service.id.as_str()) {
            return false;
        }
        self.services.push(service);
        true
    }

    /// Remove a service by id.
    ///
    /// Returns `false` if no service with that id is present.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.services.iter().position(|s| s.id.as_str() == id) else {
            return false;
        };
        self.services.remove(index);
        true
    }

    /// Whether a service with this id is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.id.as_str() == id)
    }

    /// Look up a selected service by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id.as_str() == id)
    }

    /// Number of selected services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Selected services in insertion order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Iterate over selected services in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Price the current selection.
    #[must_use]
    pub fn quote(&self) -> Quote {
        Quote::for_services(&self.services)
    }

    /// Remove every service.
    pub fn clear(&mut self) {
        self.services.clear();
    }

    /// Export the selection as `(id, service)` pairs in insertion order.
    #[must_use]
    pub fn serialize(&self) -> Vec<(ServiceId, Service)> {
        self.services
            .iter()
            .map(|service| (service.id.clone(), service.clone()))
            .collect()
    }

    /// Rebuild a selection from `(id, service)` pairs.
    ///
    /// Repeated ids keep their first occurrence, matching [`Self::add`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::KeyMismatch`] if a pair's key is not the id
    /// of its service.
    pub fn deserialize(
        pairs: impl IntoIterator<Item = (ServiceId, Service)>,
    ) -> Result<Self, SelectionError> {
        let mut selection = Self::new();
        for (key, service) in pairs {
            if key != service.id {
                return Err(SelectionError::KeyMismatch {
                    key,
                    service_id: service.id,
                });
            }
            selection.add(service);
        }
        Ok(selection)
    }
}

impl From<BundleSelection> for Vec<(ServiceId, Service)> {
    fn from(selection: BundleSelection) -> Self {
        selection
            .services
            .into_iter()
            .map(|service| (service.id.clone(), service))
            .collect()
    }
}

impl TryFrom<Vec<(ServiceId, Service)>> for BundleSelection {
    type Error = SelectionError;

    fn try_from(pairs: Vec<(ServiceId, Service)>) -> Result<Self, Self::Error> {
        Self::deserialize(pairs)
    }
}

impl<'a> IntoIterator for &'a BundleSelection {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
