//! Service catalog shown on the bundle configurator.
//!
//! The catalog is read-only input to the bundle store. The site renders it
//! from markup; here it is a plain list with unique ids.

use serde::{Deserialize, Serialize};

use crate::types::{MonthlyPrice, ServiceId};

/// A service a visitor can add to their bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Service {
    /// Stable identifier, unique within the catalog.
    pub id: ServiceId,
    /// Display label.
    pub name: String,
    /// Display text.
    pub description: String,
    /// Monthly recurring charge.
    pub price: MonthlyPrice,
}

impl Service {
    /// Create a new service entry.
    #[must_use]
    pub fn new(
        id: ServiceId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: MonthlyPrice,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Errors building a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share an id.
    #[error("duplicate service id in catalog: {0}")]
    DuplicateId(ServiceId),
}

/// An ordered list of services with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] naming the first repeated id.
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        for (index, service) in services.iter().enumerate() {
            if services
                .iter()
                .take(index)
                .any(|earlier| earlier.id == service.id)
            {
                return Err(CatalogError::DuplicateId(service.id.clone()));
            }
        }
        Ok(Self { services })
    }

    /// Look up a service by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id.as_str() == id)
    }

    /// Iterate over services in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Number of services in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the catalog has no services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// The site's standard service lineup.
    #[must_use]
    pub fn standard() -> Self {
        let entries = [
            (
                "internet",
                "Fiber Internet",
                "Symmetrical fiber up to 1 Gbps with unlimited data",
                4999,
            ),
            (
                "tv",
                "Streaming TV",
                "200+ live channels with cloud DVR on every screen",
                3999,
            ),
            (
                "phone",
                "Home Phone",
                "Unlimited nationwide calling with voicemail to email",
                4499,
            ),
            (
                "security",
                "Smart Home Security",
                "24/7 monitored cameras, sensors and app alerts",
                2999,
            ),
        ];

        let services = entries
            .into_iter()
            .filter_map(|(id, name, description, cents)| {
                Some(Service::new(
                    ServiceId::parse(id).ok()?,
                    name,
                    description,
                    MonthlyPrice::from_cents(cents).ok()?,
                ))
            })
            .collect();

        Self { services }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}
