//! Application state shared across handlers.

use std::sync::Arc;

use black_cable_core::{Catalog, CoverageLookup, CoverageMap, StaticCoverageTable};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the service catalog, and the coverage sources.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    coverage: Arc<dyn CoverageLookup>,
    coverage_map: CoverageMap,
}

impl AppState {
    /// Create application state with the standard catalog and the
    /// launch-area coverage data.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_parts(
            config,
            Catalog::standard(),
            Arc::new(StaticCoverageTable::launch_area()),
            CoverageMap::launch_area(),
        )
    }

    /// Create application state from explicit parts.
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        coverage: Arc<dyn CoverageLookup>,
        coverage_map: CoverageMap,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                coverage,
                coverage_map,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the service catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the ZIP coverage source.
    #[must_use]
    pub fn coverage(&self) -> &dyn CoverageLookup {
        self.inner.coverage.as_ref()
    }

    /// Get the interactive coverage map.
    #[must_use]
    pub fn coverage_map(&self) -> &CoverageMap {
        &self.inner.coverage_map
    }
}
