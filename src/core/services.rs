//! Unified service container for toolfinder
//!
//! Provides shared access to all core services.

use crate::core::catalog::Catalog;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Immutable catalog snapshot
    pub catalog: Arc<Catalog>,

    /// Search service over the catalog
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services, loading the catalog named by the configuration
    pub fn new(config: Config) -> Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create services around an already built catalog
    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);

        let search = Arc::new(SearchService::new(
            Arc::clone(&catalog),
            config.search.max_query_length,
        ));

        Self {
            catalog,
            search,
            config: Arc::new(config),
        }
    }
}
