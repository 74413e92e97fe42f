//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{CatalogService, ContactLinks, InquiryService, ReviewService};
use crate::supabase::DataStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store is injected, so tests build the
/// same state over [`crate::supabase::MemoryStore`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Arc<dyn DataStore>,
    catalog: CatalogService,
    reviews: ReviewService,
    inquiries: InquiryService,
    links: ContactLinks,
}

impl AppState {
    /// Wire every service to `store`.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Arc<dyn DataStore>) -> Self {
        let reviews = ReviewService::new(Arc::clone(&store));
        let catalog = CatalogService::new(Arc::clone(&store), reviews.clone());
        let inquiries = InquiryService::new(Arc::clone(&store), config.confirmation_override);
        let links = ContactLinks::new(&config.contact);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog,
                reviews,
                inquiries,
                links,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The raw store, for readiness checks.
    #[must_use]
    pub fn store(&self) -> &dyn DataStore {
        self.inner.store.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    #[must_use]
    pub fn reviews(&self) -> &ReviewService {
        &self.inner.reviews
    }

    #[must_use]
    pub fn inquiries(&self) -> &InquiryService {
        &self.inner.inquiries
    }

    #[must_use]
    pub fn links(&self) -> &ContactLinks {
        &self.inner.links
    }
}
