//! Business logic between the routes and the hosted store.
//!
//! # Services
//!
//! - `catalog` - Categories, product listings and product detail
//! - `reviews` - Featured and per-product reviews
//! - `inquiry` - Lead-capture form validation and submission
//! - `links` - `tel:`, `mailto:` and WhatsApp deep links
//!
//! Every service receives the store as `Arc<dyn DataStore>`, so tests swap
//! in [`crate::supabase::MemoryStore`].

pub mod catalog;
pub mod inquiry;
pub mod links;
pub mod reviews;

pub use catalog::{CatalogService, HomeCatalog, ProductDetail, ProductListing, ProductLookup};
pub use inquiry::{
    Confirmation, FieldError, FieldErrors, InquiryForm, InquiryService, SubmissionOutcome,
};
pub use links::ContactLinks;
pub use reviews::{ReviewSection, ReviewService};

use crate::supabase::{SupabaseError, Table};

/// Collapse a failed read into an empty result.
///
/// Pages degrade to their empty state when the store is unreachable; the
/// failure is still logged (and reported to Sentry by the tracing layer).
fn or_empty<T: Default>(table: Table, result: Result<T, SupabaseError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(table = %table, error = %e, "Read failed, rendering empty state");
        T::default()
    })
}
