//! Featured and per-product reviews.

use std::sync::Arc;

use pure_angan_core::ProductId;
use tracing::instrument;

use super::or_empty;
use crate::supabase::types::Review;
use crate::supabase::{DataStore, Query, Table, fetch_rows};

/// A non-empty list of reviews, newest first.
///
/// Pages only render a reviews section when one of these exists, so an
/// empty result leaves no empty container behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    reviews: Vec<Review>,
}

impl ReviewSection {
    /// `None` when there is nothing to show.
    #[must_use]
    pub fn from_reviews(reviews: Vec<Review>) -> Option<Self> {
        if reviews.is_empty() {
            None
        } else {
            Some(Self { reviews })
        }
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Always `false`; kept for the `len` / `is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Loads reviews ordered by `review_date`, newest first.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn DataStore>,
}

impl ReviewService {
    #[must_use]
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Site-wide featured reviews.
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Option<ReviewSection> {
        let query = Query::select(Table::Reviews)
            .eq("is_featured", true)
            .order_desc("review_date");
        let reviews = or_empty(Table::Reviews, fetch_rows(self.store.as_ref(), &query).await);
        ReviewSection::from_reviews(reviews)
    }

    /// Reviews attached to one product.
    #[instrument(skip(self))]
    pub async fn for_product(&self, product_id: ProductId) -> Option<ReviewSection> {
        let query = Query::select(Table::Reviews)
            .eq("product_id", product_id)
            .order_desc("review_date");
        let reviews = or_empty(Table::Reviews, fetch_rows(self.store.as_ref(), &query).await);
        ReviewSection::from_reviews(reviews)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::supabase::MemoryStore;
    use serde_json::{Value, json};

    const GHEE: &str = "2c9d7f3a-1b4e-4a6c-8d2f-3e5a7b9c1d0e";
    const HONEY: &str = "8e1f2a3b-4c5d-4e6f-9a0b-1c2d3e4f5a6b";

    fn review(id: u8, product: Option<&str>, date: &str, featured: bool) -> Value {
        json!({
            "id": format!("00000000-0000-4000-8000-0000000000{id:02}"),
            "product_id": product,
            "customer_name": format!("Customer {id}"),
            "customer_business": null,
            "rating": 4,
            "review_text": "Good quality",
            "review_date": date,
            "is_featured": featured,
        })
    }

    fn service(rows: Vec<Value>) -> ReviewService {
        ReviewService::new(Arc::new(MemoryStore::new().with_rows(Table::Reviews, rows)))
    }

    fn names(section: &ReviewSection) -> Vec<&str> {
        section
            .reviews()
            .iter()
            .map(|r| r.customer_name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_featured_newest_first() {
        let service = service(vec![
            review(1, None, "2024-11-02", true),
            review(2, Some(GHEE), "2025-03-15", true),
            review(3, None, "2025-01-20", false),
            review(4, Some(HONEY), "2024-12-31", true),
        ]);

        let section = service.featured().await.unwrap();
        assert_eq!(names(&section), vec!["Customer 2", "Customer 4", "Customer 1"]);
    }

    #[tokio::test]
    async fn test_for_product_filters_by_product() {
        let service = service(vec![
            review(1, Some(GHEE), "2024-11-02", false),
            review(2, Some(HONEY), "2025-03-15", true),
            review(3, Some(GHEE), "2025-01-20", false),
        ]);

        let section = service.for_product(GHEE.parse().unwrap()).await.unwrap();
        assert_eq!(names(&section), vec!["Customer 3", "Customer 1"]);
    }

    #[tokio::test]
    async fn test_no_reviews_means_no_section() {
        let service = service(vec![review(1, Some(HONEY), "2024-11-02", false)]);
        assert!(service.for_product(GHEE.parse().unwrap()).await.is_none());
        assert!(service.featured().await.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_means_no_section() {
        let store = MemoryStore::new().with_rows(
            Table::Reviews,
            vec![review(1, None, "2024-11-02", true)],
        );
        store.set_failing(true);
        let service = ReviewService::new(Arc::new(store));
        assert!(service.featured().await.is_none());
    }

    #[test]
    fn test_from_reviews_empty() {
        assert!(ReviewSection::from_reviews(Vec::new()).is_none());
    }
}
