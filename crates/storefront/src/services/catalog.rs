//! Catalog loading: categories, listings and product detail.
//!
//! Every page load reads straight from the store; nothing is cached, so an
//! edit in the hosted tables shows up on the next request.

use std::sync::Arc;

use pure_angan_core::{CategoryId, Slug};
use tracing::instrument;

use super::{ReviewSection, ReviewService, or_empty};
use crate::supabase::types::{Category, Product};
use crate::supabase::{DataStore, Query, Table, fetch_optional, fetch_rows};

/// Products for the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeCatalog {
    /// Full range, by `display_order`.
    pub products: Vec<Product>,
    /// Spotlight subset, same relative order.
    pub flagship: Vec<Product>,
    /// In-season subset, same relative order.
    pub seasonal: Vec<Product>,
}

/// The products page: category tabs plus the (filtered) product grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListing {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// `None` shows every product.
    pub selected_category: Option<CategoryId>,
}

impl ProductListing {
    /// The selected category row, if it exists.
    #[must_use]
    pub fn selected(&self) -> Option<&Category> {
        let selected = self.selected_category?;
        self.categories.iter().find(|c| c.id == selected)
    }
}

/// A resolved product with its reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub product: Product,
    pub reviews: Option<ReviewSection>,
}

/// Result of a slug lookup. A missing product is a page state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    Found(Box<ProductDetail>),
    NotFound,
}

/// Reads catalog data from the store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DataStore>,
    reviews: ReviewService,
}

impl CatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn DataStore>, reviews: ReviewService) -> Self {
        Self { store, reviews }
    }

    /// Every product with the landing-page subsets.
    #[instrument(skip(self))]
    pub async fn home(&self) -> HomeCatalog {
        let products = self.products().await;

        HomeCatalog {
            flagship: flagship(&products),
            seasonal: seasonal(&products),
            products,
        }
    }

    /// Categories and products, filtered to `selected_category` when set.
    ///
    /// Both tables are fetched concurrently. An unknown category yields an
    /// empty grid.
    #[instrument(skip(self))]
    pub async fn listing(&self, selected_category: Option<CategoryId>) -> ProductListing {
        let (categories, products) = tokio::join!(self.categories(), self.products());

        ProductListing {
            categories,
            products: filter_by_category(&products, selected_category),
            selected_category,
        }
    }

    /// Products offered for private labelling.
    #[instrument(skip(self))]
    pub async fn white_label_range(&self) -> Vec<Product> {
        white_label_available(&self.products().await)
    }

    /// Look up one product by slug, then load its reviews.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn product(&self, slug: &Slug) -> ProductLookup {
        let query = Query::select(Table::Products).eq("slug", slug);
        let found = fetch_optional::<Product>(self.store.as_ref(), &query).await;

        match or_empty(Table::Products, found) {
            Some(product) => {
                let reviews = self.reviews.for_product(product.id).await;
                ProductLookup::Found(Box::new(ProductDetail { product, reviews }))
            }
            None => {
                tracing::info!("Product not found");
                ProductLookup::NotFound
            }
        }
    }

    async fn products(&self) -> Vec<Product> {
        let query = Query::select(Table::Products).order_asc("display_order");
        or_empty(Table::Products, fetch_rows(self.store.as_ref(), &query).await)
    }

    async fn categories(&self) -> Vec<Category> {
        let query = Query::select(Table::Categories).order_asc("display_order");
        or_empty(Table::Categories, fetch_rows(self.store.as_ref(), &query).await)
    }
}

// =============================================================================
// Order-preserving subsets
// =============================================================================

/// Products in `category`; `None` keeps everything.
#[must_use]
pub fn filter_by_category(products: &[Product], category: Option<CategoryId>) -> Vec<Product> {
    match category {
        None => products.to_vec(),
        Some(category) => subset(products, |p| p.in_category(category)),
    }
}

#[must_use]
pub fn flagship(products: &[Product]) -> Vec<Product> {
    subset(products, |p| p.is_flagship)
}

#[must_use]
pub fn seasonal(products: &[Product]) -> Vec<Product> {
    subset(products, |p| p.is_seasonal)
}

#[must_use]
pub fn white_label_available(products: &[Product]) -> Vec<Product> {
    subset(products, |p| p.white_label_available)
}

fn subset(products: &[Product], keep: impl Fn(&Product) -> bool) -> Vec<Product> {
    products.iter().filter(|p| keep(p)).cloned().collect()
}
