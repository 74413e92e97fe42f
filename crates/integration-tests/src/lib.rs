//! Integration tests for the Pure Angan Organic storefront.
//!
//! Every test boots the real router on an ephemeral port, backed by an
//! in-memory store seeded with the fixtures below, and drives it over
//! HTTP with a cookie-keeping `reqwest` client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pure-angan-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `pages` - Home, listing, product and static pages
//! - `inquiries` - Form validation, storage and failure handling
//! - `navigation` - Session-backed navigator and `/product`
//! - `supabase_client` - The REST client against a stub `PostgREST`

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use pure_angan_storefront::config::{ContactConfig, SentryConfig, StorefrontConfig, SupabaseConfig};
use pure_angan_storefront::state::AppState;
use pure_angan_storefront::supabase::{DataStore, MemoryStore, Table};
use reqwest::Client;
use reqwest::redirect::Policy;
use secrecy::SecretString;
use serde_json::{Value, json};

pub const OILS_ID: &str = "c0000000-0000-4000-8000-000000000001";
pub const SWEETENERS_ID: &str = "c0000000-0000-4000-8000-000000000002";

pub const GHEE_ID: &str = "a0000000-0000-4000-8000-000000000001";
pub const HONEY_ID: &str = "a0000000-0000-4000-8000-000000000002";
pub const MUSTARD_ID: &str = "a0000000-0000-4000-8000-000000000003";

/// Configuration that never touches the environment.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        supabase: SupabaseConfig {
            url: "http://127.0.0.1:54321".parse().unwrap(),
            anon_key: SecretString::from("test-anon-key"),
            timeout: Duration::from_secs(2),
        },
        contact: ContactConfig::default(),
        confirmation_override: None,
        sentry: SentryConfig::default(),
    }
}

#[must_use]
pub fn categories() -> Vec<Value> {
    vec![
        json!({
            "id": SWEETENERS_ID,
            "name": "Natural Sweeteners",
            "slug": "natural-sweeteners",
            "description": "Raw honey and jaggery",
            "display_order": 2,
        }),
        json!({
            "id": OILS_ID,
            "name": "Ghee & Oils",
            "slug": "ghee-oils",
            "description": "Bilona ghee and cold pressed oils",
            "display_order": 1,
        }),
    ]
}

#[must_use]
pub fn products() -> Vec<Value> {
    vec![
        json!({
            "id": GHEE_ID,
            "category_id": OILS_ID,
            "name": "A2 Desi Cow Ghee",
            "slug": "a2-desi-cow-ghee",
            "short_description": "Bilona churned ghee",
            "full_description": "Made from the curd of indigenous cows.",
            "packaging_sizes": ["500ml", "1L", "5L"],
            "certifications": ["FSSAI", "NPOP"],
            "white_label_available": true,
            "is_seasonal": false,
            "is_featured": true,
            "is_flagship": true,
            "price_from": "1250",
            "price_unit": "/litre",
            "display_order": 1,
        }),
        json!({
            "id": HONEY_ID,
            "category_id": SWEETENERS_ID,
            "name": "Wild Forest Honey",
            "slug": "wild-forest-honey",
            "short_description": "Unprocessed raw honey",
            "packaging_sizes": ["250g", "1kg"],
            "white_label_available": true,
            "is_seasonal": true,
            "is_featured": true,
            "is_flagship": false,
            "display_order": 2,
        }),
        json!({
            "id": MUSTARD_ID,
            "category_id": OILS_ID,
            "name": "Kachi Ghani Mustard Oil",
            "slug": "kachi-ghani-mustard-oil",
            "white_label_available": false,
            "is_featured": false,
            "price_from": "240",
            "display_order": 3,
        }),
    ]
}

#[must_use]
pub fn reviews() -> Vec<Value> {
    vec![
        json!({
            "id": "e0000000-0000-4000-8000-000000000001",
            "product_id": GHEE_ID,
            "customer_name": "Rohit Sharma",
            "customer_business": "Sharma Organics",
            "rating": 5,
            "review_text": "Consistent quality across every batch.",
            "review_date": "2024-03-10",
            "is_featured": true,
        }),
        json!({
            "id": "e0000000-0000-4000-8000-000000000002",
            "product_id": HONEY_ID,
            "customer_name": "Amina Yusuf",
            "rating": 4,
            "review_text": "Our customers in Dubai love it.",
            "review_date": "2024-05-02",
            "is_featured": true,
        }),
        json!({
            "id": "e0000000-0000-4000-8000-000000000003",
            "product_id": GHEE_ID,
            "customer_name": "Kavya Menon",
            "rating": 4,
            "review_text": "Good aroma, quick dispatch.",
            "review_date": "2024-01-20",
            "is_featured": false,
        }),
    ]
}

/// A store holding every fixture table.
#[must_use]
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_rows(Table::Categories, categories())
        .with_rows(Table::Products, products())
        .with_rows(Table::Reviews, reviews())
}

/// A running storefront.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    /// Keeps cookies and does not follow redirects.
    pub client: Client,
}

impl TestApp {
    /// Boot the router over the seeded fixtures.
    pub async fn spawn() -> Self {
        Self::spawn_with(seeded_store()).await
    }

    /// Boot the router over `store`.
    pub async fn spawn_with(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let data_store: Arc<dyn DataStore> = store.clone();
        let app = pure_angan_storefront::app(AppState::new(test_config(), data_store));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            addr,
            store,
            client,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .unwrap()
    }

    /// Rows written to the inquiries table so far.
    #[must_use]
    pub fn inquiries(&self) -> Vec<Value> {
        self.store.rows(Table::Inquiries)
    }
}

/// A complete, valid inquiry body.
#[must_use]
pub fn valid_inquiry() -> Vec<(&'static str, &'static str)> {
    vec![
        ("company_name", "Acme Foods"),
        ("contact_person", "Jane Doe"),
        ("email", "jane@acme.com"),
        ("phone", "+1 555 0100"),
        ("message", "Need 500kg per month"),
    ]
}
