//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page
//! GET  /about                    - About page
//!
//! # Products
//! GET  /products?category=<id>   - Product listing, optionally filtered
//! GET  /products/{slug}          - Product detail (404 page for unknown slugs)
//! POST /products/{slug}/inquiry  - Product inquiry
//! GET  /product                  - Last product opened in this session
//!
//! # Services
//! GET  /white-label              - White label page
//! POST /white-label/inquiry      - White label inquiry
//! GET  /export                   - Export page
//! POST /export/inquiry           - Export inquiry (country required)
//! GET  /contact                  - Contact page
//! POST /contact                  - General inquiry
//!
//! # Navigation
//! GET  /navigate?page=&slug=     - Apply a transition, 303 to the page
//!
//! # Health checks
//! GET  /health                   - Liveness
//! GET  /health/ready             - Readiness (one query against the store)
//! ```

pub mod health;
pub mod home;
pub mod navigate;
pub mod pages;
pub mod products;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
        .route("/{slug}/inquiry", post(products::inquiry))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .nest("/products", product_routes())
        .route("/product", get(products::last_viewed))
        .route("/white-label", get(pages::white_label))
        .route("/white-label/inquiry", post(pages::white_label_inquiry))
        .route("/export", get(pages::export))
        .route("/export/inquiry", post(pages::export_inquiry))
        .route("/contact", get(pages::contact).post(pages::contact_inquiry))
        .route("/navigate", get(navigate::navigate))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}
