//! Client for the hosted table API (Supabase / PostgREST).
//!
//! # Architecture
//!
//! - [`DataStore`] is the seam every service depends on; handlers receive it
//!   as `Arc<dyn DataStore>` through [`crate::state::AppState`]
//! - [`SupabaseClient`] talks to `<project>/rest/v1/<table>` with `reqwest`
//! - [`MemoryStore`] evaluates the same [`Query`] over in-memory JSON rows
//!   and backs every test
//! - The hosted store is the source of truth: no local cache, no retries
//!
//! # Example
//!
//! ```rust,ignore
//! use pure_angan_storefront::supabase::{Query, SupabaseClient, Table, fetch_rows};
//!
//! let client = SupabaseClient::new(&config.supabase)?;
//! let query = Query::select(Table::Products).order_asc("display_order");
//! let products: Vec<Product> = fetch_rows(&client, &query).await?;
//! ```

mod client;
mod memory;
mod query;
mod store;
pub mod types;

pub use client::SupabaseClient;
pub use memory::MemoryStore;
pub use query::{Filter, FilterValue, Order, Query};
pub use store::{DataStore, fetch_optional, fetch_rows};

use thiserror::Error;

/// Tables exposed by the hosted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Categories,
    Products,
    Reviews,
    Inquiries,
}

impl Table {
    /// The table name used in the REST path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Reviews => "reviews",
            Self::Inquiries => "inquiries",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when talking to the hosted store.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured project URL cannot address a table.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The store refused to serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(Table::Categories.as_str(), "categories");
        assert_eq!(Table::Products.as_str(), "products");
        assert_eq!(Table::Reviews.as_str(), "reviews");
        assert_eq!(Table::Inquiries.to_string(), "inquiries");
    }

    #[test]
    fn test_api_error_display() {
        let err = SupabaseError::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - Invalid API key");
    }
}
