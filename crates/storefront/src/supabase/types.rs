//! Row types for the hosted tables.
//!
//! Field names match the column names, so rows decode straight from the
//! PostgREST JSON. Nullable columns are `Option`s; "price on request" is a
//! missing `price_from`, "uncategorized" a missing `category_id`.

use chrono::{DateTime, NaiveDate, Utc};
use pure_angan_core::{
    CategoryId, Email, InquiryType, ProductId, Rating, ReviewId, Slug, StartingPrice,
};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A product category, e.g. "Dairy" or "Farm Inputs".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    /// Sort key for the category tabs.
    pub display_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Pack size labels, e.g. "1 kg", "25 kg bag".
    #[serde(default)]
    pub packaging_sizes: Vec<String>,
    /// Certification labels, e.g. "FSSAI", "NPOP".
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub white_label_available: bool,
    #[serde(default)]
    pub is_seasonal: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_flagship: bool,
    /// `None` means price on request.
    #[serde(default)]
    pub price_from: Option<StartingPrice>,
    /// Unit shown after the price, e.g. "/kg".
    #[serde(default)]
    pub price_unit: Option<String>,
    pub display_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price label for cards: formatted rupees, or `None` for price on request.
    #[must_use]
    pub fn price_label(&self) -> Option<String> {
        self.price_from.map(|price| price.display_inr())
    }

    /// Whether the product belongs to `category`.
    #[must_use]
    pub fn in_category(&self, category: CategoryId) -> bool {
        self.category_id == Some(category)
    }
}

// =============================================================================
// Reviews
// =============================================================================

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_business: Option<String>,
    /// Out-of-range values from the store are clamped into 1..=5.
    #[serde(deserialize_with = "deserialize_clamped_rating")]
    pub rating: Rating,
    pub review_text: String,
    pub review_date: NaiveDate,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn deserialize_clamped_rating<'de, D>(deserializer: D) -> Result<Rating, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(Rating::clamped)
}

// =============================================================================
// Inquiries
// =============================================================================

/// A validated inquiry, ready to insert. Write-only: never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewInquiry {
    pub inquiry_type: InquiryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub company_name: String,
    pub contact_person: String,
    pub email: Email,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub message: String,
}
