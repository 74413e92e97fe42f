//! Display data shared by the page templates.
//!
//! Templates only see these flattened views: strings ready to print, links
//! ready to follow and `Option`s for sections that may be absent.

use axum::http::StatusCode;
use pure_angan_core::InquiryType;

use crate::navigation::Page;
use crate::services::{ContactLinks, InquiryForm, ReviewSection, SubmissionOutcome};
use crate::supabase::types::{Category, Product, Review};

// =============================================================================
// Layout
// =============================================================================

/// Header navigation entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Header and footer data every page needs.
#[derive(Debug, Clone)]
pub struct Layout {
    pub nav: Vec<NavLink>,
    pub phone: String,
    pub tel_href: String,
    pub email: String,
    pub mailto_href: String,
    pub whatsapp_href: String,
}

impl Layout {
    #[must_use]
    pub fn new(links: &ContactLinks, current: Page) -> Self {
        let nav = [
            (Page::Home, "Home"),
            (Page::About, "About"),
            (Page::Products, "Products"),
            (Page::WhiteLabel, "White Label"),
            (Page::Export, "Export"),
            (Page::Contact, "Contact"),
        ]
        .into_iter()
        .map(|(page, label)| NavLink {
            label,
            href: page.path(None),
            // The product page lives under the products tab.
            active: page == current || (page == Page::Products && current == Page::Product),
        })
        .collect();

        Self {
            nav,
            phone: links.phone_display().to_string(),
            tel_href: links.tel(),
            email: links.email().to_string(),
            mailto_href: links.mailto(),
            whatsapp_href: links.whatsapp(None),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Badge labels in display order. White label is implied for flagship
/// products, so it is only shown on the others.
fn badges(product: &Product) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if product.is_flagship {
        badges.push("Flagship");
    }
    if product.is_seasonal {
        badges.push("Seasonal");
    }
    if product.white_label_available && !product.is_flagship {
        badges.push("White Label");
    }
    badges
}

/// A product tile in a grid.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub name: String,
    pub href: String,
    pub short_description: Option<String>,
    pub image_url: Option<String>,
    /// `None` renders "Price on request".
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub badges: Vec<&'static str>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            href: Page::Product.path(Some(&product.slug)),
            short_description: product.short_description.clone(),
            image_url: product.image_url.clone(),
            price: product.price_label(),
            price_unit: product.price_unit.clone(),
            badges: badges(product),
        }
    }
}

#[must_use]
pub fn product_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}

/// The full product page.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub packaging_sizes: Vec<String>,
    pub certifications: Vec<String>,
    pub badges: Vec<&'static str>,
    pub white_label_available: bool,
    pub whatsapp_order_href: String,
    pub inquiry_action: String,
}

impl ProductView {
    #[must_use]
    pub fn new(product: &Product, links: &ContactLinks) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.to_string(),
            short_description: product.short_description.clone(),
            full_description: product.full_description.clone(),
            image_url: product.image_url.clone(),
            price: product.price_label(),
            price_unit: product.price_unit.clone(),
            packaging_sizes: product.packaging_sizes.clone(),
            certifications: product.certifications.clone(),
            badges: badges(product),
            white_label_available: product.white_label_available,
            whatsapp_order_href: links.whatsapp_order(&product.name),
            inquiry_action: format!("/products/{}/inquiry", product.slug),
        }
    }
}

/// A category filter tab.
#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub name: String,
    pub href: String,
    pub active: bool,
}

impl CategoryTab {
    /// The "All Products" tab followed by one tab per category.
    #[must_use]
    pub fn tabs(categories: &[Category], selected: Option<&Category>) -> Vec<Self> {
        let all = Self {
            name: "All Products".to_string(),
            href: Page::Products.path(None),
            active: selected.is_none(),
        };

        std::iter::once(all)
            .chain(categories.iter().map(|category| Self {
                name: category.name.clone(),
                href: format!("{}?category={}", Page::Products.path(None), category.id),
                active: selected.is_some_and(|s| s.id == category.id),
            }))
            .collect()
    }
}

// =============================================================================
// Reviews
// =============================================================================

/// One review card.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub customer_name: String,
    pub customer_business: Option<String>,
    /// CSS class per star, filled first.
    pub stars: Vec<&'static str>,
    pub rating: u8,
    pub review_text: String,
    pub review_date: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            customer_name: review.customer_name.clone(),
            customer_business: review.customer_business.clone(),
            stars: review
                .rating
                .stars()
                .into_iter()
                .map(|filled| if filled { "star filled" } else { "star" })
                .collect(),
            rating: review.rating.value(),
            review_text: review.review_text.clone(),
            review_date: review.review_date.format("%d %b %Y").to_string(),
        }
    }
}

/// Convert a section; `None` stays `None` so the template omits it.
#[must_use]
pub fn review_views(section: Option<&ReviewSection>) -> Option<Vec<ReviewView>> {
    section.map(|s| s.reviews().iter().map(ReviewView::from).collect())
}

// =============================================================================
// Inquiry forms
// =============================================================================

/// One input: the value to echo back and its error, if any.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

/// Banner shown after a stored inquiry.
#[derive(Debug, Clone)]
pub struct ConfirmationView {
    pub title: &'static str,
    pub message: &'static str,
    pub dismiss_after_ms: u128,
}

/// An inquiry form in whatever state the last submission left it.
#[derive(Debug, Clone)]
pub struct FormView {
    pub action: String,
    pub show_country: bool,
    pub company_name: FieldView,
    pub contact_person: FieldView,
    pub email: FieldView,
    pub phone: FieldView,
    pub country: FieldView,
    pub message: FieldView,
    /// Set when the form itself could not be checked, e.g. a missing product.
    pub general_error: Option<String>,
    pub confirmation: Option<ConfirmationView>,
    pub failed: bool,
}

impl FormView {
    /// A blank form posting to `action`.
    #[must_use]
    pub fn empty(action: impl Into<String>, inquiry_type: InquiryType) -> Self {
        Self {
            action: action.into(),
            show_country: inquiry_type.requires_country(),
            company_name: FieldView::default(),
            contact_person: FieldView::default(),
            email: FieldView::default(),
            phone: FieldView::default(),
            country: FieldView::default(),
            message: FieldView::default(),
            general_error: None,
            confirmation: None,
            failed: false,
        }
    }

    /// The form after `outcome`, plus the status code to send it with.
    #[must_use]
    pub fn from_outcome(
        action: impl Into<String>,
        inquiry_type: InquiryType,
        outcome: &SubmissionOutcome,
    ) -> (StatusCode, Self) {
        let mut view = Self::empty(action, inquiry_type);

        match outcome {
            SubmissionOutcome::Submitted { confirmation } => {
                view.confirmation = Some(ConfirmationView {
                    title: confirmation.title,
                    message: confirmation.message,
                    dismiss_after_ms: confirmation.dismiss_after_ms(),
                });
                (StatusCode::OK, view)
            }
            SubmissionOutcome::Invalid { form, errors } => {
                view.fill(form);
                view.company_name.error = errors.get("company_name").map(str::to_string);
                view.contact_person.error = errors.get("contact_person").map(str::to_string);
                view.email.error = errors.get("email").map(str::to_string);
                view.phone.error = errors.get("phone").map(str::to_string);
                view.country.error = errors.get("country").map(str::to_string);
                view.message.error = errors.get("message").map(str::to_string);
                view.general_error = errors.get("product_id").map(str::to_string);
                (StatusCode::UNPROCESSABLE_ENTITY, view)
            }
            SubmissionOutcome::Failed { form } => {
                view.fill(form);
                view.failed = true;
                (StatusCode::BAD_GATEWAY, view)
            }
        }
    }

    fn fill(&mut self, form: &InquiryForm) {
        self.company_name.value.clone_from(&form.company_name);
        self.contact_person.value.clone_from(&form.contact_person);
        self.email.value.clone_from(&form.email);
        self.phone.value.clone_from(&form.phone);
        self.country.value = form.country.clone().unwrap_or_default();
        self.message.value.clone_from(&form.message);
    }
}
