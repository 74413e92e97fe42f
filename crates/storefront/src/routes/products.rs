//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pure_angan_core::{CategoryId, InquiryType, Slug};
use serde::Deserialize;
use tracing::instrument;

use super::views::{
    CategoryTab, FormView, Layout, ProductCard, ProductView, ReviewView, product_cards,
    review_views,
};
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::navigation::{Navigation, Page};
use crate::services::{InquiryForm, ProductDetail, ProductLookup};
use crate::state::AppState;

/// `GET /products` parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub category: Option<String>,
}

impl ListingQuery {
    /// The selected category; a blank value means all products.
    fn category(&self) -> Result<Option<CategoryId>, AppError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("invalid category: {raw}"))),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: Layout,
    pub tabs: Vec<CategoryTab>,
    pub heading: String,
    pub category_description: Option<String>,
    pub products: Vec<ProductCard>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: Layout,
    pub product: ProductView,
    pub reviews: Option<Vec<ReviewView>>,
    pub form: FormView,
    /// Open the inquiry panel on load (after a submission).
    pub form_open: bool,
}

/// Shown for a slug that matches nothing.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub layout: Layout,
    pub back_href: String,
}

impl ProductNotFoundTemplate {
    fn new(state: &AppState) -> Self {
        Self {
            layout: Layout::new(state.links(), Page::Product),
            back_href: "/navigate?page=products".to_string(),
        }
    }
}

fn not_found(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, ProductNotFoundTemplate::new(state)).into_response()
}

fn show_template(state: &AppState, detail: &ProductDetail, form: FormView, form_open: bool) -> ProductShowTemplate {
    ProductShowTemplate {
        layout: Layout::new(state.links(), Page::Product),
        product: ProductView::new(&detail.product, state.links()),
        reviews: review_views(detail.reviews.as_ref()),
        form,
        form_open,
    }
}

fn blank_form(slug: &Slug) -> FormView {
    FormView::empty(format!("/products/{slug}/inquiry"), InquiryType::Product)
}

/// Display the product listing, optionally filtered by `?category=<id>`.
///
/// # Errors
///
/// Returns 400 if the category is not a valid id.
#[instrument(skip(state, navigation))]
pub async fn index(
    State(state): State<AppState>,
    mut navigation: Navigation,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let selected = query.category()?;
    navigation.navigate(Page::Products, None).await;

    let listing = state.catalog().listing(selected).await;
    let selected_row = listing.selected();

    Ok(ProductsIndexTemplate {
        layout: Layout::new(state.links(), Page::Products),
        tabs: CategoryTab::tabs(&listing.categories, selected_row),
        heading: selected_row.map_or_else(|| "All Products".to_string(), |c| c.name.clone()),
        category_description: selected_row.and_then(|c| c.description.clone()),
        products: product_cards(&listing.products),
    })
}

/// Resolve `slug` and render its page, or the not-found page.
async fn render_product(state: &AppState, slug: &Slug) -> Response {
    match state.catalog().product(slug).await {
        ProductLookup::Found(detail) => {
            show_template(state, &detail, blank_form(slug), false).into_response()
        }
        ProductLookup::NotFound => not_found(state),
    }
}

/// Display a product. Every view reads the product afresh.
#[instrument(skip(state, navigation))]
pub async fn show(
    State(state): State<AppState>,
    mut navigation: Navigation,
    Path(raw_slug): Path<String>,
) -> Response {
    let Ok(slug) = Slug::parse(&raw_slug) else {
        return not_found(&state);
    };

    navigation.navigate(Page::Product, Some(slug.clone())).await;
    render_product(&state, &slug).await
}

/// Display the most recently opened product.
#[instrument(skip(state, navigation))]
pub async fn last_viewed(State(state): State<AppState>, mut navigation: Navigation) -> Response {
    navigation.navigate(Page::Product, None).await;

    match navigation.navigator().product_slug().cloned() {
        Some(slug) => render_product(&state, &slug).await,
        None => not_found(&state),
    }
}

/// Submit a product inquiry.
///
/// The product reference comes from the resolved slug, never from the
/// posted body.
#[instrument(skip(state, form))]
pub async fn inquiry(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
    Form(mut form): Form<InquiryForm>,
) -> Response {
    let Ok(slug) = Slug::parse(&raw_slug) else {
        return not_found(&state);
    };
    let ProductLookup::Found(detail) = state.catalog().product(&slug).await else {
        return not_found(&state);
    };

    add_breadcrumb("inquiry", "Product inquiry posted", Some(&[("slug", slug.as_str())]));
    form.product_id = Some(detail.product.id.to_string());

    let outcome = state.inquiries().submit(InquiryType::Product, form).await;
    let (status, view) = FormView::from_outcome(
        format!("/products/{slug}/inquiry"),
        InquiryType::Product,
        &outcome,
    );

    (status, show_template(&state, &detail, view, true)).into_response()
}
