//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::views::{Layout, ProductCard, ReviewView, product_cards, review_views};
use crate::filters;
use crate::navigation::{Navigation, Page};
use crate::state::AppState;

/// A "why choose us" tile.
#[derive(Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "In-house Production",
        description: "Own production facilities in Bhagalpur and Jaipur ensuring quality control",
    },
    Feature {
        title: "Certified Products",
        description: "FSSAI, NPOP, Jaivik Bharat certified with complete lab testing",
    },
    Feature {
        title: "Export-Ready",
        description: "Serving international markets including USA, UAE, UK, and more",
    },
    Feature {
        title: "White Label Options",
        description: "Customizable packaging and branding for your business needs",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub features: Vec<Feature>,
    /// Spotlight section; hidden when empty.
    pub flagship: Vec<ProductCard>,
    pub seasonal: Vec<ProductCard>,
    pub products: Vec<ProductCard>,
    /// `None` hides the reviews section.
    pub reviews: Option<Vec<ReviewView>>,
}

/// Display the home page.
///
/// Products and featured reviews are loaded concurrently.
#[instrument(skip(state, navigation))]
pub async fn home(State(state): State<AppState>, mut navigation: Navigation) -> impl IntoResponse {
    navigation.navigate(Page::Home, None).await;

    let (catalog, reviews) = tokio::join!(state.catalog().home(), state.reviews().featured());

    HomeTemplate {
        layout: Layout::new(state.links(), Page::Home),
        features: FEATURES.to_vec(),
        flagship: product_cards(&catalog.flagship),
        seasonal: product_cards(&catalog.seasonal),
        products: product_cards(&catalog.products),
        reviews: review_views(reviews.as_ref()),
    }
}
