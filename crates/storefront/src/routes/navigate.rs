//! The navigation callback: `(page, optional slug)` in, redirect out.

use axum::{
    extract::Query,
    response::{IntoResponse, Redirect},
};
use pure_angan_core::Slug;
use serde::Deserialize;
use tracing::instrument;

use crate::navigation::{Navigation, Page};

/// `GET /navigate` parameters.
#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Apply a transition and send the visitor to the page's canonical path.
///
/// Unknown pages fall back to home. A malformed slug is ignored, which
/// keeps the previously remembered one.
#[instrument(skip(navigation))]
pub async fn navigate(mut navigation: Navigation, Query(query): Query<NavigateQuery>) -> impl IntoResponse {
    let page = query
        .page
        .as_deref()
        .and_then(Page::from_identifier)
        .unwrap_or_default();

    let slug = query
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|raw| match Slug::parse(raw) {
            Ok(slug) => Some(slug),
            Err(e) => {
                tracing::warn!(slug = %raw, error = %e, "Ignoring malformed slug");
                None
            }
        });

    navigation.navigate(page, slug).await;
    Redirect::to(&navigation.navigator().location())
}
