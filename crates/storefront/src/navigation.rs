//! Page dispatch and per-visitor navigation state.
//!
//! The visitor's [`Navigator`] lives in their session, owned by the session
//! layer and handed to handlers through the [`Navigation`] extractor. It
//! remembers the current page and the last product slug, so `/product`
//! resolves the most recently opened product.

use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};
use pure_angan_core::Slug;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, add_breadcrumb};

/// Session key for the navigator.
pub const NAVIGATOR_KEY: &str = "navigator";

/// Every page a visitor can be on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    About,
    Products,
    Product,
    WhiteLabel,
    Export,
    Contact,
}

impl Page {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Products,
        Self::Product,
        Self::WhiteLabel,
        Self::Export,
        Self::Contact,
    ];

    /// Parse a page identifier such as `white-label`.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.identifier() == identifier)
    }

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Products => "products",
            Self::Product => "product",
            Self::WhiteLabel => "white-label",
            Self::Export => "export",
            Self::Contact => "contact",
        }
    }

    /// Canonical path. The product page needs a slug; without one it points
    /// at `/product`, which resolves the remembered slug.
    #[must_use]
    pub fn path(self, slug: Option<&Slug>) -> String {
        match (self, slug) {
            (Self::Home, _) => "/".to_string(),
            (Self::Product, Some(slug)) => format!("/products/{slug}"),
            (page, _) => format!("/{}", page.identifier()),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Current page plus the last product slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    current: Page,
    product_slug: Option<Slug>,
}

impl Navigator {
    /// Move to `page`. A supplied slug replaces the remembered one; `None`
    /// keeps it.
    pub fn navigate(&mut self, page: Page, slug: Option<Slug>) {
        self.current = page;
        if let Some(slug) = slug {
            self.product_slug = Some(slug);
        }
    }

    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }

    /// The most recently supplied product slug.
    #[must_use]
    pub const fn product_slug(&self) -> Option<&Slug> {
        self.product_slug.as_ref()
    }

    /// Where the current page lives.
    #[must_use]
    pub fn location(&self) -> String {
        self.current.path(self.product_slug.as_ref())
    }
}

/// Extractor pairing the visitor's session with their navigator.
///
/// A session without a navigator starts on the home page.
pub struct Navigation {
    session: Session,
    navigator: Navigator,
}

impl<S> FromRequestParts<S> for Navigation
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let navigator = match session.get::<Navigator>(NAVIGATOR_KEY).await {
            Ok(navigator) => navigator.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable navigator in session, starting fresh");
                Navigator::default()
            }
        };

        Ok(Self { session, navigator })
    }
}

impl Navigation {
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Apply a transition and persist it.
    ///
    /// A session write failure only costs the visitor their remembered
    /// slug, so it is logged rather than failing the page.
    pub async fn navigate(&mut self, page: Page, slug: Option<Slug>) {
        let slug_text = slug.as_ref().map(ToString::to_string).unwrap_or_default();
        add_breadcrumb(
            "navigation",
            "Navigated",
            Some(&[("page", page.identifier()), ("slug", slug_text.as_str())]),
        );

        self.navigator.navigate(page, slug);
        if let Err(e) = self.session.insert(NAVIGATOR_KEY, &self.navigator).await {
            tracing::warn!(error = %e, page = %page, "Failed to persist navigation state");
        }
    }
}
