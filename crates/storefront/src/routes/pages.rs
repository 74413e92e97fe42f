//! Informational pages and their inquiry forms.
//!
//! About is static. White label, export and contact each carry one inquiry
//! form that posts back to the page and re-renders it with the outcome.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use pure_angan_core::InquiryType;
use tracing::instrument;

use super::views::{FormView, Layout, ProductCard, product_cards};
use crate::filters;
use crate::navigation::{Navigation, Page};
use crate::services::InquiryForm;
use crate::state::AppState;

const WHITE_LABEL_ACTION: &str = "/white-label/inquiry";
const EXPORT_ACTION: &str = "/export/inquiry";
const CONTACT_ACTION: &str = "/contact";

/// Title plus one line of copy.
#[derive(Clone)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Destination countries grouped by region.
#[derive(Clone)]
pub struct Market {
    pub region: &'static str,
    pub countries: Vec<&'static str>,
}

fn export_markets() -> Vec<Market> {
    EXPORT_MARKETS
        .into_iter()
        .map(|(region, countries)| Market {
            region,
            countries: countries.to_vec(),
        })
        .collect()
}

const WHITE_LABEL_STEPS: [Highlight; 5] = [
    Highlight {
        title: "Initial Consultation",
        description: "Discuss your brand vision, target market, and specific product requirements with our team.",
    },
    Highlight {
        title: "Custom Design",
        description: "We help design packaging, labels, and branding elements that align with your brand identity.",
    },
    Highlight {
        title: "Product Selection",
        description: "Choose from our range of certified organic products and customize packaging sizes.",
    },
    Highlight {
        title: "Quality Assurance",
        description: "All products undergo rigorous testing and quality checks before packaging with your brand.",
    },
    Highlight {
        title: "Delivery",
        description: "Timely delivery of your white-labeled products ready for distribution to your customers.",
    },
];

const WHITE_LABEL_BENEFITS: [&str; 8] = [
    "No minimum order quantity for established partnerships",
    "Complete branding customization",
    "Multiple packaging size options",
    "All certifications and lab reports included",
    "Fast turnaround time",
    "Dedicated account manager",
    "Flexible payment terms for bulk orders",
    "Pan-India and international shipping",
];

const WHITE_LABEL_INDUSTRIES: [Highlight; 4] = [
    Highlight {
        title: "Retail Chains",
        description: "Private label organic products for supermarkets and retail stores",
    },
    Highlight {
        title: "Health Food Brands",
        description: "White label organic foods for health and wellness companies",
    },
    Highlight {
        title: "E-commerce Businesses",
        description: "Custom-branded organic products for online marketplaces",
    },
    Highlight {
        title: "Export Companies",
        description: "Certified organic products for international distribution",
    },
];

const EXPORT_CERTIFICATIONS: [Highlight; 4] = [
    Highlight {
        title: "FSSAI Certified",
        description: "Food Safety and Standards Authority of India certification",
    },
    Highlight {
        title: "NPOP Certified",
        description: "National Programme for Organic Production",
    },
    Highlight {
        title: "Jaivik Bharat",
        description: "Government of India organic certification",
    },
    Highlight {
        title: "Lab Tested",
        description: "Complete lab reports for A2 Desi Cow Ghee and all products",
    },
];

const EXPORT_MARKETS: [(&str, &[&str]); 4] = [
    ("North America", &["USA", "Canada"]),
    ("Middle East", &["UAE", "Saudi Arabia", "Qatar", "Kuwait"]),
    ("Europe", &["UK", "Germany", "France", "Netherlands"]),
    ("Asia Pacific", &["Singapore", "Malaysia", "Australia"]),
];

const EXPORT_SERVICES: [&str; 8] = [
    "Complete export documentation support",
    "Compliance with international food safety standards",
    "Custom packaging for international markets",
    "Container and LCL shipments",
    "Competitive FOB and CIF pricing",
    "Quality assurance and inspection reports",
    "Flexible payment terms for regular buyers",
    "Dedicated export team",
];

// =============================================================================
// About
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

#[instrument(skip(state, navigation))]
pub async fn about(State(state): State<AppState>, mut navigation: Navigation) -> impl IntoResponse {
    navigation.navigate(Page::About, None).await;

    AboutTemplate {
        layout: Layout::new(state.links(), Page::About),
    }
}

// =============================================================================
// White label
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "white_label.html")]
pub struct WhiteLabelTemplate {
    pub layout: Layout,
    pub steps: Vec<Highlight>,
    pub benefits: Vec<&'static str>,
    pub industries: Vec<Highlight>,
    /// Products offered for private labelling.
    pub products: Vec<ProductCard>,
    pub form: FormView,
}

impl WhiteLabelTemplate {
    async fn build(state: &AppState, form: FormView) -> Self {
        let products = state.catalog().white_label_range().await;

        Self {
            layout: Layout::new(state.links(), Page::WhiteLabel),
            steps: WHITE_LABEL_STEPS.to_vec(),
            benefits: WHITE_LABEL_BENEFITS.to_vec(),
            industries: WHITE_LABEL_INDUSTRIES.to_vec(),
            products: product_cards(&products),
            form,
        }
    }
}

#[instrument(skip(state, navigation))]
pub async fn white_label(
    State(state): State<AppState>,
    mut navigation: Navigation,
) -> impl IntoResponse {
    navigation.navigate(Page::WhiteLabel, None).await;
    WhiteLabelTemplate::build(&state, FormView::empty(WHITE_LABEL_ACTION, InquiryType::WhiteLabel)).await
}

#[instrument(skip(state, form))]
pub async fn white_label_inquiry(
    State(state): State<AppState>,
    Form(form): Form<InquiryForm>,
) -> impl IntoResponse {
    let outcome = state.inquiries().submit(InquiryType::WhiteLabel, form).await;
    let (status, view) = FormView::from_outcome(WHITE_LABEL_ACTION, InquiryType::WhiteLabel, &outcome);
    (status, WhiteLabelTemplate::build(&state, view).await)
}

// =============================================================================
// Export
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "export.html")]
pub struct ExportTemplate {
    pub layout: Layout,
    pub certifications: Vec<Highlight>,
    pub markets: Vec<Market>,
    pub services: Vec<&'static str>,
    pub form: FormView,
}

impl ExportTemplate {
    fn build(state: &AppState, form: FormView) -> Self {
        Self {
            layout: Layout::new(state.links(), Page::Export),
            certifications: EXPORT_CERTIFICATIONS.to_vec(),
            markets: export_markets(),
            services: EXPORT_SERVICES.to_vec(),
            form,
        }
    }
}

#[instrument(skip(state, navigation))]
pub async fn export(State(state): State<AppState>, mut navigation: Navigation) -> impl IntoResponse {
    navigation.navigate(Page::Export, None).await;
    ExportTemplate::build(&state, FormView::empty(EXPORT_ACTION, InquiryType::Export))
}

#[instrument(skip(state, form))]
pub async fn export_inquiry(
    State(state): State<AppState>,
    Form(form): Form<InquiryForm>,
) -> impl IntoResponse {
    let outcome = state.inquiries().submit(InquiryType::Export, form).await;
    let (status, view) = FormView::from_outcome(EXPORT_ACTION, InquiryType::Export, &outcome);
    (status, ExportTemplate::build(&state, view))
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: FormView,
}

#[instrument(skip(state, navigation))]
pub async fn contact(State(state): State<AppState>, mut navigation: Navigation) -> impl IntoResponse {
    navigation.navigate(Page::Contact, None).await;

    ContactTemplate {
        layout: Layout::new(state.links(), Page::Contact),
        form: FormView::empty(CONTACT_ACTION, InquiryType::General),
    }
}

#[instrument(skip(state, form))]
pub async fn contact_inquiry(
    State(state): State<AppState>,
    Form(form): Form<InquiryForm>,
) -> impl IntoResponse {
    let outcome = state.inquiries().submit(InquiryType::General, form).await;
    let (status, view) = FormView::from_outcome(CONTACT_ACTION, InquiryType::General, &outcome);

    (
        status,
        ContactTemplate {
            layout: Layout::new(state.links(), Page::Contact),
            form: view,
        },
    )
}
