//! Page rendering against the seeded catalog.

#![allow(clippy::unwrap_used)]

use pure_angan_integration_tests::{OILS_ID, SWEETENERS_ID, TestApp, products, seeded_store};
use pure_angan_storefront::supabase::{MemoryStore, Table};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_home_shows_flagship_products_and_featured_reviews() {
    let app = TestApp::spawn().await;

    let resp = app.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    assert!(body.contains("Our Flagship Products"));
    assert!(body.contains("A2 Desi Cow Ghee"));
    assert!(body.contains("From ₹1,250 /litre"));
    assert!(body.contains("Price on request"));
    assert!(body.contains("What Our Customers Say"));
    assert!(body.contains("Rohit Sharma"));
    // Not featured
    assert!(!body.contains("Kavya Menon"));
}

#[tokio::test]
async fn test_home_renders_when_store_is_down() {
    let store = seeded_store();
    store.set_failing(true);
    let app = TestApp::spawn_with(store).await;

    let resp = app.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Our catalog is being updated"));
    assert!(!body.contains("What Our Customers Say"));
}

#[tokio::test]
async fn test_home_hides_review_section_without_featured_reviews() {
    let app = TestApp::spawn_with(MemoryStore::new()).await;

    let body = app.get("/").await.text().await.unwrap();
    assert!(!body.contains("What Our Customers Say"));
    assert!(!body.contains("Our Flagship Products"));
}

#[tokio::test]
async fn test_listing_shows_all_products_in_display_order() {
    let app = TestApp::spawn().await;

    let resp = app.get("/products").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    let ghee = body.find("A2 Desi Cow Ghee").unwrap();
    let honey = body.find("Wild Forest Honey").unwrap();
    let mustard = body.find("Kachi Ghani Mustard Oil").unwrap();
    assert!(ghee < honey && honey < mustard);

    // Tabs follow category display_order
    let oils_tab = body.find("Ghee &#38; Oils").unwrap();
    let sweeteners_tab = body.find("Natural Sweeteners").unwrap();
    assert!(oils_tab < sweeteners_tab);
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let app = TestApp::spawn().await;

    let body = app
        .get(&format!("/products?category={OILS_ID}"))
        .await
        .text()
        .await
        .unwrap();

    assert!(body.contains("Bilona churned ghee"));
    assert!(body.contains("Kachi Ghani Mustard Oil"));
    assert!(!body.contains("Wild Forest Honey"));
    assert!(body.contains("Bilona ghee and cold pressed oils"));
}

#[tokio::test]
async fn test_listing_with_unknown_category_is_empty() {
    let app = TestApp::spawn().await;

    let body = app
        .get("/products?category=c0000000-0000-4000-8000-0000000000ff")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("No products found in this category."));
}

#[tokio::test]
async fn test_listing_rejects_malformed_category() {
    let app = TestApp::spawn().await;

    let resp = app.get("/products?category=oils").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_page_shows_details_and_reviews() {
    let app = TestApp::spawn().await;

    let resp = app.get("/products/a2-desi-cow-ghee").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    assert!(body.contains("Made from the curd of indigenous cows."));
    assert!(body.contains("5L"));
    assert!(body.contains("NPOP"));
    // Newest first, featured or not
    let rohit = body.find("Rohit Sharma").unwrap();
    let kavya = body.find("Kavya Menon").unwrap();
    assert!(rohit < kavya);
    assert!(body.contains("https://wa.me/919358303029?text="));
    assert!(body.contains(r#"action="/products/a2-desi-cow-ghee/inquiry""#));
}

#[tokio::test]
async fn test_product_without_reviews_omits_section() {
    let app = TestApp::spawn().await;

    let body = app
        .get("/products/kachi-ghani-mustard-oil")
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Kachi Ghani Mustard Oil"));
    assert!(!body.contains("What Our Customers Say"));
}

#[tokio::test]
async fn test_unknown_product_renders_not_found() {
    let app = TestApp::spawn().await;

    let resp = app.get("/products/saffron").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Product Not Found"));
    assert!(body.contains(r#"href="/navigate?page=products""#));
}

#[tokio::test]
async fn test_malformed_slug_renders_not_found() {
    let app = TestApp::spawn().await;

    let resp = app.get("/products/bad%20slug").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_editor_spelled_slug_is_listed_and_opens() {
    let mut products = products();
    products.push(json!({
        "id": "a0000000-0000-4000-8000-000000000009",
        "category_id": SWEETENERS_ID,
        "name": "Multiflora Honey",
        "slug": "Multiflora_Honey",
        "short_description": "Spring harvest",
        "display_order": 4,
    }));
    let app = TestApp::spawn_with(MemoryStore::new().with_rows(Table::Products, products)).await;

    let home = app.get("/").await.text().await.unwrap();
    assert!(home.contains("Multiflora Honey"));
    assert!(home.contains(r#"href="/products/Multiflora_Honey""#));

    let resp = app.get("/products/Multiflora_Honey").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Spring harvest"));
}

#[tokio::test]
async fn test_inquiry_forms_keep_browser_validation() {
    let app = TestApp::spawn().await;

    for path in ["/contact", "/export", "/white-label", "/products/a2-desi-cow-ghee"] {
        let body = app.get(path).await.text().await.unwrap();
        assert!(!body.contains("novalidate"), "{path}");
        assert!(body.contains(r#"<input type="email" name="email" value="" required>"#), "{path}");
        assert!(body.contains(r#"<button class="button" type="submit">"#), "{path}");
        assert!(body.contains(r#"<script src="/static/js/dismiss.js"#), "{path}");
    }
}

#[tokio::test]
async fn test_white_label_lists_eligible_products() {
    let app = TestApp::spawn().await;

    let body = app.get("/white-label").await.text().await.unwrap();
    assert!(body.contains("Available for White Label"));
    assert!(body.contains("Wild Forest Honey"));
    assert!(!body.contains("Kachi Ghani Mustard Oil"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let app = TestApp::spawn().await;

    for (path, marker) in [
        ("/about", "About Pure Angan Organic"),
        ("/export", "Markets We Serve"),
        ("/contact", "Send Us a Message"),
    ] {
        let resp = app.get(path).await;
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        assert!(resp.text().await.unwrap().contains(marker), "{path}");
    }
}

#[tokio::test]
async fn test_export_form_asks_for_country() {
    let app = TestApp::spawn().await;

    let export = app.get("/export").await.text().await.unwrap();
    assert!(export.contains(r#"name="country""#));

    let contact = app.get("/contact").await.text().await.unwrap();
    assert!(!contact.contains(r#"name="country""#));
}

#[tokio::test]
async fn test_contact_links_in_layout() {
    let app = TestApp::spawn().await;

    let body = app.get("/about").await.text().await.unwrap();
    assert!(body.contains(r#"href="tel:+919358303029""#));
    assert!(body.contains(r#"href="mailto:pureangan@gmail.com""#));
    assert!(body.contains(r#"href="https://wa.me/919358303029""#));
}

#[tokio::test]
async fn test_pages_carry_security_headers_and_request_id() {
    let app = TestApp::spawn().await;

    let resp = app.get("/").await;
    let headers = resp.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["cache-control"], "no-store, max-age=0");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    assert_eq!(app.get("/health/ready").await.status(), StatusCode::OK);

    app.store.set_failing(true);
    assert_eq!(
        app.get("/health/ready").await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
