//! Inquiry forms: validation, storage and failure handling.

#![allow(clippy::unwrap_used)]

use pure_angan_integration_tests::{GHEE_ID, TestApp, valid_inquiry};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_contact_inquiry_is_stored_and_confirmed() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/contact", &valid_inquiry()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Thank you for contacting us!"));
    assert!(body.contains(r#"data-dismiss-after="5000""#));
    // Form is cleared after success
    assert!(!body.contains(r#"value="Acme Foods""#));

    let rows = app.inquiries();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        json!({
            "inquiry_type": "general",
            "company_name": "Acme Foods",
            "contact_person": "Jane Doe",
            "email": "jane@acme.com",
            "phone": "+1 555 0100",
            "message": "Need 500kg per month",
        })
    );
}

#[tokio::test]
async fn test_invalid_inquiry_keeps_input_and_writes_nothing() {
    let app = TestApp::spawn().await;

    let mut fields = valid_inquiry();
    fields.retain(|(name, _)| *name != "company_name");
    fields.push(("company_name", "   "));
    fields.retain(|(name, _)| *name != "email");
    fields.push(("email", "jane@acme"));

    let resp = app.post_form("/contact", &fields).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Company name is required"));
    assert!(body.contains("Email domain must look like example.com"));
    assert!(body.contains(r#"value="Jane Doe""#));

    assert!(app.inquiries().is_empty());
}

#[tokio::test]
async fn test_export_inquiry_requires_country() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/export/inquiry", &valid_inquiry()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.text().await.unwrap().contains("Country is required"));
    assert!(app.inquiries().is_empty());

    let mut fields = valid_inquiry();
    fields.push(("country", "UAE"));
    let resp = app.post_form("/export/inquiry", &fields).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains(r#"data-dismiss-after="3000""#));

    let rows = app.inquiries();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["inquiry_type"], "export");
    assert_eq!(rows[0]["country"], "UAE");
}

#[tokio::test]
async fn test_white_label_inquiry_keeps_optional_country() {
    let app = TestApp::spawn().await;

    let mut fields = valid_inquiry();
    fields.push(("country", "UAE"));
    let resp = app.post_form("/white-label/inquiry", &fields).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let rows = app.inquiries();
    assert_eq!(rows[0]["inquiry_type"], "white_label");
    assert_eq!(rows[0]["country"], "UAE");
    assert!(rows[0].get("product_id").is_none());
}

#[tokio::test]
async fn test_product_inquiry_references_resolved_product() {
    let app = TestApp::spawn().await;

    let mut fields = valid_inquiry();
    // A posted reference is replaced by the slug's product
    fields.push(("product_id", "a0000000-0000-4000-8000-000000000002"));
    let resp = app
        .post_form("/products/a2-desi-cow-ghee/inquiry", &fields)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Your inquiry has been submitted."));
    // Still the product page
    assert!(body.contains("Made from the curd of indigenous cows."));

    let rows = app.inquiries();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["inquiry_type"], "product");
    assert_eq!(rows[0]["product_id"], GHEE_ID);
}

#[tokio::test]
async fn test_product_inquiry_for_unknown_product_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/products/saffron/inquiry", &valid_inquiry())
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(app.inquiries().is_empty());
}

#[tokio::test]
async fn test_failed_insert_keeps_input() {
    let app = TestApp::spawn().await;
    app.store.set_failing(true);

    let resp = app.post_form("/contact", &valid_inquiry()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("We could not send your inquiry just now."));
    assert!(body.contains(r#"value="Acme Foods""#));
    assert!(!body.contains("Thank you for contacting us!"));

    app.store.set_failing(false);
    assert!(app.inquiries().is_empty());
}

#[tokio::test]
async fn test_duplicate_submissions_are_each_stored() {
    let app = TestApp::spawn().await;

    for _ in 0..2 {
        let resp = app.post_form("/contact", &valid_inquiry()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(app.inquiries().len(), 2);
}
