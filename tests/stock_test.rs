//! Integration tests for the low-stock check and alert mail.

mod helpers;

use http::StatusCode;
use vitrine_entity::user::UserRole;

#[tokio::test]
async fn test_low_stock_check_mails_every_admin() {
    let app = helpers::TestApp::new();
    app.create_user("first@example.com", UserRole::Admin).await;
    app.create_user("second@example.com", UserRole::Admin).await;
    app.create_user("third@example.com", UserRole::Admin).await;
    app.create_user("client@example.com", UserRole::Client).await;
    let product = app.create_product("Ceramic teapot", 2, 5).await;
    let token = app.login("first@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/stock/{}/check", product.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["triggered"], true);
    let notified = response.body["data"]["alert"]["notified"].as_array().unwrap();
    assert_eq!(notified.len(), 3);

    let sent = app.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    for email in sent.iter() {
        assert!(email.subject.contains("Ceramic teapot"));
        assert!(email.text_body.contains('2'));
        assert!(email.text_body.contains('5'));
        assert!(email.html_body.contains("Ceramic teapot"));
    }
}

#[tokio::test]
async fn test_low_stock_check_requires_admin() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;
    let product = app.create_product("Ceramic teapot", 2, 5).await;
    let token = app.login("client@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/stock/{}/check", product.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_check_above_threshold_sends_nothing() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let product = app.create_product("Ceramic teapot", 10, 5).await;
    let token = app.login("admin@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/stock/{}/check", product.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["triggered"], false);
    assert!(response.body["data"]["alert"].is_null());
    assert!(app.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_recipient_does_not_block_the_rest() {
    let app = helpers::TestApp::with_rejecting_mail("unreachable@example.com");
    app.create_user("first@example.com", UserRole::Admin).await;
    app.create_user("unreachable@example.com", UserRole::Admin)
        .await;
    app.create_user("third@example.com", UserRole::Admin).await;
    let product = app.create_product("Ceramic teapot", 1, 5).await;
    let token = app.login("first@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/stock/{}/check", product.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let alert = &response.body["data"]["alert"];
    assert_eq!(alert["notified"].as_array().unwrap().len(), 2);
    let failed = alert["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["email"], "unreachable@example.com");

    assert_eq!(app.mailer.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_check_unknown_product_is_not_found() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let token = app.login("admin@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/stock/{}/check", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_low_stock_listing() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    app.create_product("Nearly gone", 1, 5).await;
    app.create_product("Well stocked", 50, 5).await;
    let token = app.login("admin@example.com").await;

    let response = app
        .request("GET", "/api/admin/stock/low", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let products = response.body["data"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Nearly gone");
}
