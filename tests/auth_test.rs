//! Integration tests for the authentication flow and gates.

mod helpers;

use http::StatusCode;
use vitrine_entity::user::UserRole;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert!(response.body["data"]["refresh_token"].is_string());
    assert_eq!(response.body["data"]["user"]["role"], "client");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_without_header_is_not_connected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/users/notifications/unread-count", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not connected");
}

#[tokio::test]
async fn test_protected_route_with_forged_token_is_invalid_session() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/users/notifications/unread-count",
            None,
            Some("not-a-real-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid session");
    // The two rejection messages are distinct so clients can tell a
    // missing credential from a bad one.
    assert_ne!(response.body["message"], "Not connected");
}

#[tokio::test]
async fn test_client_route_rejects_admin_principal() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let token = app.login("admin@example.com").await;

    let response = app
        .request(
            "GET",
            "/api/users/notifications/unread-count",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;
    let token = app.login("client@example.com").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "client@example.com");
}

#[tokio::test]
async fn test_refresh_issues_new_tokens() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "client@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    let refresh_token = login.body["data"]["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
}
