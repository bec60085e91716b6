//! Integration tests for broadcast, listing, and read-state.

mod helpers;

use http::StatusCode;
use vitrine_entity::user::UserRole;

#[tokio::test]
async fn test_broadcast_fans_out_to_every_client() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let a = app.create_user("a@example.com", UserRole::Client).await;
    let b = app.create_user("b@example.com", UserRole::Client).await;
    let c = app.create_user("c@example.com", UserRole::Client).await;
    let admin_token = app.login("admin@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/users/notifications/send-to-all-clients",
            Some(serde_json::json!({ "message": "Flash sale!" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_clients"], 3);
    assert_eq!(response.body["data"]["created"], 3);
    assert_eq!(response.body["data"]["failed"].as_array().unwrap().len(), 0);

    for client in [&a, &b, &c] {
        let token = app.login(&client.email).await;
        let list = app
            .request(
                "GET",
                &format!("/api/users/clients/{}/notifications", client.id),
                None,
                Some(&token),
            )
            .await;

        assert_eq!(list.status, StatusCode::OK);
        let items = list.body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["message"], "Flash sale!");
        assert_eq!(items[0]["status"], "unread");
    }
}

#[tokio::test]
async fn test_broadcast_without_header_never_reaches_the_handler() {
    let app = helpers::TestApp::new();
    let client = app.create_user("a@example.com", UserRole::Client).await;

    let response = app
        .request(
            "POST",
            "/api/users/notifications/send-to-all-clients",
            Some(serde_json::json!({ "message": "Flash sale!" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not connected");

    // Nothing was created downstream.
    let token = app.login(&client.email).await;
    let list = app
        .request(
            "GET",
            &format!("/api/users/clients/{}/notifications", client.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(list.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn test_broadcast_requires_admin() {
    let app = helpers::TestApp::new();
    app.create_user("client@example.com", UserRole::Client).await;
    let token = app.login("client@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/users/notifications/send-to-all-clients",
            Some(serde_json::json!({ "message": "Flash sale!" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_broadcast_rejects_blank_message() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let token = app.login("admin@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/users/notifications/send-to-all-clients",
            Some(serde_json::json!({ "message": "   " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mark_read_flow() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let client = app.create_user("a@example.com", UserRole::Client).await;
    let other = app.create_user("b@example.com", UserRole::Client).await;
    let admin_token = app.login("admin@example.com").await;

    app.request(
        "POST",
        "/api/users/notifications/send-to-all-clients",
        Some(serde_json::json!({ "message": "Flash sale!" })),
        Some(&admin_token),
    )
    .await;

    let token = app.login(&client.email).await;
    let list = app
        .request(
            "GET",
            &format!("/api/users/clients/{}/notifications", client.id),
            None,
            Some(&token),
        )
        .await;
    let id = list.body["data"]["items"][0]["id"].as_str().unwrap().to_string();

    let marked = app
        .request(
            "PUT",
            &format!("/api/users/notifications/{id}/mark-as-read"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(marked.status, StatusCode::OK);
    assert_eq!(marked.body["data"]["status"], "read");
    let read_at = marked.body["data"]["read_at"].clone();
    assert!(!read_at.is_null());

    // Marking again is a no-op that still succeeds.
    let repeated = app
        .request(
            "PUT",
            &format!("/api/users/notifications/{id}/mark-as-read"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(repeated.status, StatusCode::OK);
    assert_eq!(repeated.body["data"]["read_at"], read_at);

    // The refetched list reflects the flip.
    let list = app
        .request(
            "GET",
            &format!("/api/users/clients/{}/notifications", client.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(list.body["data"]["items"][0]["status"], "read");

    // The other client's entry is untouched.
    let other_token = app.login(&other.email).await;
    let other_list = app
        .request(
            "GET",
            &format!("/api/users/clients/{}/notifications", other.id),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(other_list.body["data"]["items"][0]["status"], "unread");
}

#[tokio::test]
async fn test_mark_read_unknown_id_is_not_found() {
    let app = helpers::TestApp::new();
    let client = app.create_user("a@example.com", UserRole::Client).await;
    let token = app.login(&client.email).await;

    let response = app
        .request(
            "PUT",
            &format!(
                "/api/users/notifications/{}/mark-as-read",
                uuid::Uuid::new_v4()
            ),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_cannot_read_another_clients_feed() {
    let app = helpers::TestApp::new();
    let a = app.create_user("a@example.com", UserRole::Client).await;
    let b = app.create_user("b@example.com", UserRole::Client).await;
    let token = app.login(&a.email).await;

    let response = app
        .request(
            "GET",
            &format!("/api/users/clients/{}/notifications", b.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_listing_is_newest_first_and_paginated() {
    let app = helpers::TestApp::new();
    app.create_user("admin@example.com", UserRole::Admin).await;
    let client = app.create_user("a@example.com", UserRole::Client).await;
    let admin_token = app.login("admin@example.com").await;

    for message in ["first", "second"] {
        app.request(
            "POST",
            "/api/users/notifications/send-to-all-clients",
            Some(serde_json::json!({ "message": message })),
            Some(&admin_token),
        )
        .await;
    }

    let token = app.login(&client.email).await;
    let page = app
        .request(
            "GET",
            &format!(
                "/api/users/clients/{}/notifications?page=1&per_page=1",
                client.id
            ),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["total_items"], 2);
    assert_eq!(page.body["data"]["has_next"], true);
    let items = page.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["message"], "second");

    let unread = app
        .request(
            "GET",
            "/api/users/notifications/unread-count",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(unread.body["data"]["count"], 2);
}
