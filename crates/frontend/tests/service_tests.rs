//! End-to-end tests for the API services

use portico_frontend::services::{AuthService, ItemsService, UsersService};
use portico_http::client::ApiClient;
use portico_http::client::token::{MemoryTokenStore, TokenStore};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::builder()
        .api_base(format!("{}/api/v1", mock_server.uri()))
        .token_store(store)
        .build()
        .unwrap()
}

#[tokio::test]
async fn login_persists_the_token_for_later_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login/access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued-jwt",
            "token_type": "bearer"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/verify"))
        .and(header("authorization", "Bearer issued-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 1,
            "email": "admin@test.com",
            "is_active": true
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = AuthService::with_client(client_for(&mock_server, store.clone()));

    auth.login("admin@test.com", "Test123!").await.unwrap();
    assert_eq!(store.get().as_deref(), Some("issued-jwt"));

    let verified = auth.verify().await.unwrap();
    assert_eq!(verified.email, "admin@test.com");
}

#[tokio::test]
async fn logout_discards_the_stored_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/logout"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Successfully logged out",
            "note": "Please delete your token on the client side"
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("stale"));
    let auth = AuthService::with_client(client_for(&mock_server, store.clone()));

    let response = auth.logout().await.unwrap();
    assert_eq!(response.message, "Successfully logged out");
    assert!(store.get().is_none());
}

#[tokio::test]
async fn failed_login_leaves_no_token_behind() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/login/access-token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Incorrect email or password"))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = AuthService::with_client(client_for(&mock_server, store.clone()));

    let result = auth.login("admin@test.com", "wrong").await;
    assert!(result.is_err());
    assert!(store.get().is_none());
}

#[tokio::test]
async fn user_directory_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": ["alice", "bob", "charlie"]
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let users = UsersService::with_client(client_for(&mock_server, store));

    let listing = users.list().await.unwrap();
    assert_eq!(listing.users, vec!["alice", "bob", "charlie"]);
}

#[tokio::test]
async fn item_listing_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": ["item1", "item2", "item3"]
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let items = ItemsService::with_client(client_for(&mock_server, store));

    let listing = items.list().await.unwrap();
    assert_eq!(listing.items, vec!["item1", "item2", "item3"]);
}
