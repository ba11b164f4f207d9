//! Token exchanges against a mock OAuth2 endpoint.

mod common;

use std::collections::HashMap;

use axum::http::{Method, StatusCode};
use josekit::jws::RS256;
use serde_json::json;

use common::MockApi;
use merchant_api_samples::auth::credentials::{AuthorizedUser, ServiceAccountKey};
use merchant_api_samples::auth::{Authenticator, CredentialSource};
use merchant_api_samples::error::AppError;

fn form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes()).into_owned().collect()
}

fn user() -> AuthorizedUser {
    AuthorizedUser {
        client_id: "client-1".to_string(),
        client_secret: "secret-1".to_string(),
        refresh_token: "refresh-1".to_string(),
    }
}

#[tokio::test]
async fn service_account_uses_the_jwt_bearer_grant() {
    let mock = MockApi::start().await;
    mock.on(
        Method::POST,
        "/token",
        json!({ "access_token": "sa-token", "expires_in": 3600, "token_type": "Bearer" }),
    );

    let pair = RS256.generate_key_pair(2048).unwrap();
    let key = ServiceAccountKey {
        client_email: "samples@project.iam.gserviceaccount.com".to_string(),
        private_key: String::from_utf8(pair.to_pem_private_key()).unwrap(),
        private_key_id: None,
    };
    let auth = Authenticator::new(
        reqwest::Client::new(),
        CredentialSource::ServiceAccount(key),
        format!("{}/token", mock.base_url),
    );

    assert_eq!(auth.access_token().await.unwrap(), "sa-token");
    assert_eq!(auth.access_token().await.unwrap(), "sa-token");
    assert_eq!(mock.requests_to("/token").len(), 1);

    let sent = form(&mock.requests_to("/token")[0].body);
    assert_eq!(
        sent.get("grant_type").map(String::as_str),
        Some("urn:ietf:params:oauth:grant-type:jwt-bearer")
    );
    // header.payload.signature
    assert_eq!(sent["assertion"].split('.').count(), 3);
}

#[tokio::test]
async fn fresh_tokens_are_reused() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, "/token", json!({ "access_token": "user-token", "expires_in": 3600 }));

    let auth = Authenticator::new(
        reqwest::Client::new(),
        CredentialSource::AuthorizedUser(user()),
        format!("{}/token", mock.base_url),
    );

    assert_eq!(auth.access_token().await.unwrap(), "user-token");
    assert_eq!(auth.access_token().await.unwrap(), "user-token");
    assert_eq!(mock.requests_to("/token").len(), 1);

    let sent = form(&mock.requests_to("/token")[0].body);
    assert_eq!(sent.get("grant_type").map(String::as_str), Some("refresh_token"));
    assert_eq!(sent.get("refresh_token").map(String::as_str), Some("refresh-1"));
    assert_eq!(sent.get("client_id").map(String::as_str), Some("client-1"));
}

#[tokio::test]
async fn tokens_about_to_expire_are_refreshed() {
    let mock = MockApi::start().await;
    mock.on(Method::POST, "/token", json!({ "access_token": "short-lived", "expires_in": 30 }));
    mock.on(Method::POST, "/token", json!({ "access_token": "renewed", "expires_in": 3600 }));

    let auth = Authenticator::new(
        reqwest::Client::new(),
        CredentialSource::AuthorizedUser(user()),
        format!("{}/token", mock.base_url),
    );

    assert_eq!(auth.access_token().await.unwrap(), "short-lived");
    assert_eq!(auth.access_token().await.unwrap(), "renewed");
    assert_eq!(mock.requests_to("/token").len(), 2);
}

#[tokio::test]
async fn rejected_grant_is_an_auth_error() {
    let mock = MockApi::start().await;
    mock.respond(
        Method::POST,
        "/token",
        StatusCode::BAD_REQUEST,
        json!({
            "error": "invalid_grant",
            "error_description": "Token has been expired or revoked."
        }),
    );

    let auth = Authenticator::new(
        reqwest::Client::new(),
        CredentialSource::AuthorizedUser(user()),
        format!("{}/token", mock.base_url),
    );

    match auth.access_token().await {
        Err(AppError::Auth(message)) => {
            assert!(message.contains("invalid_grant"));
            assert!(message.contains("expired or revoked"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn static_tokens_never_hit_the_token_endpoint() {
    let mock = MockApi::start().await;
    let auth = Authenticator::new(
        reqwest::Client::new(),
        CredentialSource::StaticToken("given".to_string()),
        format!("{}/token", mock.base_url),
    );

    assert_eq!(auth.access_token().await.unwrap(), "given");
    assert!(mock.requests().is_empty());
}
