//! HTTP behaviour of the client against a mock API: bearer tokens,
//! pagination, error envelopes and resource paths.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{ACCOUNT_ID, MockApi, TOKEN};
use merchant_api_samples::error::AppError;
use merchant_api_samples::models::product::ProductInput;
use merchant_api_samples::services::products::{self, ProductIdEncoding};
use merchant_api_samples::services::{accounts, notifications, reports};

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let mock = MockApi::start().await;
    mock.on(
        Method::GET,
        "/accounts/v1/accounts/123",
        json!({ "name": "accounts/123", "accountId": "123", "accountName": "Shop" }),
    );

    let account = accounts::get_account(&mock.client(), ACCOUNT_ID).await.unwrap();
    assert_eq!(account.name.as_deref(), Some("accounts/123"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some(format!("Bearer {}", TOKEN).as_str()));
}

#[tokio::test]
async fn list_all_follows_next_page_tokens() {
    let mock = MockApi::start().await;
    let path = "/products/v1/accounts/123/products";
    mock.on(
        Method::GET,
        path,
        json!({
            "products": [{ "name": "accounts/123/products/en~US~a", "offerId": "a" }],
            "nextPageToken": "p2"
        }),
    );
    mock.on(
        Method::GET,
        path,
        json!({ "products": [{ "name": "accounts/123/products/en~US~b", "offerId": "b" }] }),
    );

    let all = products::list_products(&mock.client(), ACCOUNT_ID).await.unwrap();
    let offers: Vec<&str> = all.iter().map(|p| p.offer_id.as_str()).collect();
    assert_eq!(offers, vec!["a", "b"]);

    let requests = mock.requests_to(path);
    assert_eq!(requests.len(), 2);
    assert!(requests[0].query_pairs().get("pageToken").is_none());
    assert_eq!(requests[1].query_pairs().get("pageToken").map(String::as_str), Some("p2"));
    assert_eq!(requests[1].query_pairs().get("pageSize").map(String::as_str), Some("1000"));
}

#[tokio::test]
async fn missing_items_field_is_an_empty_list() {
    let mock = MockApi::start().await;
    mock.on(Method::GET, "/notifications/v1/accounts/123/notificationsubscriptions", json!({}));

    let all = notifications::list_subscriptions(&mock.client(), ACCOUNT_ID).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn error_envelope_becomes_api_error() {
    let mock = MockApi::start().await;
    mock.fail(
        Method::GET,
        "/accounts/v1/accounts/123",
        StatusCode::FORBIDDEN,
        "PERMISSION_DENIED",
        "The caller does not have permission",
    );

    let err = accounts::get_account(&mock.client(), ACCOUNT_ID).await.unwrap_err();
    match &err {
        AppError::Api { status, code, message } => {
            assert_eq!(*status, 403);
            assert_eq!(code, "PERMISSION_DENIED");
            assert_eq!(message, "The caller does not have permission");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_permission_denied());
}

#[tokio::test]
async fn base64_product_ids_are_flagged_in_the_query() {
    let mock = MockApi::start().await;
    // base64url("en~US~sku/1")
    let path = "/products/v1/accounts/123/products/ZW5-VVN-c2t1LzE";
    mock.on(
        Method::GET,
        path,
        json!({ "name": "accounts/123/products/en~US~sku/1", "offerId": "sku/1" }),
    );

    let product = products::get_product(
        &mock.client(),
        ACCOUNT_ID,
        "en~US~sku/1",
        ProductIdEncoding::Base64Url,
    )
    .await
    .unwrap();
    assert_eq!(product.offer_id, "sku/1");

    let request = &mock.requests_to(path)[0];
    assert_eq!(
        request.query_pairs().get("productIdBase64UrlEncoded").map(String::as_str),
        Some("true")
    );
}

#[tokio::test]
async fn product_input_insert_sends_data_source_and_int64_strings() {
    let mock = MockApi::start().await;
    let path = "/products/v1/accounts/123/productInputs:insert";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/productInputs/en~GB~sku1", "offerId": "sku1" }),
    );

    let input: ProductInput = serde_json::from_value(json!({
        "offerId": "sku1",
        "contentLanguage": "en",
        "feedLabel": "GB",
        "productAttributes": { "price": { "amountMicros": 1500000, "currencyCode": "GBP" } }
    }))
    .unwrap();

    let inserted = products::insert_product_input(
        &mock.client(),
        ACCOUNT_ID,
        "accounts/123/dataSources/9",
        &input,
    )
    .await
    .unwrap();
    assert_eq!(inserted.name.as_deref(), Some("accounts/123/productInputs/en~GB~sku1"));

    let request = &mock.requests_to(path)[0];
    assert_eq!(
        request.query_pairs().get("dataSource").map(String::as_str),
        Some("accounts/123/dataSources/9")
    );
    assert_eq!(request.json()["productAttributes"]["price"]["amountMicros"], "1500000");
}

#[tokio::test]
async fn delete_accepts_an_empty_body() {
    let mock = MockApi::start().await;
    let path = "/products/v1/accounts/123/productInputs/en~GB~sku1";
    mock.on(Method::DELETE, path, json!({}));

    let data_source = "accounts/123/dataSources/9";
    products::delete_product_input(&mock.client(), ACCOUNT_ID, "en~GB~sku1", data_source)
        .await
        .unwrap();
    assert_eq!(mock.requests_to(path)[0].method, Method::DELETE);
}

#[tokio::test]
async fn report_search_pages_through_the_body_token() {
    let mock = MockApi::start().await;
    let path = "/reports/v1/accounts/123/reports:search";
    mock.on(
        Method::POST,
        path,
        json!({ "results": [{ "productView": { "id": "en~US~a" } }], "nextPageToken": "t2" }),
    );
    mock.on(Method::POST, path, json!({ "results": [{ "productView": { "id": "en~US~b" } }] }));

    let rows = reports::search_all(&mock.client(), ACCOUNT_ID, "SELECT id FROM product_view", 10)
        .await
        .unwrap();
    let ids: Vec<&str> = rows.iter().filter_map(|r| r.product_view_id()).collect();
    assert_eq!(ids, vec!["en~US~a", "en~US~b"]);

    let requests = mock.requests_to(path);
    assert_eq!(requests[0].json()["pageSize"], 10);
    assert!(requests[0].json().get("pageToken").is_none());
    assert_eq!(requests[1].json()["pageToken"], "t2");
}
