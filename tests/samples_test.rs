//! Samples run end to end through the registry against the mock API.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::MockApi;
use merchant_api_samples::error::AppError;
use merchant_api_samples::samples::{self, SampleContext};

async fn run(name: &str, ctx: &SampleContext) -> Result<(), AppError> {
    let registry = samples::registry().unwrap();
    let sample = registry.find(name).unwrap_or_else(|| panic!("no sample named {}", name));
    (sample.run)(ctx).await
}

#[tokio::test]
async fn async_product_insert_sends_five_distinct_offers() {
    let mock = MockApi::start().await;
    let path = "/products/v1/accounts/123/productInputs:insert";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/productInputs/en~US~x", "offerId": "x" }),
    );

    let ctx = mock.context(&[("data_source_id", "77")]);
    run("products.v1.insert_product_input_async", &ctx).await.unwrap();

    let requests = mock.requests_to(path);
    assert_eq!(requests.len(), 5);
    let mut offers: Vec<String> = requests
        .iter()
        .map(|r| r.json()["offerId"].as_str().unwrap().to_string())
        .collect();
    offers.sort();
    offers.dedup();
    assert_eq!(offers.len(), 5);
    for request in &requests {
        assert_eq!(
            request.query_pairs().get("dataSource").map(String::as_str),
            Some("accounts/123/dataSources/77")
        );
        assert_eq!(
            request.json()["productAttributes"]["title"],
            "Async - A Tale of Two Cities"
        );
    }
}

#[tokio::test]
async fn failed_batch_reports_the_failure_count() {
    let mock = MockApi::start().await;
    mock.fail(
        Method::POST,
        "/promotions/v1/accounts/123/promotions:insert",
        StatusCode::BAD_REQUEST,
        "INVALID_ARGUMENT",
        "promotion is invalid",
    );

    let ctx = mock.context(&[("data_source_id", "5")]);
    let err = run("promotions.v1.insert_promotions_async", &ctx).await.unwrap_err();
    assert!(matches!(err, AppError::Batch { failed: 5, total: 5 }));
}

#[tokio::test]
async fn missing_parameter_is_named() {
    let mock = MockApi::start().await;
    let ctx = mock.context(&[]);

    let err = run("reviews.v1.get_merchant_review", &ctx).await.unwrap_err();
    match err {
        AppError::MissingParam(name) => assert_eq!(name, "review_id"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn account_id_parameter_overrides_merchant_info() {
    let mock = MockApi::start().await;
    mock.on(
        Method::GET,
        "/accounts/v1/accounts/999",
        json!({ "name": "accounts/999", "accountName": "Other shop" }),
    );

    let ctx = mock.context(&[("account_id", "999")]);
    assert_eq!(ctx.account_id(), "999");
    run("accounts.accounts.v1.get_account", &ctx).await.unwrap();
    assert_eq!(mock.requests_to("/accounts/v1/accounts/999").len(), 1);
}

#[tokio::test]
async fn workflow_inserts_into_the_data_source_it_created() {
    let mock = MockApi::start().await;
    mock.on(
        Method::POST,
        "/datasources/v1/accounts/123/dataSources",
        json!({
            "name": "accounts/123/dataSources/4242",
            "dataSourceId": "4242",
            "displayName": "British Primary Product Data For Workflow Example",
            "primaryProductDataSource": { "countries": ["GB"] }
        }),
    );
    mock.on(
        Method::POST,
        "/products/v1/accounts/123/productInputs:insert",
        json!({ "name": "accounts/123/productInputs/en~CH~sku123", "offerId": "sku123" }),
    );

    let ctx = mock.context(&[]);
    run(
        "productsdatasourcesworkflow.v1.create_datasource_and_insert_first_product",
        &ctx,
    )
    .await
    .unwrap();

    let created = mock.requests_to("/datasources/v1/accounts/123/dataSources")[0].json();
    assert_eq!(created["displayName"], "British Primary Product Data For Workflow Example");
    assert!(created["primaryProductDataSource"].get("contentLanguage").is_none());

    let insert = &mock.requests_to("/products/v1/accounts/123/productInputs:insert")[0];
    assert_eq!(
        insert.query_pairs().get("dataSource").map(String::as_str),
        Some("accounts/123/dataSources/4242")
    );
    assert_eq!(insert.json()["productAttributes"]["title"], "A Tale of Two Cities");
}

#[tokio::test]
async fn notification_subscription_targets_every_managed_account() {
    let mock = MockApi::start().await;
    let path = "/notifications/v1/accounts/123/notificationsubscriptions";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/notificationsubscriptions/1" }),
    );

    let ctx = mock.context(&[("all_managed_accounts", "true")]);
    run("notifications.v1.create_notification_subscription", &ctx).await.unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(body["registeredEvent"], "PRODUCT_STATUS_CHANGE");
    assert_eq!(body["allManagedAccounts"], true);
    assert!(body.get("targetAccount").is_none());
    assert_eq!(body["callBackUri"], "https://www.samplesite.com");
}

#[tokio::test]
async fn order_tracking_signal_uses_the_given_products() {
    let mock = MockApi::start().await;
    let path = "/ordertracking/v1/accounts/123/ordertrackingsignals";
    mock.on(
        Method::POST,
        path,
        json!({ "orderTrackingSignalId": "1", "orderId": "unique_order_id443455" }),
    );

    let ctx = mock.context(&[("product_ids", "online~en~US~a;online~en~US~b")]);
    run("ordertracking.v1.create_order_tracking_signal", &ctx).await.unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(body["lineItems"][0]["productId"], "online~en~US~a");
    assert_eq!(body["lineItems"][1]["productId"], "online~en~US~b");
    assert_eq!(body["customerShippingFee"]["amountMicros"], "5000000");
}

#[tokio::test]
async fn disapproved_products_are_fetched_one_by_one() {
    let mock = MockApi::start().await;
    mock.on(
        Method::POST,
        "/reports/v1/accounts/123/reports:search",
        json!({ "results": [
            { "productView": { "id": "en~US~a" } },
            { "productView": { "id": "en~US~b" } }
        ] }),
    );
    for id in ["en~US~a", "en~US~b"] {
        mock.on(
            Method::GET,
            &format!("/products/v1/accounts/123/products/{}", id),
            json!({ "name": format!("accounts/123/products/{}", id) }),
        );
    }

    let ctx = mock.context(&[]);
    run("products.v1.filter_disapproved_products", &ctx).await.unwrap();

    let query = mock.requests_to("/reports/v1/accounts/123/reports:search")[0].json();
    assert!(
        query["query"]
            .as_str()
            .unwrap()
            .contains("NOT_ELIGIBLE_OR_DISAPPROVED")
    );
    assert_eq!(mock.requests_to("/products/v1/accounts/123/products/en~US~a").len(), 1);
    assert_eq!(mock.requests_to("/products/v1/accounts/123/products/en~US~b").len(), 1);
}

#[tokio::test]
async fn product_input_update_masks_the_custom_attribute() {
    let mock = MockApi::start().await;
    let path = "/products/v1/accounts/123/productInputs/en~US~sku123";
    mock.on(
        Method::PATCH,
        path,
        json!({ "name": "accounts/123/productInputs/en~US~sku123", "offerId": "sku123" }),
    );

    let ctx = mock.context(&[("product_id", "en~US~sku123"), ("data_source_id", "77")]);
    run("products.v1.update_product_input", &ctx).await.unwrap();

    let request = &mock.requests_to(path)[0];
    let query = request.query_pairs();
    let mask: Vec<&str> = query["updateMask"].split(',').collect();
    assert!(mask.contains(&"custom_attributes.mycustomattribute"));
    assert!(mask.contains(&"product_attributes.title"));
    assert!(!mask.iter().any(|path| path.starts_with("custom_attribute.")));
    assert_eq!(query["dataSource"], "accounts/123/dataSources/77");

    let body = request.json();
    assert_eq!(body["customAttributes"][0]["name"], "mycustomattribute");
    assert_eq!(body["customAttributes"][0]["value"], "Example value");
}

#[tokio::test]
async fn homepage_update_sends_the_mask_and_typed_body() {
    let mock = MockApi::start().await;
    let path = "/accounts/v1/accounts/123/homepage";
    mock.on(
        Method::PATCH,
        path,
        json!({ "name": "accounts/123/homepage", "uri": "https://shop.example", "claimed": false }),
    );

    let ctx = mock.context(&[("uri", "https://shop.example")]);
    run("accounts.homepages.v1.update_homepage", &ctx).await.unwrap();

    let request = &mock.requests_to(path)[0];
    assert_eq!(request.query_pairs()["updateMask"], "uri");
    assert_eq!(
        request.json(),
        json!({ "name": "accounts/123/homepage", "uri": "https://shop.example" })
    );
}

#[tokio::test]
async fn shipping_settings_insert_carries_typed_services() {
    let mock = MockApi::start().await;
    let path = "/accounts/v1/accounts/123/shippingSettings:insert";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/shippingSettings", "etag": "abc" }),
    );

    let ctx = mock.context(&[("etag", "abc")]);
    run("accounts.shippingsettings.v1.insert_shipping_settings", &ctx).await.unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(body["etag"], "abc");
    let service = &body["services"][0];
    assert_eq!(service["serviceName"], "Canadian Postal Service");
    assert_eq!(service["deliveryCountries"], json!(["CA"]));
    assert_eq!(service["rateGroups"][0]["singleValue"]["pricePercentage"], "5.4");
    assert_eq!(service["minimumOrderValue"]["amountMicros"], "10000000");
}

#[tokio::test]
async fn account_service_delete_targets_the_service() {
    let mock = MockApi::start().await;
    let path = "/accounts/v1/accounts/123/services/456";
    mock.on(Method::DELETE, path, json!({}));

    let ctx = mock.context(&[("service_id", "456")]);
    run("accounts.accountservices.v1.delete_account_service", &ctx).await.unwrap();

    let requests = mock.requests_to(path);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
}

#[tokio::test]
async fn local_inventory_file_data_source_is_created() {
    let mock = MockApi::start().await;
    let path = "/datasources/v1/accounts/123/dataSources";
    mock.on(Method::POST, path, json!({ "name": "accounts/123/dataSources/9" }));

    let ctx = mock.context(&[]);
    run("datasources.v1.create_file_local_inventory_data_source", &ctx).await.unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(
        body["localInventoryDataSource"],
        json!({ "feedLabel": "GB", "contentLanguage": "en" })
    );
    assert_eq!(body["fileInput"]["fileName"], "British T-shirts Local Inventory Data");
    assert!(body["fileInput"].get("fetchSettings").is_none());
}

#[tokio::test]
async fn fetch_primary_data_source_schedules_a_daily_fetch() {
    let mock = MockApi::start().await;
    let path = "/datasources/v1/accounts/123/dataSources";
    mock.on(Method::POST, path, json!({ "name": "accounts/123/dataSources/10" }));

    let ctx = mock.context(&[("fetch_uri", "https://feeds.example/products.xml")]);
    run("datasources.v1.create_file_fetch_primary_product_data_source", &ctx)
        .await
        .unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(body["primaryProductDataSource"]["channel"], "ONLINE_PRODUCTS");
    let fetch = &body["fileInput"]["fetchSettings"];
    assert_eq!(fetch["fetchUri"], "https://feeds.example/products.xml");
    assert_eq!(fetch["frequency"], "FREQUENCY_DAILY");
    assert_eq!(fetch["timeZone"], "Europe/London");
}

#[tokio::test]
async fn supplemental_file_data_source_is_created() {
    let mock = MockApi::start().await;
    let path = "/datasources/v1/accounts/123/dataSources";
    mock.on(Method::POST, path, json!({ "name": "accounts/123/dataSources/11" }));

    let ctx = mock.context(&[]);
    run("datasources.v1.create_file_supplemental_product_data_source", &ctx)
        .await
        .unwrap();

    let body = mock.requests_to(path)[0].json();
    assert_eq!(body["supplementalProductDataSource"]["feedLabel"], "GB");
    assert_eq!(body["supplementalProductDataSource"]["contentLanguage"], "en");
    assert_eq!(body["fileInput"]["fileName"], "British T-shirts Supplemental Data");
}

fn sub_accounts_with_issues(mock: &MockApi) {
    mock.on(
        Method::GET,
        "/accounts/v1/accounts/123:listSubaccounts",
        json!({ "accounts": [{ "name": "accounts/1" }, { "name": "accounts/2" }] }),
    );
    mock.on(
        Method::GET,
        "/accounts/v1/accounts/1/issues",
        json!({ "accountIssues": [{ "name": "accounts/1/issues/a", "title": "Missing tax" }] }),
    );
}

#[tokio::test]
async fn advanced_account_issues_fan_out_over_sub_accounts() {
    let mock = MockApi::start().await;
    sub_accounts_with_issues(&mock);
    mock.on(Method::GET, "/accounts/v1/accounts/2/issues", json!({}));

    let ctx = mock.context(&[("language_code", "de-DE")]);
    run("accounts.accountissues.v1.list_advanced_account_issues_async", &ctx)
        .await
        .unwrap();

    for path in ["/accounts/v1/accounts/1/issues", "/accounts/v1/accounts/2/issues"] {
        let requests = mock.requests_to(path);
        assert_eq!(requests.len(), 1, "{}", path);
        let query = requests[0].query_pairs();
        assert_eq!(query["languageCode"], "de-DE");
        assert_eq!(query["timeZone"], "America/Los_Angeles");
    }
}

#[tokio::test]
async fn advanced_account_issues_report_a_failing_sub_account() {
    let mock = MockApi::start().await;
    sub_accounts_with_issues(&mock);
    mock.fail(
        Method::GET,
        "/accounts/v1/accounts/2/issues",
        StatusCode::FORBIDDEN,
        "PERMISSION_DENIED",
        "caller cannot read account 2",
    );

    let ctx = mock.context(&[]);
    let err = run("accounts.accountissues.v1.list_advanced_account_issues_async", &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Batch { failed: 1, total: 2 }));
}

#[tokio::test]
async fn merchant_reviews_async_insert_five_distinct_reviews() {
    let mock = MockApi::start().await;
    let path = "/reviews/v1beta/accounts/123/merchantReviews:insert";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/merchantReviews/x", "merchantReviewId": "x" }),
    );

    let ctx = mock.context(&[("data_source_id", "31")]);
    run("reviews.v1.insert_merchant_reviews_async", &ctx).await.unwrap();

    let requests = mock.requests_to(path);
    assert_eq!(requests.len(), 5);
    let mut ids: Vec<String> = requests
        .iter()
        .map(|r| r.json()["merchantReviewId"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    for request in &requests {
        assert_eq!(request.query_pairs()["dataSource"], "accounts/123/dataSources/31");
        assert_eq!(request.json()["attributes"]["title"], "Great Merchant!");
    }
}

#[tokio::test]
async fn product_reviews_async_insert_five_distinct_reviews() {
    let mock = MockApi::start().await;
    let path = "/reviews/v1beta/accounts/123/productReviews:insert";
    mock.on(
        Method::POST,
        path,
        json!({ "name": "accounts/123/productReviews/x", "productReviewId": "x" }),
    );

    let ctx = mock.context(&[("data_source_id", "32")]);
    run("reviews.v1.insert_product_reviews_async", &ctx).await.unwrap();

    let requests = mock.requests_to(path);
    assert_eq!(requests.len(), 5);
    let mut ids: Vec<String> = requests
        .iter()
        .map(|r| r.json()["productReviewId"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    for request in &requests {
        assert_eq!(request.query_pairs()["dataSource"], "accounts/123/dataSources/32");
        assert_eq!(request.json()["attributes"]["title"], "Would not recommend!");
    }
}

#[tokio::test]
async fn partial_batch_failure_counts_only_the_failed_requests() {
    let mock = MockApi::start().await;
    let path = "/reviews/v1beta/accounts/123/productReviews:insert";
    for _ in 0..3 {
        mock.on(
            Method::POST,
            path,
            json!({ "name": "accounts/123/productReviews/ok", "productReviewId": "ok" }),
        );
    }
    for _ in 0..2 {
        mock.fail(
            Method::POST,
            path,
            StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
            "review is invalid",
        );
    }

    let ctx = mock.context(&[("data_source_id", "32")]);
    let err = run("reviews.v1.insert_product_reviews_async", &ctx).await.unwrap_err();
    assert!(matches!(err, AppError::Batch { failed: 2, total: 5 }));
    assert_eq!(mock.requests_to(path).len(), 5);
}
