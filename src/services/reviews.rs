//! Reviews API (merchant and product reviews).

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::review::{MerchantReview, ProductReview};

const API: &str = "/reviews/v1beta";

fn collection(account_id: &str, kind: &str) -> String {
    format!("{}/{}/{}", API, names::account(account_id), kind)
}

pub async fn insert_merchant_review(
    client: &MerchantClient,
    account_id: &str,
    data_source: &str,
    review: &MerchantReview,
) -> Result<MerchantReview> {
    client
        .post(
            &format!("{}:insert", collection(account_id, "merchantReviews")),
            &[("dataSource", data_source.to_string())],
            review,
        )
        .await
}

pub async fn list_merchant_reviews(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<MerchantReview>> {
    client
        .list_all(&collection(account_id, "merchantReviews"), &[], "merchantReviews")
        .await
}

pub async fn get_merchant_review(
    client: &MerchantClient,
    account_id: &str,
    review_id: &str,
) -> Result<MerchantReview> {
    client
        .get(
            &format!("{}/{}", collection(account_id, "merchantReviews"), review_id),
            &[],
        )
        .await
}

pub async fn delete_merchant_review(
    client: &MerchantClient,
    account_id: &str,
    review_id: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", collection(account_id, "merchantReviews"), review_id),
            &[],
        )
        .await
}

pub async fn insert_product_review(
    client: &MerchantClient,
    account_id: &str,
    data_source: &str,
    review: &ProductReview,
) -> Result<ProductReview> {
    client
        .post(
            &format!("{}:insert", collection(account_id, "productReviews")),
            &[("dataSource", data_source.to_string())],
            review,
        )
        .await
}

pub async fn list_product_reviews(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<ProductReview>> {
    client
        .list_all(&collection(account_id, "productReviews"), &[], "productReviews")
        .await
}

pub async fn get_product_review(
    client: &MerchantClient,
    account_id: &str,
    review_id: &str,
) -> Result<ProductReview> {
    client
        .get(
            &format!("{}/{}", collection(account_id, "productReviews"), review_id),
            &[],
        )
        .await
}

pub async fn delete_product_review(
    client: &MerchantClient,
    account_id: &str,
    review_id: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", collection(account_id, "productReviews"), review_id),
            &[],
        )
        .await
}
