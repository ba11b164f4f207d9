//! Promotions API.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::promotion::{InsertPromotionRequest, Promotion};

const API: &str = "/promotions/v1";

/// Insert (or replace) a promotion in a promotion data source.
pub async fn insert_promotion(
    client: &MerchantClient,
    account_id: &str,
    data_source: &str,
    promotion: Promotion,
) -> Result<Promotion> {
    let request = InsertPromotionRequest {
        promotion,
        data_source: data_source.to_string(),
    };
    client
        .post(
            &format!("{}/{}/promotions:insert", API, names::account(account_id)),
            &[],
            &request,
        )
        .await
}

pub async fn list_promotions(client: &MerchantClient, account_id: &str) -> Result<Vec<Promotion>> {
    client
        .list_all(
            &format!("{}/{}/promotions", API, names::account(account_id)),
            &[],
            "promotions",
        )
        .await
}

pub async fn get_promotion(
    client: &MerchantClient,
    account_id: &str,
    promotion_id: &str,
) -> Result<Promotion> {
    client
        .get(
            &format!("{}/{}/promotions/{}", API, names::account(account_id), promotion_id),
            &[],
        )
        .await
}
