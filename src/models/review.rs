//! Merchant and product review models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{CustomAttribute, int64};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantReviewAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub min_rating: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub max_rating: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,

    /// `MERCHANT_UNSOLICITED`, `POINT_OF_SALE` or `AFTER_FULFILLMENT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantReview {
    /// `accounts/{account}/merchantReviews/{review}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub merchant_review_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MerchantReviewAttributes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_review_status: Option<Value>,
}

/// Link to the review on the publisher's site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewLink {
    /// `SINGLETON` or `GROUP`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductReviewAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregator_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_link: Option<ReviewLink>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub min_rating: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub max_rating: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_names: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_links: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gtins: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skus: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductReview {
    /// `accounts/{account}/productReviews/{review}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub product_review_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ProductReviewAttributes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_review_status: Option<Value>,
}
