//! Promotion models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{CustomAttribute, Interval, Price, int64};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromotionAttributes {
    /// `ALL_PRODUCTS` or `SPECIFIC_PRODUCTS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_applicability: Option<String>,

    /// `NO_CODE` or `GENERIC_CODE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_redemption_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_title: Option<String>,

    /// `PERCENT_OFF`, `MONEY_OFF`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_value_type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub promotion_destinations: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub percent_off: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub money_off_amount: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_effective_time_period: Option<Interval>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_display_time_period: Option<Interval>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Promotion {
    /// `accounts/{account}/promotions/{promotion}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub promotion_id: String,
    pub content_language: String,
    pub target_country: String,

    /// `ONLINE` and/or `IN_STORE`
    pub redemption_channel: Vec<String>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PromotionAttributes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_status: Option<Value>,
}

/// Body of `promotions:insert`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPromotionRequest {
    pub promotion: Promotion,

    /// `accounts/{account}/dataSources/{datasource}`
    pub data_source: String,
}
