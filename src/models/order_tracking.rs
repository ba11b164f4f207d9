//! Order tracking signal models.
//!
//! A signal reports how an order was shipped so Google can estimate
//! delivery times.

use serde::{Deserialize, Serialize};

use super::common::{CivilDateTime, Price, int64};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInfo {
    pub shipment_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_time: Option<CivilDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_delivery_promise_time: Option<CivilDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_delivery_promise_time: Option<CivilDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery_time: Option<CivilDateTime>,

    /// `SHIPPED` or `DELIVERED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_region_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItemDetails {
    pub line_item_id: String,
    pub product_id: String,

    #[serde(with = "int64")]
    pub quantity: i64,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gtins: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// How many units of a line item travelled in a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentLineItemMapping {
    pub shipment_id: String,
    pub line_item_id: String,

    #[serde(with = "int64")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderTrackingSignal {
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub order_tracking_signal_id: Option<i64>,

    pub order_id: String,
    pub order_created_time: CivilDateTime,
    pub shipping_info: Vec<ShippingInfo>,
    pub line_items: Vec<LineItemDetails>,
    pub shipment_line_item_mapping: Vec<ShipmentLineItemMapping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_shipping_fee: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_region_code: Option<String>,
}
