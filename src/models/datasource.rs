//! Data source models.
//!
//! A data source is the feed configuration products, inventories, promotions
//! or reviews arrive through. Exactly one of the `*_data_source` fields is set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::int64;

/// Marketing destination switched on or off for a primary source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    /// `SHOPPING_ADS`, `FREE_LISTINGS`, `DISPLAY_ADS`, ...
    pub destination: String,
    /// `ENABLED` or `DISABLED`
    pub state: String,
}

impl Destination {
    pub fn new(destination: &str, enabled: bool) -> Self {
        Self {
            destination: destination.to_string(),
            state: if enabled { "ENABLED" } else { "DISABLED" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryProductDataSource {
    /// `ONLINE_PRODUCTS`, `LOCAL_PRODUCTS` or `PRODUCTS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_local: Option<bool>,

    /// Omitted together with `content_language` for multi-language sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<Destination>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rule: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplementalProductDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub referencing_primary_data_sources: Vec<Value>,
}

/// Local or regional inventory source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryDataSource {
    pub feed_label: String,
    pub content_language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromotionDataSource {
    pub target_country: String,
    pub content_language: String,
}

/// Hour of day for scheduled fetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeOfDay {
    pub hours: u32,
}

/// Schedule for fetching a file from a URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FetchSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// `FREQUENCY_DAILY`, `FREQUENCY_WEEKLY` or `FREQUENCY_MONTHLY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// File-based input (fetched, uploaded or from Google Sheets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_settings: Option<FetchSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Output only: `UPLOAD`, `FETCH` or `GOOGLE_SHEETS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_input_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSource {
    /// `accounts/{account}/dataSources/{datasource}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub data_source_id: Option<i64>,

    pub display_name: String,

    /// Output only: `API`, `FILE`, `UI` or `AUTOFEED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_input: Option<FileInput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_product_data_source: Option<PrimaryProductDataSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental_product_data_source: Option<SupplementalProductDataSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_inventory_data_source: Option<InventoryDataSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_inventory_data_source: Option<InventoryDataSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_data_source: Option<PromotionDataSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_review_data_source: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_review_data_source: Option<Value>,
}

impl DataSource {
    pub fn named(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            ..Default::default()
        }
    }

    /// Kind of data the source carries, for listings.
    pub fn kind(&self) -> &'static str {
        if self.primary_product_data_source.is_some() {
            "primary product"
        } else if self.supplemental_product_data_source.is_some() {
            "supplemental product"
        } else if self.local_inventory_data_source.is_some() {
            "local inventory"
        } else if self.regional_inventory_data_source.is_some() {
            "regional inventory"
        } else if self.promotion_data_source.is_some() {
            "promotion"
        } else if self.product_review_data_source.is_some() {
            "product review"
        } else if self.merchant_review_data_source.is_some() {
            "merchant review"
        } else {
            "other"
        }
    }
}

/// Result of the latest file processed by a data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileUpload {
    pub name: Option<String>,
    #[serde(with = "int64::option")]
    pub data_source_id: Option<i64>,
    pub processing_state: Option<String>,
    pub issues: Vec<Value>,
    #[serde(with = "int64::option")]
    pub items_total: Option<i64>,
    #[serde(with = "int64::option")]
    pub items_created: Option<i64>,
    #[serde(with = "int64::option")]
    pub items_updated: Option<i64>,
    pub upload_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_language_primary_source_omits_language() {
        let mut source = DataSource::named("British Primary Product Data");
        source.primary_product_data_source = Some(PrimaryProductDataSource {
            countries: vec!["GB".into()],
            ..Default::default()
        });
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["primaryProductDataSource"]["countries"][0], "GB");
        assert!(json["primaryProductDataSource"].get("contentLanguage").is_none());
        assert!(json.get("name").is_none());
        assert_eq!(source.kind(), "primary product");
    }
}
