//! Product and product input models.
//!
//! - `ProductInput`: what a merchant sends (one per data source)
//! - `Product`: the processed product Google builds from all inputs, with its status

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{CustomAttribute, Price, int64};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    InStock,
    OutOfStock,
    Preorder,
    Backorder,
    #[serde(other)]
    AvailabilityUnspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    New,
    Used,
    Refurbished,
    #[serde(other)]
    ConditionUnspecified,
}

/// Shipping rate for one country and service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Product attributes. Attributes not modelled here are kept in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_product_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gtins: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping: Vec<Shipping>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Product data as supplied through one data source.
///
/// # JSON Example
///
/// ```json
/// {
///   "offerId": "sku123",
///   "contentLanguage": "en",
///   "feedLabel": "CH",
///   "productAttributes": { "title": "A Tale of Two Cities" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    /// `accounts/{account}/productInputs/{productInput}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name of the processed product, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    pub offer_id: String,
    pub content_language: String,
    pub feed_label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_local: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_attributes: Option<ProductAttributes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_attributes: Vec<CustomAttribute>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub version_number: Option<i64>,
}

/// Approval state of a product in one reporting context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DestinationStatus {
    pub reporting_context: Option<String>,
    pub approved_countries: Vec<String>,
    pub pending_countries: Vec<String>,
    pub disapproved_countries: Vec<String>,
}

/// Issue found on a single product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemLevelIssue {
    pub code: Option<String>,
    pub severity: Option<String>,
    pub resolution: Option<String>,
    pub attribute: Option<String>,
    pub reporting_context: Option<String>,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub documentation: Option<String>,
    pub applicable_countries: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductStatus {
    pub destination_statuses: Vec<DestinationStatus>,
    pub item_level_issues: Vec<ItemLevelIssue>,
    pub creation_date: Option<String>,
    pub last_update_date: Option<String>,
    pub google_expiration_date: Option<String>,
}

/// Processed product, read only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub name: String,
    pub offer_id: String,
    pub content_language: String,
    pub feed_label: String,
    pub data_source: Option<String>,
    pub legacy_local: Option<bool>,
    pub product_attributes: Option<ProductAttributes>,
    pub custom_attributes: Vec<CustomAttribute>,
    pub product_status: Option<ProductStatus>,
    #[serde(with = "int64::option")]
    pub version_number: Option<i64>,
}

impl Product {
    pub fn title(&self) -> &str {
        self.product_attributes
            .as_ref()
            .and_then(|a| a.title.as_deref())
            .unwrap_or("")
    }
}
