//! Local (per store) and regional inventory models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::Price;
use super::product::Availability;

/// Price and availability overrides shared by local and regional inventories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalInventory {
    /// `accounts/{account}/products/{product}/localInventories/{store_code}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub store_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_inventory_attributes: Option<InventoryAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalInventory {
    /// `accounts/{account}/products/{product}/regionalInventories/{region}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub region: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_inventory_attributes: Option<InventoryAttributes>,
}

impl InventoryAttributes {
    pub fn in_stock(price: Price) -> Self {
        Self {
            availability: Some(Availability::InStock),
            price: Some(price),
            ..Default::default()
        }
    }
}
