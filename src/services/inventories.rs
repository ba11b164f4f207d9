//! Inventories API: per-store and per-region price and availability.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::inventory::{LocalInventory, RegionalInventory};

const API: &str = "/inventories/v1";

fn product_path(account_id: &str, product_id: &str) -> String {
    format!("{}/{}", API, names::product(account_id, product_id))
}

pub async fn list_local_inventories(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
) -> Result<Vec<LocalInventory>> {
    client
        .list_all(
            &format!("{}/localInventories", product_path(account_id, product_id)),
            &[],
            "localInventories",
        )
        .await
}

/// Insert or replace the inventory for `inventory.store_code`.
pub async fn insert_local_inventory(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    inventory: &LocalInventory,
) -> Result<LocalInventory> {
    client
        .post(
            &format!("{}/localInventories:insert", product_path(account_id, product_id)),
            &[],
            inventory,
        )
        .await
}

pub async fn delete_local_inventory(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    store_code: &str,
) -> Result<()> {
    client
        .delete(
            &format!(
                "{}/localInventories/{}",
                product_path(account_id, product_id),
                store_code
            ),
            &[],
        )
        .await
}

pub async fn list_regional_inventories(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
) -> Result<Vec<RegionalInventory>> {
    client
        .list_all(
            &format!("{}/regionalInventories", product_path(account_id, product_id)),
            &[],
            "regionalInventories",
        )
        .await
}

/// Insert or replace the inventory for `inventory.region`.
pub async fn insert_regional_inventory(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    inventory: &RegionalInventory,
) -> Result<RegionalInventory> {
    client
        .post(
            &format!("{}/regionalInventories:insert", product_path(account_id, product_id)),
            &[],
            inventory,
        )
        .await
}

pub async fn delete_regional_inventory(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    region: &str,
) -> Result<()> {
    client
        .delete(
            &format!(
                "{}/regionalInventories/{}",
                product_path(account_id, product_id),
                region
            ),
            &[],
        )
        .await
}
