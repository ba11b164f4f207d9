//! Local and regional inventories.

use crate::error::Result;
use crate::models::common::Price;
use crate::models::inventory::{InventoryAttributes, LocalInventory, RegionalInventory};
use crate::services::inventories;

use super::{Registry, SampleContext, print_json};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "inventories.v1.list_local_inventories",
        "List the store inventories of a product (-p product_id)",
        list_local_inventories
    );
    sample!(
        registry,
        "inventories.v1.insert_local_inventory",
        "Put a product in stock at a store (-p product_id, -p store_code)",
        insert_local_inventory
    );
    sample!(
        registry,
        "inventories.v1.delete_local_inventory",
        "Remove a store inventory (-p product_id, -p store_code)",
        delete_local_inventory
    );
    sample!(
        registry,
        "inventories.v1.list_regional_inventories",
        "List the regional inventories of a product (-p product_id)",
        list_regional_inventories
    );
    sample!(
        registry,
        "inventories.v1.insert_regional_inventory",
        "Put a product in stock in a region (-p product_id, -p region)",
        insert_regional_inventory
    );
    sample!(
        registry,
        "inventories.v1.delete_regional_inventory",
        "Remove a regional inventory (-p product_id, -p region)",
        delete_regional_inventory
    );
    Ok(())
}

fn in_stock() -> InventoryAttributes {
    InventoryAttributes::in_stock(Price::micros(33_450_000, "USD"))
}

async fn list_local_inventories(ctx: &SampleContext) -> Result<()> {
    let all =
        inventories::list_local_inventories(&ctx.client, ctx.account_id(), ctx.param("product_id")?)
            .await?;
    for inventory in &all {
        println!("{}", inventory.store_code);
    }
    println!("The following count of local inventories were returned: {}", all.len());
    Ok(())
}

async fn insert_local_inventory(ctx: &SampleContext) -> Result<()> {
    let inventory = LocalInventory {
        store_code: ctx.param("store_code")?.to_string(),
        local_inventory_attributes: Some(in_stock()),
        ..Default::default()
    };
    let inserted = inventories::insert_local_inventory(
        &ctx.client,
        ctx.account_id(),
        ctx.param("product_id")?,
        &inventory,
    )
    .await?;
    print_json("Inserted LocalInventory below", &inserted)
}

async fn delete_local_inventory(ctx: &SampleContext) -> Result<()> {
    inventories::delete_local_inventory(
        &ctx.client,
        ctx.account_id(),
        ctx.param("product_id")?,
        ctx.param("store_code")?,
    )
    .await?;
    println!("Delete successful.");
    Ok(())
}

async fn list_regional_inventories(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param("product_id")?;
    let all =
        inventories::list_regional_inventories(&ctx.client, ctx.account_id(), product_id).await?;
    for inventory in &all {
        println!("{}", inventory.region);
    }
    println!("The following count of regional inventories were returned: {}", all.len());
    Ok(())
}

async fn insert_regional_inventory(ctx: &SampleContext) -> Result<()> {
    let inventory = RegionalInventory {
        region: ctx.param("region")?.to_string(),
        regional_inventory_attributes: Some(in_stock()),
        ..Default::default()
    };
    let inserted = inventories::insert_regional_inventory(
        &ctx.client,
        ctx.account_id(),
        ctx.param("product_id")?,
        &inventory,
    )
    .await?;
    print_json("Inserted RegionalInventory below", &inserted)
}

async fn delete_regional_inventory(ctx: &SampleContext) -> Result<()> {
    inventories::delete_regional_inventory(
        &ctx.client,
        ctx.account_id(),
        ctx.param("product_id")?,
        ctx.param("region")?,
    )
    .await?;
    println!("Delete successful.");
    Ok(())
}
