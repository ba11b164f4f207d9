//! Data sources, plus the workflow that creates a data source and inserts
//! its first product.

use crate::client::names;
use crate::error::Result;
use crate::models::datasource::{
    DataSource, Destination, FetchSettings, FileInput, InventoryDataSource,
    PrimaryProductDataSource, PromotionDataSource, SupplementalProductDataSource, TimeOfDay,
};
use crate::services::{datasources, products};

use super::products::sample_product_input;
use super::{Registry, SampleContext, print_json};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "datasources.v1.list_data_sources",
        "List the account's data sources",
        list_data_sources
    );
    sample!(
        registry,
        "datasources.v1.get_data_source",
        "Get one data source (-p data_source_id)",
        get_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_primary_product_data_source",
        "Create a British primary product data source",
        create_primary_product_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_primary_product_data_source_multiple_languages",
        "Create a primary product data source accepting every language",
        create_primary_product_data_source_multiple_languages
    );
    sample!(
        registry,
        "datasources.v1.create_supplemental_product_data_source_multiple_languages",
        "Create an API supplemental product data source for every language",
        create_supplemental_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_file_with_upload_type_primary_product_data_source",
        "Create a primary product data source fed by uploaded files",
        create_upload_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_file_fetch_primary_product_data_source",
        "Create a British online primary product data source fetched daily (-p fetch_uri)",
        create_fetch_primary_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_file_supplemental_product_data_source",
        "Create a British supplemental product data source fed by a file",
        create_file_supplemental_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_file_local_inventory_data_source",
        "Create a British local inventory data source fed by a file",
        create_local_inventory_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_file_regional_inventory_data_source",
        "Create a regional inventory data source fetched daily from a URL",
        create_regional_inventory_data_source
    );
    sample!(
        registry,
        "datasources.v1.create_promotion_data_source",
        "Create a promotion data source for fr/CH",
        create_promotion_data_source
    );
    sample!(
        registry,
        "datasources.v1.update_data_source",
        "Rename a data source (-p data_source_id, -p display_name)",
        update_data_source
    );
    sample!(
        registry,
        "datasources.v1.delete_data_source",
        "Delete a data source (-p data_source_id)",
        delete_data_source
    );
    sample!(
        registry,
        "datasources.v1.fetch_file_data_source",
        "Fetch a file data source now (-p data_source_id)",
        fetch_file_data_source
    );
    sample!(
        registry,
        "datasources.v1.get_file_upload",
        "Processing result of the latest file (-p data_source_id)",
        get_file_upload
    );
    sample!(
        registry,
        "productsdatasourcesworkflow.v1.create_datasource_and_insert_first_product",
        "Create a primary data source and insert a first product into it",
        create_datasource_and_insert_first_product
    );
    Ok(())
}

async fn list_data_sources(ctx: &SampleContext) -> Result<()> {
    let sources = datasources::list_data_sources(&ctx.client, ctx.account_id()).await?;
    for source in &sources {
        println!(
            "{} [{}] {}",
            source.name.as_deref().unwrap_or("<unnamed>"),
            source.kind(),
            source.display_name
        );
    }
    println!("The following count of data sources were returned: {}", sources.len());
    Ok(())
}

async fn get_data_source(ctx: &SampleContext) -> Result<()> {
    let data_source_id = ctx.param("data_source_id")?;
    let source = datasources::get_data_source(&ctx.client, ctx.account_id(), data_source_id).await?;
    print_json("Retrieved DataSource below", &source)
}

/// Create `source` and print the name the service assigned to it.
async fn create(ctx: &SampleContext, source: DataSource) -> Result<String> {
    let created = datasources::create_data_source(&ctx.client, ctx.account_id(), &source).await?;
    let name = created.name.clone().unwrap_or_default();
    print_json("Created DataSource below", &created)?;
    println!("Created DataSource Name: {}", name);
    Ok(name)
}

fn british_primary_source(display_name: &str) -> DataSource {
    let mut source = DataSource::named(display_name);
    source.primary_product_data_source = Some(PrimaryProductDataSource {
        countries: vec!["GB".to_string()],
        content_language: Some("en".to_string()),
        feed_label: Some("GB".to_string()),
        destinations: vec![
            Destination::new("SHOPPING_ADS", true),
            Destination::new("FREE_LISTINGS", false),
        ],
        ..Default::default()
    });
    source
}

/// Primary source without language and feed label: products of any
/// language may be inserted into it.
fn multi_language_primary_source(display_name: &str) -> DataSource {
    let mut source = DataSource::named(display_name);
    source.primary_product_data_source = Some(PrimaryProductDataSource {
        countries: vec!["GB".to_string()],
        ..Default::default()
    });
    source
}

async fn create_primary_product_data_source(ctx: &SampleContext) -> Result<()> {
    let display_name = ctx.param_or("display_name", "British Primary Product Data");
    create(ctx, british_primary_source(display_name)).await?;
    Ok(())
}

async fn create_primary_product_data_source_multiple_languages(ctx: &SampleContext) -> Result<()> {
    let display_name = ctx.param_or("display_name", "British Primary Product Data");
    create(ctx, multi_language_primary_source(display_name)).await?;
    Ok(())
}

async fn create_supplemental_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("Example Multiple Languages Supplemental DataSource");
    source.supplemental_product_data_source = Some(SupplementalProductDataSource::default());
    create(ctx, source).await?;
    Ok(())
}

/// Without fetch settings the file must be uploaded through the Merchant
/// Center UI or SFTP.
async fn create_upload_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = british_primary_source("Example Primary DataSource");
    if let Some(primary) = source.primary_product_data_source.as_mut() {
        primary.destinations.clear();
    }
    source.file_input = Some(FileInput {
        file_name: Some("British T-shirts Primary Product Data.txt".to_string()),
        ..Default::default()
    });
    create(ctx, source).await?;
    Ok(())
}

/// Daily fetch at 22:00 London time.
fn daily_fetch(fetch_uri: &str) -> FetchSettings {
    FetchSettings {
        enabled: Some(true),
        time_of_day: Some(TimeOfDay { hours: 22 }),
        time_zone: Some("Europe/London".to_string()),
        frequency: Some("FREQUENCY_DAILY".to_string()),
        fetch_uri: Some(fetch_uri.to_string()),
        ..Default::default()
    }
}

fn british_inventory() -> InventoryDataSource {
    InventoryDataSource {
        feed_label: "GB".to_string(),
        content_language: "en".to_string(),
    }
}

async fn create_fetch_primary_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("British File Fetch Primary Product Data");
    source.primary_product_data_source = Some(PrimaryProductDataSource {
        channel: Some("ONLINE_PRODUCTS".to_string()),
        countries: vec!["GB".to_string()],
        content_language: Some("en".to_string()),
        feed_label: Some("GB".to_string()),
        ..Default::default()
    });
    source.file_input = Some(FileInput {
        fetch_settings: Some(daily_fetch(
            ctx.param_or("fetch_uri", "https://example.file.com/products"),
        )),
        ..Default::default()
    });
    create(ctx, source).await?;
    Ok(())
}

async fn create_file_supplemental_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("British File Supplemental Product Data");
    source.supplemental_product_data_source = Some(SupplementalProductDataSource {
        feed_label: Some("GB".to_string()),
        content_language: Some("en".to_string()),
        ..Default::default()
    });
    source.file_input = Some(FileInput {
        file_name: Some("British T-shirts Supplemental Data".to_string()),
        ..Default::default()
    });
    create(ctx, source).await?;
    Ok(())
}

async fn create_local_inventory_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("British Local Inventory File");
    source.local_inventory_data_source = Some(british_inventory());
    source.file_input = Some(FileInput {
        file_name: Some("British T-shirts Local Inventory Data".to_string()),
        ..Default::default()
    });
    create(ctx, source).await?;
    Ok(())
}

async fn create_regional_inventory_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("British Regional Inventory File");
    source.regional_inventory_data_source = Some(british_inventory());
    source.file_input = Some(FileInput {
        file_name: Some("British T-shirts Regional Inventory Data".to_string()),
        fetch_settings: Some(daily_fetch(
            ctx.param_or("fetch_uri", "https://example.file.com/in/storage"),
        )),
        ..Default::default()
    });
    create(ctx, source).await?;
    Ok(())
}

async fn create_promotion_data_source(ctx: &SampleContext) -> Result<()> {
    let mut source = DataSource::named("Example DataSource");
    source.promotion_data_source = Some(PromotionDataSource {
        target_country: "CH".to_string(),
        content_language: "fr".to_string(),
    });
    create(ctx, source).await?;
    Ok(())
}

async fn update_data_source(ctx: &SampleContext) -> Result<()> {
    let data_source_id = ctx.param("data_source_id")?;
    let mut source = DataSource::named(ctx.param_or("display_name", "New DataSource Name"));
    source.name = Some(names::data_source(ctx.account_id(), data_source_id));
    let updated = datasources::update_data_source(&ctx.client, &source, &["display_name"]).await?;
    print_json("Updated DataSource below", &updated)
}

async fn delete_data_source(ctx: &SampleContext) -> Result<()> {
    datasources::delete_data_source(&ctx.client, ctx.account_id(), ctx.param("data_source_id")?)
        .await?;
    println!("Delete successful.");
    Ok(())
}

async fn fetch_file_data_source(ctx: &SampleContext) -> Result<()> {
    datasources::fetch_data_source(&ctx.client, ctx.account_id(), ctx.param("data_source_id")?)
        .await?;
    println!("Successfully fetched DataSource.");
    Ok(())
}

async fn get_file_upload(ctx: &SampleContext) -> Result<()> {
    let data_source_id = ctx.param("data_source_id")?;
    let upload =
        datasources::get_latest_file_upload(&ctx.client, ctx.account_id(), data_source_id).await?;
    print_json("Retrieved FileUpload below", &upload)
}

/// # Process
///
/// 1. Create a multi-language primary product data source for GB
/// 2. Insert a product input into the data source just created
async fn create_datasource_and_insert_first_product(ctx: &SampleContext) -> Result<()> {
    let display_name = ctx.param_or(
        "display_name",
        "British Primary Product Data For Workflow Example",
    );
    let data_source = create(ctx, multi_language_primary_source(display_name)).await?;

    let input = sample_product_input(ctx.param_or("offer_id", "sku123"));
    let inserted =
        products::insert_product_input(&ctx.client, ctx.account_id(), &data_source, &input).await?;
    print_json("Inserted ProductInput below", &inserted)?;
    tracing::info!("Inserted first product into {}", data_source);
    Ok(())
}
