//! Products and product inputs.

use crate::batch::fan_out;
use crate::client::names;
use crate::error::{AppError, Result};
use crate::models::common::{CustomAttribute, Price};
use crate::models::product::{Availability, Condition, ProductAttributes, ProductInput, Shipping};
use crate::services::products::{self, ProductIdEncoding};
use crate::services::reports;

use super::{Registry, SampleContext, print_json, random_id};

const DEFAULT_PRODUCT_ID: &str = "online~en~us~sku123";

const PRODUCT_VIEW_QUERY: &str = "SELECT offer_id, id, title, price \
     FROM product_view \
     WHERE aggregated_reporting_context_status = 'NOT_ELIGIBLE_OR_DISAPPROVED'";

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(registry, "products.v1.list_products", "List every processed product", list_products);
    sample!(registry, "products.v1.get_product", "Get one product (-p product_id)", get_product);
    sample!(
        registry,
        "products.v1.get_base64_encoded_product",
        "Get a product whose offer id needs URL encoding (-p product_id)",
        get_base64_encoded_product
    );
    sample!(
        registry,
        "products.v1.insert_product_input",
        "Insert a book into an API data source (-p data_source_id)",
        insert_product_input
    );
    sample!(
        registry,
        "products.v1.insert_product_input_async",
        "Insert five random books concurrently (-p data_source_id)",
        insert_product_inputs_async
    );
    sample!(
        registry,
        "products.v1.update_product_input",
        "Update attributes of a product input (-p product_id, -p data_source_id)",
        update_product_input
    );
    sample!(
        registry,
        "products.v1.delete_product_input",
        "Delete a product input (-p product_id, -p data_source_id)",
        delete_product_input
    );
    sample!(
        registry,
        "products.v1.filter_disapproved_products",
        "Find disapproved products with a report query and fetch each of them",
        filter_disapproved_products
    );
    Ok(())
}

/// The book inserted by the product samples.
pub(super) fn sample_product_input(offer_id: &str) -> ProductInput {
    let price = Price::micros(33_450_000, "USD");
    let shipping = ["GB", "FR"]
        .into_iter()
        .map(|country| Shipping {
            price: Some(price.clone()),
            country: Some(country.to_string()),
            service: Some("1st class post".to_string()),
        })
        .collect();

    ProductInput {
        offer_id: offer_id.to_string(),
        content_language: "en".to_string(),
        feed_label: "CH".to_string(),
        product_attributes: Some(ProductAttributes {
            title: Some("A Tale of Two Cities".to_string()),
            description: Some("A classic novel about the French Revolution".to_string()),
            link: Some("https://exampleWebsite.com/tale-of-two-cities.html".to_string()),
            image_link: Some("https://exampleWebsite.com/tale-of-two-cities.jpg".to_string()),
            availability: Some(Availability::InStock),
            condition: Some(Condition::New),
            google_product_category: Some("Media > Books".to_string()),
            gtins: vec!["9780007350896".to_string()],
            price: Some(price),
            shipping,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn data_source_name(ctx: &SampleContext) -> Result<String> {
    Ok(names::data_source(ctx.account_id(), ctx.param("data_source_id")?))
}

async fn list_products(ctx: &SampleContext) -> Result<()> {
    let products = products::list_products(&ctx.client, ctx.account_id()).await?;
    for product in &products {
        println!("{}: {}", product.name, product.title());
    }
    println!("The following count of products were returned: {}", products.len());
    Ok(())
}

async fn get_product(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param_or("product_id", DEFAULT_PRODUCT_ID);
    let product =
        products::get_product(&ctx.client, ctx.account_id(), product_id, ProductIdEncoding::Plain)
            .await?;
    print_json("Retrieved Product below", &product)
}

async fn get_base64_encoded_product(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param_or("product_id", "online~en~US~sku/123");
    println!("Encoded product id: {}", names::encode_product_id(product_id));
    let product = products::get_product(
        &ctx.client,
        ctx.account_id(),
        product_id,
        ProductIdEncoding::Base64Url,
    )
    .await?;
    print_json("Retrieved Product below", &product)
}

async fn insert_product_input(ctx: &SampleContext) -> Result<()> {
    let data_source = data_source_name(ctx)?;
    let input = sample_product_input(ctx.param_or("offer_id", "sku123"));
    let inserted =
        products::insert_product_input(&ctx.client, ctx.account_id(), &data_source, &input).await?;
    print_json("Inserted ProductInput below", &inserted)
}

async fn insert_product_inputs_async(ctx: &SampleContext) -> Result<()> {
    let data_source = data_source_name(ctx)?;
    let inputs: Vec<ProductInput> = (0..5)
        .map(|_| {
            let mut input = sample_product_input(&random_id(8));
            input.feed_label = "US".to_string();
            if let Some(attributes) = input.product_attributes.as_mut() {
                attributes.title = Some("Async - A Tale of Two Cities".to_string());
            }
            input
        })
        .collect();

    println!("Sending insert product input requests");
    let outcome = fan_out(inputs.iter().map(|input| {
        products::insert_product_input(&ctx.client, ctx.account_id(), &data_source, input)
    }))
    .await;
    outcome.report(|input| {
        format!(
            "Inserted ProductInput {}",
            input.name.as_deref().unwrap_or(&input.offer_id)
        )
    })?;
    Ok(())
}

async fn update_product_input(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param("product_id")?;
    let data_source = data_source_name(ctx)?;

    let mut input = sample_product_input("sku123");
    input.name = Some(names::product_input(ctx.account_id(), product_id));
    if let Some(attributes) = input.product_attributes.as_mut() {
        attributes.price = None;
        attributes.shipping.clear();
        attributes.google_product_category = None;
    }
    input.custom_attributes = vec![CustomAttribute::new("mycustomattribute", "Example value")];

    let updated = products::update_product_input(
        &ctx.client,
        ctx.account_id(),
        product_id,
        &data_source,
        &input,
        &[
            "product_attributes.title",
            "product_attributes.description",
            "product_attributes.link",
            "product_attributes.image_link",
            "product_attributes.availability",
            "product_attributes.condition",
            "product_attributes.gtins",
            "custom_attributes.mycustomattribute",
        ],
    )
    .await?;
    print_json("Updated ProductInput below", &updated)
}

async fn delete_product_input(ctx: &SampleContext) -> Result<()> {
    let product_id = ctx.param("product_id")?;
    let data_source = data_source_name(ctx)?;
    products::delete_product_input(&ctx.client, ctx.account_id(), product_id, &data_source).await?;
    println!("Delete successful.");
    Ok(())
}

/// # Process
///
/// 1. Query `product_view` for products not eligible or disapproved
/// 2. Fetch each of them to show its item-level issues
async fn filter_disapproved_products(ctx: &SampleContext) -> Result<()> {
    let rows = reports::search_all(&ctx.client, ctx.account_id(), PRODUCT_VIEW_QUERY, 1000).await?;
    println!("Found {} disapproved product(s)", rows.len());

    for row in &rows {
        let id = row.product_view_id().ok_or_else(|| {
            AppError::InvalidRequest("report row carries no productView.id".to_string())
        })?;
        let product =
            products::get_product(&ctx.client, ctx.account_id(), id, ProductIdEncoding::Plain)
                .await?;
        print_json(&format!("Product {}", product.name), &product)?;
    }
    Ok(())
}
