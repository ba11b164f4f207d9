//! Products API: processed products and product inputs.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::product::{Product, ProductInput};

const API: &str = "/products/v1";

/// How a product id is placed in the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductIdEncoding {
    /// `contentLanguage~feedLabel~offerId` as-is
    Plain,
    /// base64url without padding, for offer ids containing `/` or `%`
    Base64Url,
}

pub async fn get_product(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    encoding: ProductIdEncoding,
) -> Result<Product> {
    let (id, query) = match encoding {
        ProductIdEncoding::Plain => (product_id.to_string(), Vec::new()),
        ProductIdEncoding::Base64Url => (
            names::encode_product_id(product_id),
            vec![("productIdBase64UrlEncoded", "true".to_string())],
        ),
    };
    client
        .get(&format!("{}/{}", API, names::product(account_id, &id)), &query)
        .await
}

/// List every processed product of the account (all pages).
pub async fn list_products(client: &MerchantClient, account_id: &str) -> Result<Vec<Product>> {
    client
        .list_all(
            &format!("{}/{}/products", API, names::account(account_id)),
            &[("pageSize", "1000".to_string())],
            "products",
        )
        .await
}

/// Insert (or replace) a product input in an API data source.
///
/// The product appears in `list_products` after processing, which can take
/// several minutes.
pub async fn insert_product_input(
    client: &MerchantClient,
    account_id: &str,
    data_source: &str,
    input: &ProductInput,
) -> Result<ProductInput> {
    client
        .post(
            &format!("{}/{}/productInputs:insert", API, names::account(account_id)),
            &[("dataSource", data_source.to_string())],
            input,
        )
        .await
}

/// Update the fields of a product input named in `update_mask`.
///
/// Attribute paths use the `product_attributes.` prefix, custom attributes
/// `custom_attributes.`.
pub async fn update_product_input(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    data_source: &str,
    input: &ProductInput,
    update_mask: &[&str],
) -> Result<ProductInput> {
    client
        .patch(
            &format!("{}/{}", API, names::product_input(account_id, product_id)),
            &[
                ("updateMask", update_mask.join(",")),
                ("dataSource", data_source.to_string()),
            ],
            input,
        )
        .await
}

pub async fn delete_product_input(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    data_source: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", API, names::product_input(account_id, product_id)),
            &[("dataSource", data_source.to_string())],
        )
        .await
}
