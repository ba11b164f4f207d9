//! Data Sources API.

use serde_json::{Value, json};

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::datasource::{DataSource, FileUpload};

const API: &str = "/datasources/v1";

pub async fn list_data_sources(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<DataSource>> {
    client
        .list_all(
            &format!("{}/{}/dataSources", API, names::account(account_id)),
            &[],
            "dataSources",
        )
        .await
}

pub async fn get_data_source(
    client: &MerchantClient,
    account_id: &str,
    data_source_id: &str,
) -> Result<DataSource> {
    client
        .get(
            &format!("{}/{}", API, names::data_source(account_id, data_source_id)),
            &[],
        )
        .await
}

/// Create a data source; the answer carries the assigned `name`.
pub async fn create_data_source(
    client: &MerchantClient,
    account_id: &str,
    data_source: &DataSource,
) -> Result<DataSource> {
    client
        .post(
            &format!("{}/{}/dataSources", API, names::account(account_id)),
            &[],
            data_source,
        )
        .await
}

pub async fn update_data_source(
    client: &MerchantClient,
    data_source: &DataSource,
    update_mask: &[&str],
) -> Result<DataSource> {
    let name = data_source.name.as_deref().ok_or_else(|| {
        crate::error::AppError::InvalidRequest("data source has no name".to_string())
    })?;
    client
        .patch(
            &format!("{}/{}", API, name),
            &[("updateMask", update_mask.join(","))],
            data_source,
        )
        .await
}

pub async fn delete_data_source(
    client: &MerchantClient,
    account_id: &str,
    data_source_id: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", API, names::data_source(account_id, data_source_id)),
            &[],
        )
        .await
}

/// Fetch a file data source now instead of waiting for its schedule.
pub async fn fetch_data_source(
    client: &MerchantClient,
    account_id: &str,
    data_source_id: &str,
) -> Result<Value> {
    client
        .post(
            &format!("{}/{}:fetch", API, names::data_source(account_id, data_source_id)),
            &[],
            &json!({}),
        )
        .await
}

/// Processing result of the most recent file of a data source.
pub async fn get_latest_file_upload(
    client: &MerchantClient,
    account_id: &str,
    data_source_id: &str,
) -> Result<FileUpload> {
    client
        .get(
            &format!(
                "{}/{}/fileUploads/latest",
                API,
                names::data_source(account_id, data_source_id)
            ),
            &[],
        )
        .await
}
