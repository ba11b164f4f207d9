//! Issue Resolution API: rendered issues, actions and aggregate statuses.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::issue::{
    AggregateProductStatus, RenderIssuesRequestPayload, RenderIssuesResponse,
    TriggerActionPayload, TriggerActionResponse,
};

const API: &str = "/issueresolution/v1";

/// Localization of rendered content.
#[derive(Debug, Clone)]
pub struct Locale {
    /// e.g. `en_GB`
    pub language_code: String,
    /// IANA zone, e.g. `Europe/Zurich`
    pub time_zone: String,
}

impl Locale {
    pub fn new(language_code: &str, time_zone: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            time_zone: time_zone.to_string(),
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("languageCode", self.language_code.clone()),
            ("timeZone", self.time_zone.clone()),
        ]
    }
}

pub async fn render_account_issues(
    client: &MerchantClient,
    account_id: &str,
    locale: &Locale,
    payload: &RenderIssuesRequestPayload,
) -> Result<RenderIssuesResponse> {
    client
        .post(
            &format!("{}/{}:renderaccountissues", API, names::account(account_id)),
            &locale.query(),
            payload,
        )
        .await
}

pub async fn render_product_issues(
    client: &MerchantClient,
    account_id: &str,
    product_id: &str,
    locale: &Locale,
    payload: &RenderIssuesRequestPayload,
) -> Result<RenderIssuesResponse> {
    client
        .post(
            &format!(
                "{}/{}:renderproductissues",
                API,
                names::product(account_id, product_id)
            ),
            &locale.query(),
            payload,
        )
        .await
}

/// Start a built-in user input action with the merchant's answers.
pub async fn trigger_action(
    client: &MerchantClient,
    account_id: &str,
    language_code: &str,
    payload: &TriggerActionPayload,
) -> Result<TriggerActionResponse> {
    client
        .post(
            &format!("{}/{}:triggeraction", API, names::account(account_id)),
            &[("languageCode", language_code.to_string())],
            payload,
        )
        .await
}

/// Product counts and top issues per reporting context and country.
///
/// `filter` example: `country = "US" AND reportingContext = "SHOPPING_ADS"`.
pub async fn list_aggregate_product_statuses(
    client: &MerchantClient,
    account_id: &str,
    filter: Option<&str>,
) -> Result<Vec<AggregateProductStatus>> {
    let mut query = Vec::new();
    if let Some(filter) = filter {
        query.push(("filter", filter.to_string()));
    }
    client
        .list_all(
            &format!("{}/{}/aggregateProductStatuses", API, names::account(account_id)),
            &query,
            "aggregateProductStatuses",
        )
        .await
}
