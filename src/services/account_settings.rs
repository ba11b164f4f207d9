//! Per-account settings of the Accounts API.
//!
//! Settings are singleton sub-resources of an account
//! (`accounts/{account}/homepage`, `accounts/{account}/businessInfo`, ...)
//! read and patched with an update mask, plus a few custom methods
//! (claim homepage, enable program, accept terms of service).

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::client::{MerchantClient, names};
use crate::error::{AppError, Result};
use crate::models::settings::{
    CheckoutSettings, DeveloperRegistration, GbpAccount, Homepage, LfpProvider, Named,
    OmnichannelSetting, OnlineReturnPolicy, Program, ShippingSettings, TermsOfService,
    TermsOfServiceAgreementState, update_mask,
};

const API: &str = "/accounts/v1";

/// Singleton settings resource of an account, e.g. `homepage`.
pub fn setting_name(account_id: &str, setting: &str) -> String {
    format!("{}/{}", names::account(account_id), setting)
}

/// GET any settings resource by name.
pub async fn get_setting<T: DeserializeOwned>(client: &MerchantClient, name: &str) -> Result<T> {
    client.get(&format!("{}/{}", API, name), &[]).await
}

/// PATCH `resource`, touching only the fields in `mask`.
///
/// # Errors
///
/// Returns `InvalidRequest` if the resource has no name.
pub async fn update_setting<T>(client: &MerchantClient, resource: &T, mask: &[&str]) -> Result<T>
where
    T: Named + Serialize + DeserializeOwned,
{
    let name = resource.name().ok_or_else(|| {
        AppError::InvalidRequest("settings resource has no name".to_string())
    })?;
    client
        .patch(
            &format!("{}/{}", API, name),
            &[("updateMask", update_mask(mask))],
            resource,
        )
        .await
}

async fn custom_method<T: DeserializeOwned>(
    client: &MerchantClient,
    name: &str,
    verb: &str,
    body: &Value,
) -> Result<T> {
    client
        .post(&format!("{}/{}:{}", API, name, verb), &[], body)
        .await
}

// Homepage

pub async fn claim_homepage(client: &MerchantClient, account_id: &str) -> Result<Homepage> {
    let name = setting_name(account_id, "homepage");
    custom_method(client, &name, "claim", &json!({})).await
}

pub async fn unclaim_homepage(client: &MerchantClient, account_id: &str) -> Result<Homepage> {
    let name = setting_name(account_id, "homepage");
    custom_method(client, &name, "unclaim", &json!({})).await
}

// Programs

pub async fn list_programs(client: &MerchantClient, account_id: &str) -> Result<Vec<Program>> {
    client
        .list_all(
            &format!("{}/{}/programs", API, names::account(account_id)),
            &[],
            "programs",
        )
        .await
}

pub fn program_name(account_id: &str, program: &str) -> String {
    format!("{}/programs/{}", names::account(account_id), program)
}

pub async fn enable_program(
    client: &MerchantClient,
    account_id: &str,
    program: &str,
) -> Result<Program> {
    custom_method(client, &program_name(account_id, program), "enable", &json!({})).await
}

pub async fn disable_program(
    client: &MerchantClient,
    account_id: &str,
    program: &str,
) -> Result<Program> {
    custom_method(client, &program_name(account_id, program), "disable", &json!({})).await
}

// Shipping settings

/// Replace the account's shipping settings.
pub async fn insert_shipping_settings(
    client: &MerchantClient,
    account_id: &str,
    settings: &ShippingSettings,
) -> Result<ShippingSettings> {
    client
        .post(
            &format!("{}/{}/shippingSettings:insert", API, names::account(account_id)),
            &[],
            settings,
        )
        .await
}

// Terms of service

/// Latest terms of service version for a region and kind (`MERCHANT_CENTER`).
pub async fn retrieve_latest_terms_of_service(
    client: &MerchantClient,
    region_code: &str,
    kind: &str,
) -> Result<TermsOfService> {
    client
        .get(
            &format!("{}/termsOfService:retrieveLatest", API),
            &[
                ("regionCode", region_code.to_string()),
                ("kind", kind.to_string()),
            ],
        )
        .await
}

pub async fn get_terms_of_service(
    client: &MerchantClient,
    version: &str,
) -> Result<TermsOfService> {
    client
        .get(&format!("{}/termsOfService/{}", API, version), &[])
        .await
}

/// Accept a terms of service version on behalf of `account_id`.
pub async fn accept_terms_of_service(
    client: &MerchantClient,
    version: &str,
    account_id: &str,
    region_code: &str,
) -> Result<Value> {
    client
        .get(
            &format!("{}/termsOfService/{}:accept", API, version),
            &[
                ("account", names::account(account_id)),
                ("regionCode", region_code.to_string()),
            ],
        )
        .await
}

/// Agreement state for an identifier such as `MERCHANT_CENTER-US`.
pub async fn get_agreement_state(
    client: &MerchantClient,
    account_id: &str,
    identifier: &str,
) -> Result<TermsOfServiceAgreementState> {
    client
        .get(
            &format!(
                "{}/{}/termsOfServiceAgreementStates/{}",
                API,
                names::account(account_id),
                identifier
            ),
            &[],
        )
        .await
}

pub async fn retrieve_agreement_state_for_application(
    client: &MerchantClient,
    account_id: &str,
) -> Result<TermsOfServiceAgreementState> {
    client
        .get(
            &format!(
                "{}/{}/termsOfServiceAgreementStates:retrieveForApplication",
                API,
                names::account(account_id)
            ),
            &[],
        )
        .await
}

// Online return policies

pub fn return_policy_name(account_id: &str, policy_id: &str) -> String {
    format!("{}/onlineReturnPolicies/{}", names::account(account_id), policy_id)
}

pub async fn list_return_policies(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<OnlineReturnPolicy>> {
    client
        .list_all(
            &format!("{}/{}/onlineReturnPolicies", API, names::account(account_id)),
            &[],
            "onlineReturnPolicies",
        )
        .await
}

pub async fn get_return_policy(
    client: &MerchantClient,
    account_id: &str,
    policy_id: &str,
) -> Result<OnlineReturnPolicy> {
    get_setting(client, &return_policy_name(account_id, policy_id)).await
}

pub async fn create_return_policy(
    client: &MerchantClient,
    account_id: &str,
    policy: &OnlineReturnPolicy,
) -> Result<OnlineReturnPolicy> {
    client
        .post(
            &format!("{}/{}/onlineReturnPolicies", API, names::account(account_id)),
            &[],
            policy,
        )
        .await
}

pub async fn delete_return_policy(
    client: &MerchantClient,
    account_id: &str,
    policy_id: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", API, return_policy_name(account_id, policy_id)),
            &[],
        )
        .await
}

// Checkout settings

pub fn checkout_settings_name(account_id: &str) -> String {
    format!("{}/programs/checkout/checkoutSettings", names::account(account_id))
}

pub async fn create_checkout_settings(
    client: &MerchantClient,
    account_id: &str,
    settings: &CheckoutSettings,
) -> Result<CheckoutSettings> {
    client
        .post(
            &format!(
                "{}/{}/programs/checkout/checkoutSettings",
                API,
                names::account(account_id)
            ),
            &[],
            settings,
        )
        .await
}

pub async fn delete_checkout_settings(client: &MerchantClient, account_id: &str) -> Result<()> {
    client
        .delete(&format!("{}/{}", API, checkout_settings_name(account_id)), &[])
        .await
}

// Google Business Profile and local feed partnership

pub async fn list_gbp_accounts(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<GbpAccount>> {
    client
        .list_all(
            &format!("{}/{}/gbpAccounts", API, names::account(account_id)),
            &[],
            "gbpAccounts",
        )
        .await
}

pub async fn link_gbp_account(
    client: &MerchantClient,
    account_id: &str,
    gbp_email: &str,
) -> Result<Value> {
    client
        .post(
            &format!("{}/{}/gbpAccounts:linkGbpAccount", API, names::account(account_id)),
            &[],
            &json!({ "gbpEmail": gbp_email }),
        )
        .await
}

pub async fn find_lfp_providers(
    client: &MerchantClient,
    account_id: &str,
    region_code: &str,
) -> Result<Vec<LfpProvider>> {
    client
        .list_all(
            &format!(
                "{}/{}/omnichannelSettings/{}/lfpProviders:find",
                API,
                names::account(account_id),
                region_code
            ),
            &[],
            "lfpProviders",
        )
        .await
}

/// Link an LFP provider (`accounts/{a}/omnichannelSettings/{r}/lfpProviders/{p}`).
pub async fn link_lfp_provider(
    client: &MerchantClient,
    provider_name: &str,
    external_account_id: &str,
) -> Result<Value> {
    client
        .post(
            &format!("{}/{}:linkLfpProvider", API, provider_name),
            &[],
            &json!({ "externalAccountId": external_account_id }),
        )
        .await
}

// Omnichannel settings

pub fn omnichannel_setting_name(account_id: &str, region_code: &str) -> String {
    setting_name(account_id, &format!("omnichannelSettings/{}", region_code))
}

pub async fn list_omnichannel_settings(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<OmnichannelSetting>> {
    client
        .list_all(
            &format!("{}/{}/omnichannelSettings", API, names::account(account_id)),
            &[],
            "omnichannelSettings",
        )
        .await
}

pub async fn create_omnichannel_setting(
    client: &MerchantClient,
    account_id: &str,
    setting: &OmnichannelSetting,
) -> Result<OmnichannelSetting> {
    client
        .post(
            &format!("{}/{}/omnichannelSettings", API, names::account(account_id)),
            &[],
            setting,
        )
        .await
}

pub async fn request_inventory_verification(
    client: &MerchantClient,
    account_id: &str,
    region_code: &str,
) -> Result<Value> {
    custom_method(
        client,
        &omnichannel_setting_name(account_id, region_code),
        "requestInventoryVerification",
        &json!({}),
    )
    .await
}

// Developer registration

/// Register the calling GCP project with the account.
pub async fn register_gcp(
    client: &MerchantClient,
    account_id: &str,
    developer_email: &str,
) -> Result<DeveloperRegistration> {
    custom_method(
        client,
        &setting_name(account_id, "developerRegistration"),
        "registerGcp",
        &json!({ "developerEmail": developer_email }),
    )
    .await
}
