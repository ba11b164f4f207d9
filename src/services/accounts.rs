//! Accounts API: accounts, users, account issues, regions, account services
//! and relationships.
//!
//! Every function takes account ids (not resource names) and returns the
//! decoded resource, or `AppError::Api` if the service rejected the call.

use serde_json::{Map, Value, json};

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::account::{
    Account, AccountIssue, AddAccountService, CreateAndConfigureAccountRequest, Region, User,
};
use crate::models::settings::{
    AccountRelationship, AccountService, ProposeAccountServiceRequest,
};

const API: &str = "/accounts/v1";

pub async fn get_account(client: &MerchantClient, account_id: &str) -> Result<Account> {
    client
        .get(&format!("{}/{}", API, names::account(account_id)), &[])
        .await
}

/// List every account the caller can access, optionally filtered.
///
/// # Filter Examples
///
/// - `accountName = "*store*" AND relationship(providerId = 123)`
/// - `capabilities:CAN_UPLOAD_PRODUCTS`
pub async fn list_accounts(client: &MerchantClient, filter: Option<&str>) -> Result<Vec<Account>> {
    let mut query = Vec::new();
    if let Some(filter) = filter {
        query.push(("filter", filter.to_string()));
    }
    client
        .list_all(&format!("{}/accounts", API), &query, "accounts")
        .await
}

/// List the sub-accounts of an advanced account.
pub async fn list_sub_accounts(client: &MerchantClient, provider_id: &str) -> Result<Vec<Account>> {
    client
        .list_all(
            &format!("{}/{}:listSubaccounts", API, names::account(provider_id)),
            &[],
            "accounts",
        )
        .await
}

/// Delete an account. `force` also deletes it when it still has users or products.
pub async fn delete_account(client: &MerchantClient, account_id: &str, force: bool) -> Result<()> {
    client
        .delete(
            &format!("{}/{}", API, names::account(account_id)),
            &[("force", force.to_string())],
        )
        .await
}

/// Create a sub-account under `provider_id`, linked for account aggregation.
///
/// # Process
///
/// 1. Build the account with name, time zone and language
/// 2. Attach an `accountAggregation` service pointing at the provider
/// 3. POST to `accounts:createAndConfigure`
pub async fn create_sub_account(
    client: &MerchantClient,
    provider_id: &str,
    account: Account,
) -> Result<Account> {
    let request = CreateAndConfigureAccountRequest {
        account,
        service: vec![AddAccountService {
            provider: names::account(provider_id),
            account_aggregation: Some(Default::default()),
        }],
    };
    client
        .post(&format!("{}/accounts:createAndConfigure", API), &[], &request)
        .await
}

// Users

pub async fn list_users(client: &MerchantClient, account_id: &str) -> Result<Vec<User>> {
    client
        .list_all(
            &format!("{}/{}/users", API, names::account(account_id)),
            &[],
            "users",
        )
        .await
}

/// Get a user. `email` may be `me` for the caller.
pub async fn get_user(client: &MerchantClient, account_id: &str, email: &str) -> Result<User> {
    client
        .get(&format!("{}/{}", API, names::user(account_id, email)), &[])
        .await
}

pub async fn create_user(
    client: &MerchantClient,
    account_id: &str,
    email: &str,
    access_rights: &[&str],
) -> Result<User> {
    let user = User {
        access_rights: access_rights.iter().map(|r| r.to_string()).collect(),
        ..Default::default()
    };
    client
        .post(
            &format!("{}/{}/users", API, names::account(account_id)),
            &[("userId", email.to_string())],
            &user,
        )
        .await
}

/// Replace a user's access rights.
pub async fn update_user(
    client: &MerchantClient,
    account_id: &str,
    email: &str,
    access_rights: &[&str],
) -> Result<User> {
    let name = names::user(account_id, email);
    let user = User {
        name: Some(name.clone()),
        access_rights: access_rights.iter().map(|r| r.to_string()).collect(),
        ..Default::default()
    };
    client
        .patch(
            &format!("{}/{}", API, name),
            &[("updateMask", "access_rights".to_string())],
            &user,
        )
        .await
}

pub async fn delete_user(client: &MerchantClient, account_id: &str, email: &str) -> Result<()> {
    client
        .delete(&format!("{}/{}", API, names::user(account_id, email)), &[])
        .await
}

// Account issues

/// List the account-level issues, localized to `language_code` and `time_zone`.
pub async fn list_account_issues(
    client: &MerchantClient,
    account_id: &str,
    language_code: &str,
    time_zone: &str,
) -> Result<Vec<AccountIssue>> {
    client
        .list_all(
            &format!("{}/{}/issues", API, names::account(account_id)),
            &[
                ("languageCode", language_code.to_string()),
                ("timeZone", time_zone.to_string()),
            ],
            "accountIssues",
        )
        .await
}

// Regions

pub async fn list_regions(client: &MerchantClient, account_id: &str) -> Result<Vec<Region>> {
    client
        .list_all(
            &format!("{}/{}/regions", API, names::account(account_id)),
            &[],
            "regions",
        )
        .await
}

pub async fn create_region(
    client: &MerchantClient,
    account_id: &str,
    region_id: &str,
    region: &Region,
) -> Result<Region> {
    client
        .post(
            &format!("{}/{}/regions", API, names::account(account_id)),
            &[("regionId", region_id.to_string())],
            region,
        )
        .await
}

pub async fn delete_region(
    client: &MerchantClient,
    account_id: &str,
    region_id: &str,
) -> Result<()> {
    client
        .delete(
            &format!("{}/{}/regions/{}", API, names::account(account_id), region_id),
            &[],
        )
        .await
}

// Account services and relationships

fn account_service_path(account_id: &str, service_id: &str) -> String {
    format!("{}/{}/services/{}", API, names::account(account_id), service_id)
}

pub async fn list_account_services(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<AccountService>> {
    client
        .list_all(
            &format!("{}/{}/services", API, names::account(account_id)),
            &[],
            "accountServices",
        )
        .await
}

pub async fn get_account_service(
    client: &MerchantClient,
    account_id: &str,
    service_id: &str,
) -> Result<AccountService> {
    client
        .get(&account_service_path(account_id, service_id), &[])
        .await
}

/// Propose an account aggregation service from `provider_id`.
pub async fn propose_account_service(
    client: &MerchantClient,
    account_id: &str,
    provider_id: &str,
) -> Result<AccountService> {
    let request = ProposeAccountServiceRequest {
        provider: names::account(provider_id),
        account_service: AccountService {
            account_aggregation: Some(Map::new()),
            ..Default::default()
        },
    };
    client
        .post(
            &format!("{}/{}/services:propose", API, names::account(account_id)),
            &[],
            &request,
        )
        .await
}

/// Approve or reject a pending service (`verb` is the custom method).
async fn service_action(
    client: &MerchantClient,
    account_id: &str,
    service_id: &str,
    verb: &str,
) -> Result<Value> {
    client
        .post(
            &format!("{}:{}", account_service_path(account_id, service_id), verb),
            &[],
            &json!({}),
        )
        .await
}

pub async fn approve_account_service(
    client: &MerchantClient,
    account_id: &str,
    service_id: &str,
) -> Result<Value> {
    service_action(client, account_id, service_id, "approve").await
}

pub async fn reject_account_service(
    client: &MerchantClient,
    account_id: &str,
    service_id: &str,
) -> Result<Value> {
    service_action(client, account_id, service_id, "reject").await
}

/// Remove a service link; either side of the link may delete it.
pub async fn delete_account_service(
    client: &MerchantClient,
    account_id: &str,
    service_id: &str,
) -> Result<()> {
    client
        .delete(&account_service_path(account_id, service_id), &[])
        .await
}

pub async fn list_relationships(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<AccountRelationship>> {
    client
        .list_all(
            &format!("{}/{}/relationships", API, names::account(account_id)),
            &[],
            "accountRelationships",
        )
        .await
}

pub fn relationship_name(account_id: &str, relationship_id: &str) -> String {
    format!("{}/relationships/{}", names::account(account_id), relationship_id)
}

pub async fn get_relationship(
    client: &MerchantClient,
    account_id: &str,
    relationship_id: &str,
) -> Result<AccountRelationship> {
    client
        .get(
            &format!("{}/{}", API, relationship_name(account_id, relationship_id)),
            &[],
        )
        .await
}

/// Set the alias this account is known by to the provider.
pub async fn update_relationship_alias(
    client: &MerchantClient,
    account_id: &str,
    relationship_id: &str,
    alias: &str,
) -> Result<AccountRelationship> {
    let name = relationship_name(account_id, relationship_id);
    let body = AccountRelationship {
        name: Some(name.clone()),
        account_id_alias: Some(alias.to_string()),
        ..Default::default()
    };
    client
        .patch(
            &format!("{}/{}", API, name),
            &[("updateMask", "account_id_alias".to_string())],
            &body,
        )
        .await
}
