//! Merchant Center account models.
//!
//! This module defines:
//! - `Account`: a Merchant Center account (standalone, advanced or sub-account)
//! - `User`: a person with access rights on an account
//! - `AccountIssue`: an account-level problem reported by Merchant Center
//! - `Region`: a named set of postal codes or administrative areas
//! - `CreateAndConfigureAccountRequest`: body for creating a sub-account

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{TimeZone, int64};

/// A Merchant Center account.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "accounts/123",
///   "accountId": "123",
///   "accountName": "Demo Business",
///   "adultContent": false,
///   "timeZone": { "id": "America/New_York" },
///   "languageCode": "en-US"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// `accounts/{account}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub account_id: Option<i64>,

    pub account_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_content: Option<bool>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_account: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    /// BCP-47 code, e.g. `en-US`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Service link added while creating an account (`accountAggregation` for sub-accounts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountService {
    /// `accounts/{provider}`
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_aggregation: Option<Map<String, Value>>,
}

/// Body of `accounts:createAndConfigure`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAndConfigureAccountRequest {
    pub account: Account,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<AddAccountService>,
}

/// A user and their access rights on one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// `accounts/{account}/users/{email}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output only: `PENDING` or `VERIFIED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// `STANDARD`, `ADMIN`, `PERFORMANCE_REPORTING`, `READ_ONLY`, ...
    pub access_rights: Vec<String>,
}

/// Country-level impact of an account issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactedDestination {
    pub reporting_context: Option<String>,
    pub impacts: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountIssue {
    pub name: String,
    pub title: String,

    /// `CRITICAL`, `ERROR` or `SUGGESTION`
    pub severity: Option<String>,

    pub impacted_destinations: Vec<ImpactedDestination>,
    pub detail: Option<String>,
    pub documentation_uri: Option<String>,
}

/// A region used by shipping and regional inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Region {
    /// `accounts/{account}/regions/{region}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code_area: Option<PostalCodeArea>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geotarget_area: Option<GeoTargetArea>,
}

/// Inclusive postal code range; `end` is absent for a single code or prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalCodeRange {
    pub begin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Region defined by postal codes of one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalCodeArea {
    pub region_code: String,
    pub postal_codes: Vec<PostalCodeRange>,
}

/// Region defined by geotarget criteria ids (e.g. US states).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoTargetArea {
    #[serde(with = "int64::vec")]
    pub geotarget_criteria_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_account_request_shape() {
        let request = CreateAndConfigureAccountRequest {
            account: Account {
                account_name: "Demo Business".into(),
                adult_content: Some(false),
                time_zone: Some(TimeZone {
                    id: "America/New_York".into(),
                }),
                language_code: Some("en-US".into()),
                ..Default::default()
            },
            service: vec![AddAccountService {
                provider: "accounts/1".into(),
                account_aggregation: Some(Map::new()),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["account"]["accountName"], "Demo Business");
        assert_eq!(json["service"][0]["accountAggregation"], serde_json::json!({}));
        assert!(json["account"].get("accountId").is_none());
    }

    #[test]
    fn region_geotargets_are_int64_strings() {
        let region = Region {
            display_name: Some("New York State".into()),
            geotarget_area: Some(GeoTargetArea {
                geotarget_criteria_ids: vec![21167],
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["geotargetArea"]["geotargetCriteriaIds"][0], "21167");
    }
}
