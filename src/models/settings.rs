//! Per-account settings models of the Accounts API.
//!
//! This module defines:
//! - singleton settings: `BusinessInfo`, `BusinessIdentity`, `Homepage`,
//!   `EmailPreferences`, `AutofeedSettings`, `AutomaticImprovements`,
//!   `CheckoutSettings`, `ShippingSettings`, `DeveloperRegistration`
//! - collections: `Program`, `OnlineReturnPolicy`, `OmnichannelSetting`,
//!   `GbpAccount`, `LfpProvider`
//! - terms of service: `TermsOfService`, `TermsOfServiceAgreementState`
//! - links between accounts: `AccountService`, `AccountRelationship`
//!
//! Resources the samples read, modify and write back keep unknown fields in a
//! flattened `extra` map so a PATCH never drops them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Price, int64};

/// A settings resource addressed by its `name`.
pub trait Named {
    fn name(&self) -> Option<&str>;
}

macro_rules! named {
    ($($ty:ty),* $(,)?) => {
        $(impl Named for $ty {
            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        })*
    };
}

named!(
    BusinessInfo,
    BusinessIdentity,
    Homepage,
    EmailPreferences,
    AutofeedSettings,
    AutomaticImprovements,
    CheckoutSettings,
    ShippingSettings,
    DeveloperRegistration,
    Program,
    OnlineReturnPolicy,
    OmnichannelSetting,
    GbpAccount,
    LfpProvider,
    TermsOfService,
    TermsOfServiceAgreementState,
    AccountService,
    AccountRelationship,
);

/// Comma separated update mask from field paths.
pub fn update_mask(paths: &[&str]) -> String {
    paths.join(",")
}

// Business info and identity

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Address and customer service contact of the business.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "accounts/123/businessInfo",
///   "address": {
///     "regionCode": "AR",
///     "postalCode": "C1107",
///     "addressLines": ["Av. Alicia Moreau de Justo 350"]
///   },
///   "phoneVerificationState": "PHONE_VERIFICATION_STATE_VERIFIED"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,

    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_verification_state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_service: Option<CustomerService>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One self-declared identity attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityAttribute {
    /// `SELF_IDENTIFIES_AS` or `DOES_NOT_SELF_IDENTIFY_AS`
    pub identity_declaration: String,
}

impl IdentityAttribute {
    pub fn declared() -> Self {
        Self {
            identity_declaration: "SELF_IDENTIFIES_AS".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions_consent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_owned: Option<IdentityAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub women_owned: Option<IdentityAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veteran_owned: Option<IdentityAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latino_owned: Option<IdentityAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_business: Option<IdentityAttribute>,
}

// Homepage, email preferences, autofeed

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Homepage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `OPTED_IN`, `OPTED_OUT` or `UNCONFIRMED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_and_tips: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutofeedSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub enable_products: bool,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
}

// Automatic improvements

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemUpdatesSettings {
    pub allow_price_updates: bool,
    pub allow_availability_updates: bool,
    pub allow_strict_availability_updates: bool,
    pub allow_condition_updates: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_item_updates_settings: Option<ItemUpdatesSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageImprovementsSettings {
    pub allow_automatic_image_improvements: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageImprovements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_image_improvements_settings: Option<ImageImprovementsSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingImprovements {
    pub allow_shipping_improvements: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomaticImprovements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_updates: Option<ItemUpdates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_improvements: Option<ImageImprovements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_improvements: Option<ShippingImprovements>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Checkout

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UriSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_uri_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_uri_template: Option<String>,
}

/// Checkout settings of the `checkout` program.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "accounts/123/programs/checkout/checkoutSettings",
///   "uriSettings": { "checkoutUriTemplate": "https://myshopify.com/cart/{id}:1" },
///   "eligibleDestinations": ["SHOPPING_ADS"],
///   "enrollmentState": "ENROLLED"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_settings: Option<UriSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eligible_destinations: Vec<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_state: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_state: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Shipping

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryTime {
    pub min_transit_days: u32,
    pub max_transit_days: u32,
    pub min_handling_days: u32,
    pub max_handling_days: u32,
}

/// A single shipping rate: percentage of the price, a flat rate or no shipping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingValue {
    /// Decimal string, e.g. `"5.4"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_rate: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_shipping: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateGroup {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applicable_shipping_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_value: Option<ShippingValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingService {
    pub service_name: String,
    pub active: bool,
    pub delivery_countries: Vec<String>,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<DeliveryTime>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rate_groups: Vec<RateGroup>,
    /// `DELIVERY`, `LOCAL_DELIVERY` or `COLLECTION_POINT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order_value: Option<Price>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The whole shipping configuration of an account; inserts replace it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub services: Vec<ShippingService>,
    /// Must echo the etag of the last read; empty on the first insert
    pub etag: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeveloperRegistration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub gcp_ids: Vec<String>,
}

// Programs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirement {
    pub title: Option<String>,
    pub documentation_uri: Option<String>,
    pub affected_region_codes: Vec<String>,
}

/// Participation of the account in a program such as `free-listings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_uri: Option<String>,
    /// `NOT_ELIGIBLE`, `ELIGIBLE` or `ENABLED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_region_codes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmet_requirements: Vec<Requirement>,
}

// Return policies

/// How long customers have to return items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnPolicyKind {
    /// `NUMBER_OF_DAYS_AFTER_DELIVERY`, `NO_RETURNS` or `LIFETIME_RETURNS`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub days: Option<i64>,
}

/// # JSON Example
///
/// ```json
/// {
///   "label": "US Return Policy",
///   "returnPolicyUri": "https://www.google.com/returnpolicy-sample",
///   "countries": ["US"],
///   "policy": { "type": "LIFETIME_RETURNS" },
///   "itemConditions": ["NEW"],
///   "returnMethods": ["IN_STORE"],
///   "processRefundDays": 10
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnlineReturnPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_policy_id: Option<String>,
    pub label: String,
    pub countries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<ReturnPolicyKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub return_methods: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub item_conditions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_policy_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_refund_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_exchange: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Terms of service

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermsOfService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub region_code: Option<String>,
    /// `MERCHANT_CENTER`
    pub kind: Option<String>,
    pub file_uri: Option<String>,
    pub external: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcceptedTerms {
    pub terms_of_service: Option<String>,
    pub accepted_by: Option<String>,
    pub valid_until: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredTerms {
    pub terms_of_service: Option<String>,
    pub tos_file_uri: Option<String>,
}

/// Whether an account has accepted the terms of one region and kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermsOfServiceAgreementState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub region_code: Option<String>,
    pub terms_of_service_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<AcceptedTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredTerms>,
}

// Google Business Profile, local feed partnership, omnichannel

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GbpAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub gbp_account_id: Option<String>,
    /// `USER_ACCOUNT` or `BUSINESS_ACCOUNT`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub gbp_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "int64::option")]
    pub listing_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LfpProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub region_code: Option<String>,
    pub display_name: Option<String>,
}

/// Landing page of an omnichannel experience (in stock, pickup, about).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewedUri {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_state: Option<String>,
    /// Output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Local inventory settings of one region.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "accounts/123/omnichannelSettings/US",
///   "regionCode": "US",
///   "lsfType": "GHLSF",
///   "inStock": {}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OmnichannelSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub region_code: String,
    /// `GHLSF`, `MHLSF_BASIC` or `MHLSF_FULL`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsf_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<ReviewedUri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<ReviewedUri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<ReviewedUri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_verification: Option<InventoryVerification>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Account services and relationships

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Handshake {
    /// `PENDING`, `ESTABLISHED` or `REJECTED`
    pub approval_state: Option<String>,
    pub actor: Option<String>,
}

/// A service one account provides to another (e.g. account aggregation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_aggregation: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `services:propose`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeAccountServiceRequest {
    pub provider: String,
    pub account_service: AccountService,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRelationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id_alias: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let parsed: CheckoutSettings = serde_json::from_value(json!({
            "name": "accounts/1/programs/checkout/checkoutSettings",
            "eligibleDestinations": ["SHOPPING_ADS"],
            "effectiveEnrollmentState": "ENROLLED"
        }))
        .unwrap();
        assert_eq!(parsed.eligible_destinations, vec!["SHOPPING_ADS"]);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap()["effectiveEnrollmentState"],
            "ENROLLED"
        );
    }

    #[test]
    fn return_policy_uses_type_key_and_string_days() {
        let policy = OnlineReturnPolicy {
            label: "EU".into(),
            countries: vec!["DE".into()],
            policy: Some(ReturnPolicyKind {
                kind: "NUMBER_OF_DAYS_AFTER_DELIVERY".into(),
                days: Some(30),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["policy"]["type"], "NUMBER_OF_DAYS_AFTER_DELIVERY");
        assert_eq!(json["policy"]["days"], "30");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn empty_in_stock_serializes_as_object() {
        let setting = OmnichannelSetting {
            region_code: "US".into(),
            lsf_type: Some("GHLSF".into()),
            in_stock: Some(ReviewedUri::default()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&setting).unwrap(),
            json!({ "regionCode": "US", "lsfType": "GHLSF", "inStock": {} })
        );
    }
}
