//! Quota and local feed partnership (LFP) state models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::int64;

/// One method covered by a quota group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodDetails {
    pub method: String,
    pub version: String,
    pub subapi: String,
    pub path: String,
}

/// Daily and per-minute call limits shared by a group of methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaGroup {
    pub name: String,
    #[serde(with = "int64::option")]
    pub quota_usage: Option<i64>,
    #[serde(with = "int64::option")]
    pub quota_limit: Option<i64>,
    #[serde(with = "int64::option")]
    pub quota_minute_limit: Option<i64>,
    pub method_details: Vec<MethodDetails>,
}

impl QuotaGroup {
    /// Share of the daily limit already used, in percent.
    pub fn usage_percent(&self) -> Option<f64> {
        match (self.quota_usage, self.quota_limit) {
            (Some(usage), Some(limit)) if limit > 0 => Some(usage as f64 * 100.0 / limit as f64),
            _ => None,
        }
    }
}

/// Onboarding state of a merchant as seen by its LFP provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LfpMerchantState {
    pub name: String,
    #[serde(with = "int64::option")]
    pub linked_gbps: Option<i64>,
    pub store_states: Vec<Value>,
    pub inventory_stats: Option<Value>,
    pub country_settings: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quota_group_reads_string_counters() {
        let group: QuotaGroup = serde_json::from_value(json!({
            "name": "accounts/1/quotas/products",
            "quotaUsage": "250",
            "quotaLimit": "1000",
            "methodDetails": [{
                "method": "products.get",
                "version": "v1",
                "subapi": "products",
                "path": "products/v1/accounts/{account}/products/{product}"
            }]
        }))
        .unwrap();
        assert_eq!(group.usage_percent(), Some(25.0));
        assert_eq!(group.method_details[0].method, "products.get");
        assert_eq!(group.quota_minute_limit, None);
    }
}
