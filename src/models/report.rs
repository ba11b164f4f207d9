//! Reporting models.
//!
//! Rows are keyed by the queried view (`productView`, `productPerformanceView`, ...)
//! and kept as raw JSON since their columns depend on the query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `reports:search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub results: Vec<ReportRow>,
    pub next_page_token: Option<String>,
}

/// One result row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRow(pub Map<String, Value>);

impl ReportRow {
    pub fn view(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// `productView.id` of the row, when the query selected it.
    pub fn product_view_id(&self) -> Option<&str> {
        self.view("productView")
            .and_then(|v| v.get("id"))
            .and_then(Value::as_str)
    }
}
