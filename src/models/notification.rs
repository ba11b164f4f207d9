//! Notification subscription models.

use serde::{Deserialize, Serialize};

/// Push subscription for account or product events.
///
/// Either `all_managed_accounts` or `target_account` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSubscription {
    /// `accounts/{account}/notificationsubscriptions/{subscription}`, output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `PRODUCT_STATUS_CHANGE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_event: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_managed_accounts: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_account: Option<String>,

    /// HTTPS endpoint receiving the notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_back_uri: Option<String>,
}
