//! Quota and local feed partnership (LFP) state lookups.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::quota::{LfpMerchantState, QuotaGroup};

/// Quota groups of the account: usage and limits per group of methods.
pub async fn list_quota_groups(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<QuotaGroup>> {
    client
        .list_all(
            &format!("/quota/v1/{}/quotas", names::account(account_id)),
            &[],
            "quotaGroups",
        )
        .await
}

/// State of a merchant onboarded through an LFP provider account.
pub async fn get_lfp_merchant_state(
    client: &MerchantClient,
    lfp_account_id: &str,
    target_merchant_id: &str,
) -> Result<LfpMerchantState> {
    client
        .get(
            &format!(
                "/lfp/v1/{}/lfpMerchantStates/{}",
                names::account(lfp_account_id),
                target_merchant_id
            ),
            &[],
        )
        .await
}
