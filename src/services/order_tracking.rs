//! Order Tracking API.

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::order_tracking::OrderTrackingSignal;

const API: &str = "/ordertracking/v1";

/// Report how an order shipped.
///
/// `signal_id` is optional; the service assigns one when it is absent.
pub async fn create_order_tracking_signal(
    client: &MerchantClient,
    account_id: &str,
    signal_id: Option<&str>,
    signal: &OrderTrackingSignal,
) -> Result<OrderTrackingSignal> {
    let mut query = Vec::new();
    if let Some(id) = signal_id {
        query.push(("orderTrackingSignalId", id.to_string()));
    }
    client
        .post(
            &format!("{}/{}/ordertrackingsignals", API, names::account(account_id)),
            &query,
            signal,
        )
        .await
}
