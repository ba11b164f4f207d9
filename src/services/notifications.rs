//! Notifications API: push subscriptions.

use crate::client::{MerchantClient, names};
use crate::error::{AppError, Result};
use crate::models::notification::NotificationSubscription;

const API: &str = "/notifications/v1";

fn collection(account_id: &str) -> String {
    format!("{}/{}/notificationsubscriptions", API, names::account(account_id))
}

pub async fn create_subscription(
    client: &MerchantClient,
    account_id: &str,
    subscription: &NotificationSubscription,
) -> Result<NotificationSubscription> {
    client.post(&collection(account_id), &[], subscription).await
}

pub async fn get_subscription(
    client: &MerchantClient,
    account_id: &str,
    subscription_id: &str,
) -> Result<NotificationSubscription> {
    client
        .get(&format!("{}/{}", collection(account_id), subscription_id), &[])
        .await
}

pub async fn list_subscriptions(
    client: &MerchantClient,
    account_id: &str,
) -> Result<Vec<NotificationSubscription>> {
    client
        .list_all(&collection(account_id), &[], "notificationSubscriptions")
        .await
}

pub async fn update_subscription(
    client: &MerchantClient,
    subscription: &NotificationSubscription,
    update_mask: &[&str],
) -> Result<NotificationSubscription> {
    let name = subscription.name.as_deref().ok_or_else(|| {
        AppError::InvalidRequest("subscription has no name".to_string())
    })?;
    client
        .patch(
            &format!("{}/{}", API, name),
            &[("updateMask", update_mask.join(","))],
            subscription,
        )
        .await
}

pub async fn delete_subscription(
    client: &MerchantClient,
    account_id: &str,
    subscription_id: &str,
) -> Result<()> {
    client
        .delete(&format!("{}/{}", collection(account_id), subscription_id), &[])
        .await
}
