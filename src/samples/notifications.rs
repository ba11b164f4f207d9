//! Notification subscriptions.

use crate::client::names;
use crate::error::Result;
use crate::models::notification::NotificationSubscription;
use crate::services::notifications;

use super::{Registry, SampleContext, print_json};

const PRODUCT_STATUS_CHANGE: &str = "PRODUCT_STATUS_CHANGE";

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "notifications.v1.create_notification_subscription",
        "Subscribe a callback URI to product status changes \
         (-p callback_uri, -p all_managed_accounts=true)",
        create_notification_subscription
    );
    sample!(
        registry,
        "notifications.v1.get_notification_subscription",
        "Get one subscription (-p subscription_id)",
        get_notification_subscription
    );
    sample!(
        registry,
        "notifications.v1.list_notification_subscriptions",
        "List the account's subscriptions",
        list_notification_subscriptions
    );
    sample!(
        registry,
        "notifications.v1.update_notification_subscription",
        "Point a subscription at a new callback URI for every managed account (-p subscription_id)",
        update_notification_subscription
    );
    sample!(
        registry,
        "notifications.v1.delete_notification_subscription",
        "Delete a subscription (-p subscription_id)",
        delete_notification_subscription
    );
    Ok(())
}

/// A subscription covers either one target account or every managed account.
fn subscription_for(ctx: &SampleContext, callback_uri: &str) -> NotificationSubscription {
    let all_managed = ctx.param_or("all_managed_accounts", "false") == "true";
    NotificationSubscription {
        registered_event: Some(PRODUCT_STATUS_CHANGE.to_string()),
        all_managed_accounts: all_managed.then_some(true),
        target_account: (!all_managed).then(|| names::account(ctx.account_id())),
        call_back_uri: Some(callback_uri.to_string()),
        ..Default::default()
    }
}

async fn create_notification_subscription(ctx: &SampleContext) -> Result<()> {
    let subscription =
        subscription_for(ctx, ctx.param_or("callback_uri", "https://www.samplesite.com"));
    println!("Sending create Notification Subscription request:");
    let created =
        notifications::create_subscription(&ctx.client, ctx.account_id(), &subscription).await?;
    print_json("Created Notification Subscription below:", &created)
}

async fn get_notification_subscription(ctx: &SampleContext) -> Result<()> {
    let subscription = notifications::get_subscription(
        &ctx.client,
        ctx.account_id(),
        ctx.param("subscription_id")?,
    )
    .await?;
    print_json("Retrieved Notification Subscription below:", &subscription)
}

async fn list_notification_subscriptions(ctx: &SampleContext) -> Result<()> {
    let all = notifications::list_subscriptions(&ctx.client, ctx.account_id()).await?;
    for subscription in &all {
        println!(
            "{} -> {}",
            subscription.name.as_deref().unwrap_or("<unnamed>"),
            subscription.call_back_uri.as_deref().unwrap_or("")
        );
    }
    println!("The following count of subscriptions were returned: {}", all.len());
    Ok(())
}

async fn update_notification_subscription(ctx: &SampleContext) -> Result<()> {
    let subscription_id = ctx.param("subscription_id")?;
    let subscription = NotificationSubscription {
        name: Some(format!(
            "{}/notificationsubscriptions/{}",
            names::account(ctx.account_id()),
            subscription_id
        )),
        registered_event: Some(PRODUCT_STATUS_CHANGE.to_string()),
        all_managed_accounts: Some(true),
        call_back_uri: Some(ctx.param_or("callback_uri", "https://an-updated-uri.com").to_string()),
        ..Default::default()
    };
    let updated = notifications::update_subscription(
        &ctx.client,
        &subscription,
        &["call_back_uri", "registered_event", "all_managed_accounts"],
    )
    .await?;
    print_json("Updated Notification Subscription below:", &updated)
}

async fn delete_notification_subscription(ctx: &SampleContext) -> Result<()> {
    notifications::delete_subscription(&ctx.client, ctx.account_id(), ctx.param("subscription_id")?)
        .await?;
    println!("Notification Subscription deleted successfully.");
    Ok(())
}
