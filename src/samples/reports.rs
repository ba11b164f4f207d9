//! Reports, quota usage and LFP merchant state.

use crate::error::{AppError, Result};
use crate::services::{quota, reports};

use super::{Registry, SampleContext, print_json};

const PRODUCT_VIEW_QUERY: &str = "SELECT offer_id, id, price, gtin, item_issues, channel, \
     language_code, feed_label, title, brand, category_l1, product_type_l1, availability, \
     shipping_label, thumbnail_link, click_potential \
     FROM product_view";

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "reports.v1.search_report",
        "Run a product_view query and print every row (-p query, -p page_size)",
        search_report
    );
    sample!(
        registry,
        "quota.v1.list_quota_groups",
        "Quota usage and limits per method group",
        list_quota_groups
    );
    sample!(
        registry,
        "lfp.v1.get_lfp_merchant_state",
        "State of a merchant onboarded by an LFP provider (-p target_merchant_id)",
        get_lfp_merchant_state
    );
    Ok(())
}

async fn search_report(ctx: &SampleContext) -> Result<()> {
    let query = ctx.param_or("query", PRODUCT_VIEW_QUERY);
    let page_size: u32 = ctx.param_or("page_size", "1000").parse().map_err(|_| {
        AppError::InvalidRequest("page_size must be a positive integer".to_string())
    })?;

    println!("Sending search reports request.");
    let rows = reports::search_all(&ctx.client, ctx.account_id(), query, page_size).await?;
    println!("Received search reports response: ");
    for row in &rows {
        println!("{}", serde_json::to_string(row)?);
    }
    tracing::info!("Report returned {} row(s)", rows.len());
    Ok(())
}

async fn list_quota_groups(ctx: &SampleContext) -> Result<()> {
    let groups = quota::list_quota_groups(&ctx.client, ctx.account_id()).await?;
    for group in &groups {
        match group.usage_percent() {
            Some(percent) => println!("{}: {:.1}% of daily quota used", group.name, percent),
            None => println!("{}: no limit reported", group.name),
        }
    }
    println!("The following count of quota groups were returned: {}", groups.len());
    Ok(())
}

async fn get_lfp_merchant_state(ctx: &SampleContext) -> Result<()> {
    let state = quota::get_lfp_merchant_state(
        &ctx.client,
        ctx.account_id(),
        ctx.param("target_merchant_id")?,
    )
    .await?;
    print_json("Retrieved LfpMerchantState below", &state)
}
