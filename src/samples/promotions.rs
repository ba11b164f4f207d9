//! Promotions.

use crate::batch::fan_out;
use crate::client::names;
use crate::error::Result;
use crate::models::common::{CustomAttribute, Interval};
use crate::models::promotion::{Promotion, PromotionAttributes};
use crate::services::promotions;

use super::{Registry, SampleContext, print_json, random_id, timestamp};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "promotions.v1.insert_promotions_async",
        "Insert five random promotions concurrently (-p data_source_id)",
        insert_promotions_async
    );
    sample!(
        registry,
        "promotions.v1.list_promotions",
        "List the account's promotions",
        list_promotions
    );
    sample!(
        registry,
        "promotions.v1.get_promotion",
        "Get one promotion (-p promotion_id)",
        get_promotion
    );
    Ok(())
}

/// Ten percent off everything, for the French-speaking Swiss market.
///
/// Promotions are limited to six months; this one lasts one second.
fn sample_promotion(account_id: &str, promotion_id: &str) -> Result<Promotion> {
    Ok(Promotion {
        name: Some(format!(
            "{}/merchantPromotions/{}",
            names::account(account_id),
            promotion_id
        )),
        promotion_id: promotion_id.to_string(),
        content_language: "fr".to_string(),
        target_country: "CH".to_string(),
        redemption_channel: vec!["ONLINE".to_string()],
        attributes: Some(PromotionAttributes {
            product_applicability: Some("ALL_PRODUCTS".to_string()),
            offer_type: Some("GENERIC_CODE".to_string()),
            generic_redemption_code: Some("ABCD1234".to_string()),
            long_title: Some("My promotion".to_string()),
            coupon_value_type: Some("PERCENT_OFF".to_string()),
            promotion_destinations: vec!["SHOPPING_ADS".to_string()],
            percent_off: Some(10),
            promotion_effective_time_period: Some(Interval {
                start_time: timestamp(1_726_842_472)?,
                end_time: timestamp(1_726_842_473)?,
            }),
            ..Default::default()
        }),
        custom_attributes: vec![CustomAttribute::new(
            "another example name",
            "another example value",
        )],
        ..Default::default()
    })
}

async fn insert_promotions_async(ctx: &SampleContext) -> Result<()> {
    let data_source = names::data_source(ctx.account_id(), ctx.param("data_source_id")?);
    let batch = (0..5)
        .map(|_| sample_promotion(ctx.account_id(), &random_id(8)))
        .collect::<Result<Vec<_>>>()?;

    let outcome = fan_out(batch.into_iter().map(|promotion| {
        promotions::insert_promotion(&ctx.client, ctx.account_id(), &data_source, promotion)
    }))
    .await;
    let inserted =
        outcome.report(|promotion| format!("Inserted promotion {}", promotion.promotion_id))?;
    print_json("Inserted merchant promotions below:", &inserted)
}

async fn list_promotions(ctx: &SampleContext) -> Result<()> {
    let all = promotions::list_promotions(&ctx.client, ctx.account_id()).await?;
    for promotion in &all {
        println!(
            "{} ({} / {})",
            promotion.promotion_id, promotion.content_language, promotion.target_country
        );
    }
    println!("The following count of promotions were returned: {}", all.len());
    Ok(())
}

async fn get_promotion(ctx: &SampleContext) -> Result<()> {
    let promotion =
        promotions::get_promotion(&ctx.client, ctx.account_id(), ctx.param("promotion_id")?).await?;
    print_json("Retrieved Promotion below", &promotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_promotion_serializes_percent_off_as_string() {
        let promotion = sample_promotion("123", "abc").unwrap();
        let json = serde_json::to_value(&promotion).unwrap();
        assert_eq!(json["name"], "accounts/123/merchantPromotions/abc");
        assert_eq!(json["attributes"]["percentOff"], "10");
        assert_eq!(
            json["attributes"]["promotionEffectiveTimePeriod"]["startTime"],
            "2024-09-20T14:27:52Z"
        );
    }
}
