//! Merchant reviews and product reviews.

use crate::batch::fan_out;
use crate::client::names;
use crate::error::Result;
use crate::models::review::{
    MerchantReview, MerchantReviewAttributes, ProductReview, ProductReviewAttributes, ReviewLink,
};
use crate::services::reviews;

use super::{Registry, SampleContext, print_json, random_id, timestamp};

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "reviews.v1.insert_merchant_reviews_async",
        "Insert five random merchant reviews concurrently (-p data_source_id)",
        insert_merchant_reviews_async
    );
    sample!(
        registry,
        "reviews.v1.list_merchant_reviews",
        "List merchant reviews",
        list_merchant_reviews
    );
    sample!(
        registry,
        "reviews.v1.get_merchant_review",
        "Get one merchant review (-p review_id)",
        get_merchant_review
    );
    sample!(
        registry,
        "reviews.v1.delete_merchant_review",
        "Delete a merchant review (-p review_id)",
        delete_merchant_review
    );
    sample!(
        registry,
        "reviews.v1.insert_product_reviews_async",
        "Insert five random product reviews concurrently (-p data_source_id)",
        insert_product_reviews_async
    );
    sample!(
        registry,
        "reviews.v1.list_product_reviews",
        "List product reviews",
        list_product_reviews
    );
    sample!(
        registry,
        "reviews.v1.get_product_review",
        "Get one product review (-p review_id)",
        get_product_review
    );
    sample!(
        registry,
        "reviews.v1.delete_product_review",
        "Delete a product review (-p review_id)",
        delete_product_review
    );
    Ok(())
}

fn sample_merchant_review(review_id: &str) -> Result<MerchantReview> {
    Ok(MerchantReview {
        merchant_review_id: review_id.to_string(),
        attributes: Some(MerchantReviewAttributes {
            title: Some("Great Merchant!".to_string()),
            content: Some("Would buy there again.".to_string()),
            min_rating: Some(1),
            max_rating: Some(5),
            rating: Some(4.0),
            review_time: Some(timestamp(1_731_165_684)?),
            review_language: Some("en-US".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

fn sample_product_review(review_id: &str) -> Result<ProductReview> {
    Ok(ProductReview {
        product_review_id: review_id.to_string(),
        attributes: Some(ProductReviewAttributes {
            title: Some("Would not recommend!".to_string()),
            content: Some("Not fantastic.".to_string()),
            min_rating: Some(1),
            max_rating: Some(5),
            rating: Some(2.0),
            review_time: Some(timestamp(123_456_789)?),
            product_links: vec!["exampleproducturl.com".to_string()],
            review_link: Some(ReviewLink {
                kind: Some("SINGLETON".to_string()),
                link: Some("examplereviewurl.com".to_string()),
            }),
            gtins: vec!["9780007350896".to_string(), "9780007350897".to_string()],
            ..Default::default()
        }),
        ..Default::default()
    })
}

async fn insert_merchant_reviews_async(ctx: &SampleContext) -> Result<()> {
    let data_source = names::data_source(ctx.account_id(), ctx.param("data_source_id")?);
    let batch = (0..5)
        .map(|_| sample_merchant_review(&random_id(8)))
        .collect::<Result<Vec<_>>>()?;

    let outcome = fan_out(batch.iter().map(|review| {
        reviews::insert_merchant_review(&ctx.client, ctx.account_id(), &data_source, review)
    }))
    .await;
    let inserted = outcome
        .report(|review| format!("Inserted merchant review {}", review.merchant_review_id))?;
    print_json("Inserted merchant reviews below:", &inserted)
}

async fn list_merchant_reviews(ctx: &SampleContext) -> Result<()> {
    let all = reviews::list_merchant_reviews(&ctx.client, ctx.account_id()).await?;
    for review in &all {
        println!("{}", review.name.as_deref().unwrap_or(&review.merchant_review_id));
    }
    println!("The following count of merchant reviews were returned: {}", all.len());
    Ok(())
}

async fn get_merchant_review(ctx: &SampleContext) -> Result<()> {
    let review =
        reviews::get_merchant_review(&ctx.client, ctx.account_id(), ctx.param("review_id")?).await?;
    print_json("Retrieved MerchantReview below", &review)
}

async fn delete_merchant_review(ctx: &SampleContext) -> Result<()> {
    reviews::delete_merchant_review(&ctx.client, ctx.account_id(), ctx.param("review_id")?).await?;
    println!("Merchant review deleted successfully.");
    Ok(())
}

async fn insert_product_reviews_async(ctx: &SampleContext) -> Result<()> {
    let data_source = names::data_source(ctx.account_id(), ctx.param("data_source_id")?);
    let batch = (0..5)
        .map(|_| sample_product_review(&random_id(8)))
        .collect::<Result<Vec<_>>>()?;

    let outcome = fan_out(batch.iter().map(|review| {
        reviews::insert_product_review(&ctx.client, ctx.account_id(), &data_source, review)
    }))
    .await;
    let inserted =
        outcome.report(|review| format!("Inserted product review {}", review.product_review_id))?;
    print_json("Inserted product reviews below:", &inserted)
}

async fn list_product_reviews(ctx: &SampleContext) -> Result<()> {
    let all = reviews::list_product_reviews(&ctx.client, ctx.account_id()).await?;
    for review in &all {
        println!("{}", review.name.as_deref().unwrap_or(&review.product_review_id));
    }
    println!("The following count of product reviews were returned: {}", all.len());
    Ok(())
}

async fn get_product_review(ctx: &SampleContext) -> Result<()> {
    let review =
        reviews::get_product_review(&ctx.client, ctx.account_id(), ctx.param("review_id")?).await?;
    print_json("Retrieved ProductReview below", &review)
}

async fn delete_product_review(ctx: &SampleContext) -> Result<()> {
    reviews::delete_product_review(&ctx.client, ctx.account_id(), ctx.param("review_id")?).await?;
    println!("Product review deleted successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merchant_review_ratings_travel_as_int64_strings() {
        let json = serde_json::to_value(sample_merchant_review("r1").unwrap()).unwrap();
        assert_eq!(json["merchantReviewId"], "r1");
        assert_eq!(json["attributes"]["minRating"], "1");
        assert_eq!(json["attributes"]["maxRating"], "5");
        assert_eq!(json["attributes"]["rating"], 4.0);
    }

    #[test]
    fn product_review_link_uses_type_key() {
        let json = serde_json::to_value(sample_product_review("r2").unwrap()).unwrap();
        assert_eq!(json["attributes"]["reviewLink"]["type"], "SINGLETON");
        assert_eq!(json["attributes"]["gtins"][1], "9780007350897");
    }
}
