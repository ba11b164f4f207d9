//! Product Studio: generated backgrounds, background removal, upscaling and
//! text suggestions.

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::models::product_studio::{
    ImageRequest, OutputSpec, ProductInfo, RgbColor, TextSuggestionsRequest,
};
use crate::services::product_studio::{self, ImageOperation};

use super::{Registry, SampleContext, print_json};

const JAR_IMAGE: &str =
    "https://services.google.com/fh/files/misc/abundance_intention_bath_salts.jpg";
const RING_IMAGE: &str = "https://services.google.com/fh/files/misc/ring_image_400_600.jpg";

pub(super) fn register(registry: &mut Registry) -> Result<()> {
    sample!(
        registry,
        "productstudio.v1alpha.generate_product_image_background",
        "Place a product photo on a generated background (-p image_uri)",
        generate_image_background
    );
    sample!(
        registry,
        "productstudio.v1alpha.remove_product_image_background",
        "Replace a product photo's background with plain green (-p image_uri)",
        remove_image_background
    );
    sample!(
        registry,
        "productstudio.v1alpha.upscale_product_image",
        "Upscale a product photo (-p image_uri)",
        upscale_image
    );
    sample!(
        registry,
        "productstudio.v1alpha.generate_product_text_suggestions",
        "Suggest a better title for a product (-p workflow_id, -p tone)",
        generate_text_suggestions
    );
    Ok(())
}

async fn run(ctx: &SampleContext, operation: ImageOperation, request: ImageRequest) -> Result<()> {
    println!("Sending {:?} request for account {}", operation, ctx.account_id());
    let image =
        product_studio::process_image(&ctx.client, ctx.account_id(), operation, &request).await?;
    print_json("Generated image below:", &image)
}

async fn generate_image_background(ctx: &SampleContext) -> Result<()> {
    let mut request = ImageRequest::for_uri(ctx.param_or("image_uri", JAR_IMAGE));
    request.config = Some(json!({
        "productDescription": "a jar",
        "backgroundDescription": "sitting on a cracked stone surface surrounded by a cherry \
            blossom tree and pink and white flowers in the background, high resolution, \
            product photography, strong shadows and lights, creative",
    }));
    run(ctx, ImageOperation::GenerateBackground, request).await
}

async fn remove_image_background(ctx: &SampleContext) -> Result<()> {
    let mut request = ImageRequest::for_uri(ctx.param_or("image_uri", JAR_IMAGE));
    let green = RgbColor {
        red: 0,
        green: 255,
        blue: 0,
    };
    request.config = Some(json!({ "backgroundColor": serde_json::to_value(green)? }));
    run(ctx, ImageOperation::RemoveBackground, request).await
}

async fn upscale_image(ctx: &SampleContext) -> Result<()> {
    let request = ImageRequest::for_uri(ctx.param_or("image_uri", RING_IMAGE));
    run(ctx, ImageOperation::Upscale, request).await
}

async fn generate_text_suggestions(ctx: &SampleContext) -> Result<()> {
    let mut attributes = Map::new();
    attributes.insert("title".to_string(), Value::from("Mens shirt"));
    attributes.insert(
        "description".to_string(),
        Value::from("A blue shirt for men in size S"),
    );

    let request = TextSuggestionsRequest {
        product_info: ProductInfo {
            product_attributes: attributes,
            product_image: Vec::new(),
        },
        output_spec: OutputSpec {
            workflow_id: ctx.param_or("workflow_id", "title").to_string(),
            tone: ctx.param("tone").ok().map(str::to_string),
        },
    };

    println!("Sending GenerateProductTextSuggestions request");
    let response =
        product_studio::generate_text_suggestions(&ctx.client, ctx.account_id(), &request).await?;
    print_json("Generated product text suggestions response below:", &response)
}
