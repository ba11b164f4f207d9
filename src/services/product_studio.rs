//! Product Studio API (alpha): generated images and text suggestions.

use serde_json::Value;

use crate::client::{MerchantClient, names};
use crate::error::Result;
use crate::models::product_studio::{
    GeneratedImage, ImageRequest, TextSuggestionsRequest, TextSuggestionsResponse,
};

const API: &str = "/productstudio/v1alpha";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOperation {
    GenerateBackground,
    RemoveBackground,
    Upscale,
}

impl ImageOperation {
    fn method(self) -> &'static str {
        match self {
            ImageOperation::GenerateBackground => "generateProductImageBackground",
            ImageOperation::RemoveBackground => "removeProductImageBackground",
            ImageOperation::Upscale => "upscaleProductImage",
        }
    }
}

/// Run an image operation; `request.config` carries the operation's settings.
pub async fn process_image(
    client: &MerchantClient,
    account_id: &str,
    operation: ImageOperation,
    request: &ImageRequest,
) -> Result<GeneratedImage> {
    let response: Value = client
        .post(
            &format!(
                "{}/{}/generatedImages:{}",
                API,
                names::account(account_id),
                operation.method()
            ),
            &[],
            request,
        )
        .await?;

    // Answers wrap the image in `generatedImage`
    let image = response.get("generatedImage").cloned().unwrap_or(response);
    Ok(serde_json::from_value(image)?)
}

pub async fn generate_text_suggestions(
    client: &MerchantClient,
    account_id: &str,
    request: &TextSuggestionsRequest,
) -> Result<TextSuggestionsResponse> {
    client
        .post(
            &format!(
                "{}/{}:generateProductTextSuggestions",
                API,
                names::account(account_id)
            ),
            &[],
            request,
        )
        .await
}
