//! Product studio (generative image and text tools) models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    /// Base64 image bytes, used instead of `image_uri`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_bytes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputImageConfig {
    pub return_image_uri: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Request body shared by the image operations; `config` depends on the operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub output_config: OutputImageConfig,
    pub input_image: InputImage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl ImageRequest {
    /// Request for the image at `uri`, asking for a URI back.
    pub fn for_uri(uri: &str) -> Self {
        Self {
            output_config: OutputImageConfig {
                return_image_uri: true,
            },
            input_image: InputImage {
                image_uri: Some(uri.to_string()),
                image_bytes: None,
            },
            config: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedImage {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub image_bytes: Option<String>,
    pub generation_time: Option<String>,
}

/// Product data the text suggestions are generated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    pub product_attributes: Map<String, Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_image: Vec<InputImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputSpec {
    /// `title` or `description`
    pub workflow_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSuggestionsRequest {
    pub product_info: ProductInfo,
    pub output_spec: OutputSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSuggestionsResponse {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub attributes: Map<String, Value>,
    pub metadata: Option<Value>,
}
