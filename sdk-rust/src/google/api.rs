#![allow(clippy::pedantic, clippy::style)]
use serde::{Deserialize, Serialize};

/// Config for `models.generate_content` parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentParameters {
    /// Content of the request.
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerateContentConfig>,
}

/// Contains the multi-part content of a message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// List of parts that constitute a single message. Each part may have
    /// a different IANA MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    /// Optional. The producer of the content. Must be either 'user' or
    /// 'model'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A datatype containing media content.
///
/// Exactly one field within a Part should be set, representing the specific
/// type of content being conveyed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Indicates if the part is thought from the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
    /// Optional. Inlined bytes data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
    /// Optional. Text part (can be code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Required. Raw bytes.
    /// @remarks Encoded as base64 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Required. The IANA standard MIME type of the source data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Optional model configuration parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    /// Output response mimetype of the generated candidate text.
    /// Supported mimetype:
    /// - `text/plain`: (default) Text output.
    /// - `application/json`: JSON response in the candidates.
    /// The model needs to be prompted to output the appropriate response type,
    /// otherwise the behavior is undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response message for PredictionService.GenerateContent.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response variations returned by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Returned when the prompt itself was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A response candidate generated from the model.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Contains the multi-part content of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason why the model stopped generating tokens.
    /// If empty, the model has not stopped generating the tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

/// Output only. The reason why the model stopped generating tokens.
///
/// Unrecognized reasons are collected under `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Token generation reached a natural stopping point or a configured stop
    /// sequence.
    #[serde(rename = "STOP")]
    Stop,
    /// Token generation reached the configured maximum output tokens.
    #[serde(rename = "MAX_TOKENS")]
    MaxTokens,
    /// Token generation stopped because the content potentially contains safety
    /// violations.
    #[serde(rename = "SAFETY")]
    Safety,
    /// The token generation stopped because of potential recitation.
    #[serde(rename = "RECITATION")]
    Recitation,
    /// All other reasons that stopped the token generation.
    #[serde(other, rename = "OTHER")]
    Other,
}

/// Body of `models.predict` for Imagen models.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub instances: Vec<ImagePromptInstance>,
    pub parameters: ImageGenerationParameters,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImagePromptInstance {
    /// Text prompt for the image. Imagen only accepts English prompts.
    pub prompt: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationParameters {
    /// Number of images to generate, 1 to 4.
    pub sample_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_options: Option<ImageOutputOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutputOptions {
    /// `image/png` or `image/jpeg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Response of `models.predict` for Imagen models.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    /// Missing entirely when every image was filtered.
    #[serde(default)]
    pub predictions: Vec<ImagePrediction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrediction {
    /// Base64 encoded image bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_base64_encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Set instead of the bytes when the image was filtered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rai_filtered_reason: Option<String>,
}
