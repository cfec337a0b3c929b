use super::api::{
    Blob, Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse,
    ImageGenerationParameters, ImageOutputOptions, ImagePromptInstance, Part as GooglePart,
    PredictRequest, PredictResponse,
};
use crate::{
    client_utils, ContentPart, ContentRequest, GeneratedImage, GenerationBackend,
    GenerationError, GenerationResult, ImageRequest,
};
use futures::future::BoxFuture;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini (text) and Imagen (image) models served by the Generative Language
/// API.
pub struct GoogleBackend {
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleBackendOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleBackend {
    #[must_use]
    pub fn new(options: GoogleBackendOptions) -> Self {
        let GoogleBackendOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> GenerationResult<HeaderMap> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "API key is not configured".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                GenerationError::InvalidInput(format!(
                    "Invalid Google header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                GenerationError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        let api_key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            GenerationError::InvalidInput("API key contains invalid characters".to_string())
        })?;
        headers.insert(API_KEY_HEADER, api_key);

        Ok(headers)
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }
}

impl GenerationBackend for GoogleBackend {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn generate_content(&self, request: ContentRequest) -> BoxFuture<'_, GenerationResult<String>> {
        Box::pin(async move {
            let headers = self.request_headers()?;
            let url = self.model_url(&request.model, "generateContent");
            let params = convert_to_generate_content_parameters(request);

            let response: GenerateContentResponse =
                client_utils::send_json(&self.client, &url, &params, headers).await?;

            map_google_response_text(response)
        })
    }

    fn generate_images(
        &self,
        request: ImageRequest,
    ) -> BoxFuture<'_, GenerationResult<Vec<GeneratedImage>>> {
        Box::pin(async move {
            let headers = self.request_headers()?;
            let url = self.model_url(&request.model, "predict");
            let params = convert_to_predict_request(request);

            let response: PredictResponse =
                client_utils::send_json(&self.client, &url, &params, headers).await?;

            Ok(response
                .predictions
                .into_iter()
                .map(|prediction| {
                    if let Some(reason) = &prediction.rai_filtered_reason {
                        tracing::warn!(reason = %reason, "Generated image was filtered");
                    }
                    GeneratedImage {
                        image_bytes: prediction.bytes_base64_encoded,
                        mime_type: prediction.mime_type,
                    }
                })
                .collect())
        })
    }
}

fn convert_to_generate_content_parameters(request: ContentRequest) -> GenerateContentParameters {
    let parts = request
        .parts
        .into_iter()
        .map(|part| match part {
            ContentPart::Text(text) => GooglePart {
                text: Some(text),
                ..Default::default()
            },
            ContentPart::InlineData { mime_type, data } => GooglePart {
                inline_data: Some(Blob {
                    data: Some(data),
                    mime_type: Some(mime_type),
                }),
                ..Default::default()
            },
        })
        .collect();

    GenerateContentParameters {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: Some(parts),
        }],
        generation_config: request
            .response_mime_type
            .map(|response_mime_type| GenerateContentConfig {
                response_mime_type: Some(response_mime_type),
            }),
    }
}

fn convert_to_predict_request(request: ImageRequest) -> PredictRequest {
    PredictRequest {
        instances: vec![ImagePromptInstance {
            prompt: request.prompt,
        }],
        parameters: ImageGenerationParameters {
            sample_count: request.number_of_images,
            output_options: Some(ImageOutputOptions {
                mime_type: Some(request.output_mime_type),
            }),
        },
    }
}

/// Concatenate the text of the first candidate, skipping thoughts.
fn map_google_response_text(response: GenerateContentResponse) -> GenerationResult<String> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_ref())
    {
        return Err(GenerationError::Invariant(
            PROVIDER,
            format!("Prompt was blocked: {reason}"),
        ));
    }

    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| {
            GenerationError::Invariant(PROVIDER, "No candidate in response".to_string())
        })?;

    if let Some(finish_reason) = candidate.finish_reason {
        tracing::debug!(?finish_reason, "Gemini candidate finished");
    }

    let text = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.thought.unwrap_or(false))
        .filter_map(|part| part.text)
        .collect::<String>();

    Ok(text)
}
