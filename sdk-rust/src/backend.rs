use crate::GenerationResult;
use futures::future::BoxFuture;

/// A piece of a multimodal content request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    /// Base64 data with its MIME type, e.g. a JPEG photo.
    InlineData { mime_type: String, data: String },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// A text generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub model: String,
    pub parts: Vec<ContentPart>,
    /// E.g. `application/json` to ask for a JSON reply.
    pub response_mime_type: Option<String>,
}

impl ContentRequest {
    /// The concatenated text parts, handy for inspecting prompts.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text(text) => Some(text.as_str()),
                ContentPart::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An image synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub number_of_images: u32,
    pub output_mime_type: String,
}

/// One image returned by the backend. The bytes may be missing, e.g. when the
/// service filtered the result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes.
    pub image_bytes: Option<String>,
    pub mime_type: Option<String>,
}

/// The hosted multimodal service the gateway talks to.
pub trait GenerationBackend: Send + Sync {
    fn provider(&self) -> &'static str;

    /// Generate text and return it verbatim.
    fn generate_content(&self, request: ContentRequest) -> BoxFuture<'_, GenerationResult<String>>;

    fn generate_images(
        &self,
        request: ImageRequest,
    ) -> BoxFuture<'_, GenerationResult<Vec<GeneratedImage>>>;
}
