//! An in-memory [`GenerationBackend`] for tests.

use crate::{
    ContentRequest, GeneratedImage, GenerationBackend, GenerationError, GenerationResult,
    ImageRequest,
};
use futures::future::{self, BoxFuture};
use std::{collections::VecDeque, sync::Mutex};

/// Result for a mocked `generate_content` call.
pub enum MockContentResult {
    Text(String),
    Error(GenerationError),
}

impl MockContentResult {
    /// Construct a result that yields the provided response text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: GenerationError) -> Self {
        Self::Error(error)
    }
}

impl From<&str> for MockContentResult {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for MockContentResult {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<GenerationError> for MockContentResult {
    fn from(error: GenerationError) -> Self {
        Self::Error(error)
    }
}

/// Result for a mocked `generate_images` call.
pub enum MockImageResult {
    Images(Vec<GeneratedImage>),
    Error(GenerationError),
}

impl MockImageResult {
    /// A single JPEG image with the given base64 bytes.
    pub fn jpeg(image_bytes: impl Into<String>) -> Self {
        Self::Images(vec![GeneratedImage {
            image_bytes: Some(image_bytes.into()),
            mime_type: Some("image/jpeg".to_string()),
        }])
    }

    pub fn error(error: GenerationError) -> Self {
        Self::Error(error)
    }
}

impl From<Vec<GeneratedImage>> for MockImageResult {
    fn from(images: Vec<GeneratedImage>) -> Self {
        Self::Images(images)
    }
}

impl From<GenerationError> for MockImageResult {
    fn from(error: GenerationError) -> Self {
        Self::Error(error)
    }
}

#[derive(Default)]
struct MockBackendState {
    mocked_content_results: VecDeque<MockContentResult>,
    mocked_image_results: VecDeque<MockImageResult>,
    tracked_content_requests: Vec<ContentRequest>,
    tracked_image_requests: Vec<ImageRequest>,
}

/// A mock backend that tracks requests and yields queued results in order.
pub struct MockBackend {
    provider: &'static str,
    state: Mutex<MockBackendState>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            provider: "mock",
            state: Mutex::new(MockBackendState::default()),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience to enqueue a single mocked content result.
    pub fn enqueue_content<R>(&self, result: R) -> &Self
    where
        R: Into<MockContentResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_content_results.push_back(result.into());
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked image result.
    pub fn enqueue_images<R>(&self, result: R) -> &Self
    where
        R: Into<MockImageResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_image_results.push_back(result.into());
        drop(state);
        self
    }

    /// Retrieve the tracked content requests accumulated so far.
    pub fn tracked_content_requests(&self) -> Vec<ContentRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_content_requests.clone()
    }

    /// Retrieve the tracked image requests accumulated so far.
    pub fn tracked_image_requests(&self) -> Vec<ImageRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_image_requests.clone()
    }

    fn next_content(&self, request: ContentRequest) -> GenerationResult<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_content_requests.push(request);

        match state.mocked_content_results.pop_front() {
            Some(MockContentResult::Text(text)) => Ok(text),
            Some(MockContentResult::Error(error)) => Err(error),
            None => Err(GenerationError::Invariant(
                self.provider,
                "no mocked content results available".into(),
            )),
        }
    }

    fn next_images(&self, request: ImageRequest) -> GenerationResult<Vec<GeneratedImage>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_image_requests.push(request);

        match state.mocked_image_results.pop_front() {
            Some(MockImageResult::Images(images)) => Ok(images),
            Some(MockImageResult::Error(error)) => Err(error),
            None => Err(GenerationError::Invariant(
                self.provider,
                "no mocked image results available".into(),
            )),
        }
    }
}

impl GenerationBackend for MockBackend {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn generate_content(&self, request: ContentRequest) -> BoxFuture<'_, GenerationResult<String>> {
        Box::pin(future::ready(self.next_content(request)))
    }

    fn generate_images(
        &self,
        request: ImageRequest,
    ) -> BoxFuture<'_, GenerationResult<Vec<GeneratedImage>>> {
        Box::pin(future::ready(self.next_images(request)))
    }
}
