mod backend;
mod client_utils;
mod errors;
mod gateway;
pub mod google;
pub mod json_extract;
pub mod mock;
mod opentelemetry;
pub mod prompts;
mod types;

pub use backend::{ContentPart, ContentRequest, GeneratedImage, GenerationBackend, ImageRequest};
pub use errors::*;
pub use gateway::{GenerationGateway, IMAGE_MODEL, TEXT_MODEL};
pub use json_extract::{extract_json, Extraction};
pub use types::*;
