use fridge_chef_sdk::{
    google::{GoogleBackend, GoogleBackendOptions},
    GenerationGateway,
};
use std::sync::Arc;

pub fn get_gateway() -> GenerationGateway {
    let api_key = std::env::var("API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        eprintln!("API_KEY environment variable is not set. Requests will fail.");
    }

    let backend = GoogleBackend::new(GoogleBackendOptions {
        api_key,
        ..Default::default()
    });

    GenerationGateway::new(Arc::new(backend))
}
