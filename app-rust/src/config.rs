use crate::{errors::ConfigError, locale_store::FileLocaleStore};
use fridge_chef_sdk::{
    google::{GoogleBackend, GoogleBackendOptions},
    GenerationGateway, IMAGE_MODEL, TEXT_MODEL,
};
use std::{path::PathBuf, sync::Arc};

pub const API_KEY_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "FRIDGE_CHEF_BASE_URL";
pub const TEXT_MODEL_VAR: &str = "FRIDGE_CHEF_TEXT_MODEL";
pub const IMAGE_MODEL_VAR: &str = "FRIDGE_CHEF_IMAGE_MODEL";
pub const LOCALE_FILE_VAR: &str = "FRIDGE_CHEF_LOCALE_FILE";

const DEFAULT_LOCALE_FILE: &str = "fridge-chef-language.json";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// May be empty; requests then fail with the credentials message.
    pub api_key: String,
    pub base_url: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub locale_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            tracing::error!("{API_KEY_VAR} is not set; generation requests will fail");
        }

        let base_url = get(BASE_URL_VAR);
        if let Some(url) = &base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    name: BASE_URL_VAR,
                    value: url.clone(),
                });
            }
        }

        Ok(Self {
            api_key,
            base_url,
            text_model: get(TEXT_MODEL_VAR).unwrap_or_else(|| TEXT_MODEL.to_string()),
            image_model: get(IMAGE_MODEL_VAR).unwrap_or_else(|| IMAGE_MODEL.to_string()),
            locale_file: get(LOCALE_FILE_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_LOCALE_FILE), PathBuf::from),
        })
    }

    #[must_use]
    pub fn gateway(&self) -> GenerationGateway {
        let backend = GoogleBackend::new(GoogleBackendOptions {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            ..Default::default()
        });

        GenerationGateway::new(Arc::new(backend))
            .with_text_model(&self.text_model)
            .with_image_model(&self.image_model)
    }

    #[must_use]
    pub fn locale_store(&self) -> FileLocaleStore {
        FileLocaleStore::new(&self.locale_file)
    }
}
