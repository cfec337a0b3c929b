//! Remembering the chosen display language between sessions.

use crate::i18n::{translate, TranslationKey};
use fridge_chef_sdk::Locale;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Where the language choice is kept.
///
/// Storage problems are never fatal: `load` returns `None` and `save` logs.
pub trait LocaleStore: Send + Sync {
    fn load(&self) -> Option<Locale>;
    fn save(&self, locale: Locale);
}

#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    locale: Mutex<Option<Locale>>,
}

impl MemoryLocaleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale: Mutex::new(Some(locale)),
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Option<Locale> {
        self.locale.lock().ok().and_then(|locale| *locale)
    }

    fn save(&self, locale: Locale) {
        if let Ok(mut stored) = self.locale.lock() {
            *stored = Some(locale);
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLanguage {
    language: String,
}

/// Keeps the choice in a small JSON file, `{"language":"th"}`.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Option<Locale> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "Could not read saved language");
                return None;
            }
        };

        let stored: StoredLanguage = match serde_json::from_str(&contents) {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "Ignoring malformed language file");
                return None;
            }
        };

        let locale = Locale::from_code(&stored.language);
        if locale.is_none() {
            tracing::warn!(language = %stored.language, "Ignoring unsupported saved language");
        }
        locale
    }

    fn save(&self, locale: Locale) {
        let stored = StoredLanguage {
            language: locale.code().to_string(),
        };
        let result = serde_json::to_string(&stored)
            .map_err(std::io::Error::other)
            .and_then(|json| {
                if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&self.path, json)
            });
        if let Err(error) = result {
            tracing::warn!(path = %self.path.display(), %error, "Could not save language");
        }
    }
}

/// The active display language, restored from and saved to a store.
pub struct LanguageSettings<S> {
    store: S,
    locale: Locale,
}

impl<S: LocaleStore> LanguageSettings<S> {
    /// Start with the saved language, or English when none is saved.
    pub fn new(store: S) -> Self {
        let locale = store.load().unwrap_or_default();
        Self { store, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.locale = locale;
        self.store.save(locale);
    }

    /// Translate in the active language.
    pub fn t(&self, key: TranslationKey, params: &[(&str, &str)]) -> String {
        translate(self.locale, key, params)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
