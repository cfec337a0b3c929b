//! Recover JSON from model output that may be wrapped in markdown fences or
//! surrounded by prose.

use serde::de::DeserializeOwned;

/// Outcome of [`extract_json`].
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    Found(T),
    NotFound,
}

impl<T> Extraction<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

/// Ways of picking the JSON candidate out of a response, in evaluation
/// order. Arrays are tried before objects because some replies are bare
/// arrays of objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Whole,
    ArraySlice,
    ObjectSlice,
}

const STRATEGIES: [Strategy; 3] = [Strategy::Whole, Strategy::ArraySlice, Strategy::ObjectSlice];

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::ArraySlice => "array-slice",
            Self::ObjectSlice => "object-slice",
        }
    }

    fn candidate(self, text: &str) -> Option<&str> {
        match self {
            Self::Whole => Some(text),
            Self::ArraySlice => delimited(text, '[', ']'),
            Self::ObjectSlice => delimited(text, '{', '}'),
        }
    }
}

/// Substring from the first `open` to the last `close`, both inclusive.
fn delimited(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (start < end).then(|| &text[start..=end])
}

/// Remove a surrounding code fence, with or without a language tag.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    // The language tag is a single word directly after the opening fence.
    let tag_len = inner
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(inner.len());
    match inner[tag_len..].trim() {
        "" => trimmed,
        body => body,
    }
}

/// Parse `text` into `T`, tolerating fences and surrounding prose.
///
/// Never fails: when no candidate deserializes into `T` the result is
/// [`Extraction::NotFound`].
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Extraction<T> {
    let text = strip_code_fence(text);

    for strategy in STRATEGIES {
        let Some(candidate) = strategy.candidate(text) else {
            continue;
        };
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Extraction::Found(value),
            Err(error) => {
                tracing::debug!(strategy = strategy.name(), %error, "JSON candidate rejected");
            }
        }
    }

    tracing::warn!(response = text, "No JSON could be recovered from the response");
    Extraction::NotFound
}
