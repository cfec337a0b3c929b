use thiserror::Error;

/// Failure reported by a [`GenerationBackend`](crate::GenerationBackend).
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected. (e.g. no candidate
    /// returned by Gemini)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

pub const CREDENTIALS_MESSAGE: &str =
    "The API key is missing or invalid. Please check the API_KEY configuration.";

/// User-facing failure of a gateway operation.
///
/// Each variant carries only a message that is safe to show. The lower level
/// [`GenerationError`] is logged where it happens and then dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    ImageAnalysis(String),
    #[error("{0}")]
    MenuGeneration(String),
    #[error("{0}")]
    RecipeGeneration(String),
    #[error("{0}")]
    ImageGeneration(String),
}

impl GatewayError {
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::ImageAnalysis(message)
            | Self::MenuGeneration(message)
            | Self::RecipeGeneration(message)
            | Self::ImageGeneration(message) => message,
        }
    }
}

/// Pick the surfaced message for a failed operation.
///
/// Anything mentioning the API key is reported as a credentials problem,
/// whichever operation hit it.
pub(crate) fn surfaced_message(cause: &str, generic: String) -> String {
    if cause.contains("API key") {
        CREDENTIALS_MESSAGE.to_string()
    } else {
        generic
    }
}
