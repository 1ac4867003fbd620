use crate::error::{AssistantError, AssistantResult};

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Credential and endpoint configuration for the assistant backend.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AssistantConfig {
    /// Load from the environment (a `.env` file is honored). A missing or
    /// empty `GEMINI_API_KEY` is the session-creation configuration error.
    pub fn from_env() -> AssistantResult<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AssistantError::MissingApiKey)?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    /// Explicit construction, used by tests and custom hosts.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }
}
