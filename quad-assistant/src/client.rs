//! HTTP client for the hosted generative-language API
//! (`models/{model}:generateContent`). One request per send; no streaming.

use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::error::{AssistantError, AssistantResult};

/// One conversation turn on the wire. Roles are `"user"` and `"model"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    pub role: String,
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePart {
    pub text: String,
}

impl WireContent {
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![WirePart {
                text: text.to_string(),
            }],
        }
    }

    pub fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![WirePart {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction<'a>>,
    contents: &'a [WireContent],
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<SystemPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<WireContent>,
}

pub struct GenerativeClient {
    client: reqwest::Client,
    config: AssistantConfig,
}

impl GenerativeClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send the full conversation and return the model's text reply.
    pub async fn generate(
        &self,
        system: Option<&str>,
        contents: &[WireContent],
    ) -> AssistantResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let request = GenerateRequest {
            system_instruction: system.map(|text| SystemInstruction {
                parts: vec![SystemPart { text }],
            }),
            contents,
        };

        tracing::debug!(model = %self.config.model, turns = contents.len(), "assistant request");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            tracing::warn!(%status, "assistant request rejected");
            return Err(AssistantError::Api(format!("{status}: {body}")));
        }

        let parsed: GenerateResponse = response.json().await?;
        let reply: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if reply.is_empty() {
            return Err(AssistantError::EmptyReply);
        }
        Ok(reply)
    }
}
