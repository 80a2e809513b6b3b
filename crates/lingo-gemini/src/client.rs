// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for Gemini `generateContent`.

use std::time::Duration;

use lingo_core::{LingoError, ProviderConfig, ProviderType, normalize_api_error};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LingoError> {
        let api_key = config.require_api_key()?;
        let base_url = config.require_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| LingoError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LingoError::transport(format!("failed to build HTTP client: {e}"), e))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            endpoint: format!("{base_url}/models/{}:generateContent", config.model),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn request(&self, system: &str, user: String, json: bool) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(user)],
            system_instruction: Some(Content::instruction(system)),
            generation_config: GenerationConfig::fast(json),
        }
    }

    /// Sends a request and returns the first candidate's text.
    ///
    /// A response without candidates (e.g. a blocked prompt) is a transport error.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String, LingoError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LingoError::transport(format!("HTTP request failed: {e}"), e))?;

        let status = response.status();
        debug!(status = status.as_u16(), model = self.model.as_str(), "generateContent response received");

        let body = response
            .text()
            .await
            .map_err(|e| LingoError::transport(format!("failed to read response body: {e}"), e))?;
        if !status.is_success() {
            return Err(normalize_api_error(
                ProviderType::Gemini.display_name(),
                status.as_u16(),
                &body,
            ));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| LingoError::Transport {
                message: format!("failed to decode Gemini response: {e}"),
                source: Some(Box::new(e)),
            })?;

        parsed.text().ok_or_else(|| {
            let reason = parsed
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            LingoError::Transport {
                message: format!("Gemini returned no content: {reason}"),
                source: None,
            }
        })
    }
}
