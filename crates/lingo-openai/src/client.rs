// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for chat-completions endpoints.
//!
//! One [`OpenAiClient`] serves every vendor that speaks the OpenAI protocol;
//! only the endpoint, model, and auth headers differ.

use std::time::Duration;

use lingo_core::{LingoError, ProviderConfig, ProviderType, normalize_api_error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::sse::{self, ChatEventStream};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    provider: ProviderType,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    /// Builds a client from resolved provider settings.
    ///
    /// Fails with a configuration error when the API key or endpoint is
    /// missing or cannot be encoded as a header.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LingoError> {
        let api_key = config.require_api_key()?;
        let base_url = config.require_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| LingoError::Config(format!("invalid API key header value: {e}")))?,
        );
        if config.provider == ProviderType::Azure {
            headers.insert(
                "api-key",
                HeaderValue::from_str(api_key).map_err(|e| {
                    LingoError::Config(format!("invalid API key header value: {e}"))
                })?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LingoError::transport(format!("failed to build HTTP client: {e}"), e))?;

        Ok(Self {
            client,
            provider: config.provider,
            endpoint: format!("{base_url}/chat/completions"),
            model: config.wire_model().to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds a two-message request for this client's model.
    pub fn request(&self, system: &str, user: String, stream: bool, json_mode: bool) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            stream,
            response_format: json_mode.then(ResponseFormat::json_object),
        }
    }

    /// Sends a streaming request and returns the parsed event stream.
    pub async fn stream_chat(&self, request: &ChatRequest) -> Result<ChatEventStream, LingoError> {
        let mut req = request.clone();
        req.stream = true;
        let response = self.send(&req).await?;
        Ok(sse::parse_sse_stream(response))
    }

    /// Sends a non-streaming request and returns the first choice's text.
    ///
    /// A `null` content is returned as an empty string.
    pub async fn complete_chat(&self, request: &ChatRequest) -> Result<String, LingoError> {
        let mut req = request.clone();
        req.stream = false;
        let response = self.send(&req).await?;

        let body = response
            .text()
            .await
            .map_err(|e| LingoError::transport(format!("failed to read response body: {e}"), e))?;
        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| LingoError::Transport {
            message: format!("failed to decode {} response: {e}", self.provider.display_name()),
            source: Some(Box::new(e)),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| LingoError::Transport {
                message: format!("{} response contained no choices", self.provider.display_name()),
                source: None,
            })
    }

    async fn send(&self, request: &ChatRequest) -> Result<reqwest::Response, LingoError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LingoError::transport(format!("HTTP request failed: {e}"), e))?;

        let status = response.status();
        debug!(
            provider = %self.provider,
            status = status.as_u16(),
            stream = request.stream,
            "chat response received"
        );
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(normalize_api_error(
            self.provider.display_name(),
            status.as_u16(),
            &body,
        ))
    }
}
