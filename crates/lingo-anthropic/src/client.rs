// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Anthropic Messages API.

use std::time::Duration;

use lingo_core::{LingoError, ProviderConfig, ProviderType, normalize_api_error};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiMessage, MessageRequest, MessageResponse};

/// Messages API version sent in `anthropic-version`.
pub const API_VERSION: &str = "2023-06-01";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    model: String,
    endpoint: String,
}

impl AnthropicClient {
    /// Builds a client from resolved Claude settings.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LingoError> {
        let api_key = config.require_api_key()?;
        let base_url = config.require_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| LingoError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LingoError::transport(format!("failed to build HTTP client: {e}"), e))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            endpoint: format!("{base_url}/v1/messages"),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Builds a single-turn request.
    pub fn request(&self, system: &str, user: String, max_tokens: u32) -> MessageRequest {
        MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: user,
            }],
            system: Some(system.to_string()),
            max_tokens,
        }
    }

    /// Sends a request and returns the concatenated text of the reply.
    pub async fn complete_message(&self, request: &MessageRequest) -> Result<String, LingoError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LingoError::transport(format!("HTTP request failed: {e}"), e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "messages response received");

        let body = response
            .text()
            .await
            .map_err(|e| LingoError::transport(format!("failed to read response body: {e}"), e))?;
        if !status.is_success() {
            return Err(normalize_api_error(
                ProviderType::Claude.display_name(),
                status.as_u16(),
                &body,
            ));
        }

        let message: MessageResponse =
            serde_json::from_str(&body).map_err(|e| LingoError::Transport {
                message: format!("failed to decode Claude response: {e}"),
                source: Some(Box::new(e)),
            })?;
        debug!(
            id = message.id.as_str(),
            stop_reason = message.stop_reason.as_deref().unwrap_or("none"),
            "messages response decoded"
        );
        Ok(message.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::ErrorKind;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> AnthropicClient {
        AnthropicClient::from_config(&ProviderConfig {
            provider: ProviderType::Claude,
            api_key: Some("test-api-key".into()),
            base_url: Some(base_url.into()),
            model: "claude-sonnet-4-20250514".into(),
            deployment_name: None,
        })
        .unwrap()
    }

    fn message_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        })
    }

    #[tokio::test]
    async fn sends_correct_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let req = client.request("sys", "hello".into(), 64);
        assert_eq!(client.complete_message(&req).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn bad_request_keeps_vendor_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "type": "error",
                "error": {"type": "invalid_request_error", "message": "Bad model"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .complete_message(&client.request("sys", "x".into(), 64))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportError);
        assert!(err.to_string().contains("invalid_request_error: Bad model"), "got: {err}");
    }

    #[tokio::test]
    async fn overloaded_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
                "error": {"type": "overloaded_error", "message": "Overloaded"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .complete_message(&client.request("sys", "x".into(), 64))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("529"));
    }

    #[tokio::test]
    async fn undecodable_success_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .complete_message(&client.request("sys", "x".into(), 64))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportError);
    }
}
