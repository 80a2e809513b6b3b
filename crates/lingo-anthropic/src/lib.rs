// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude provider adapter.
//!
//! Claude is a one-shot vendor here: translation sends one Messages request
//! and delivers the whole reply as a single chunk. Naming has no JSON mode,
//! so the JSON shape is requested by prompt alone.

pub mod client;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use lingo_config::SettingsSource;
use lingo_core::{
    CancellationToken, Capabilities, LazyClient, LingoError, NamingSuggestion, ProviderAdapter,
    ProviderType, StreamGuard, StreamSink, parse_suggestions,
};
use tracing::{debug, info};

use crate::client::AnthropicClient;

/// Output budget for translation replies.
pub const TRANSLATION_MAX_TOKENS: u32 = 8192;
/// Output budget for naming replies.
pub const NAMING_MAX_TOKENS: u32 = 4096;

pub struct AnthropicProvider {
    settings: Arc<dyn SettingsSource>,
    client: LazyClient<AnthropicClient>,
}

impl AnthropicProvider {
    pub fn new(settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            settings,
            client: LazyClient::new(),
        }
    }

    fn client(&self) -> Result<Arc<AnthropicClient>, LingoError> {
        self.client.get_or_try_init(|| {
            let config = self.settings.current().provider_config(ProviderType::Claude);
            let client = AnthropicClient::from_config(&config)?;
            info!(model = client.model(), "Anthropic client initialized");
            Ok(client)
        })
    }

    async fn translate(
        &self,
        text: &str,
        guard: &mut StreamGuard<'_>,
    ) -> Result<(), LingoError> {
        let client = self.client()?;
        let target_language = self.settings.current().assistant.target_language.clone();
        let request = client.request(
            lingo_prompt::translation_system_prompt(),
            lingo_prompt::translation_user_prompt(text, &target_language),
            TRANSLATION_MAX_TOKENS,
        );

        guard.one_shot(client.complete_message(&request)).await
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Claude
    }

    fn capabilities(&self) -> Capabilities {
        ProviderType::Claude.capabilities()
    }

    async fn translate_stream(
        &self,
        text: &str,
        sink: &mut dyn StreamSink,
        cancel: &CancellationToken,
    ) {
        let mut guard = StreamGuard::new(sink, cancel);
        let result = self.translate(text, &mut guard).await;
        let state = guard.finish(result);
        debug!(?state, "Claude translation finished");
    }

    async fn generate_naming_suggestions(
        &self,
        text: &str,
        file_extension: &str,
    ) -> Result<Vec<NamingSuggestion>, LingoError> {
        let client = self.client()?;
        let count = self.settings.current().assistant.naming_count;
        let request = client.request(
            lingo_prompt::naming_system_prompt(),
            lingo_prompt::naming_user_prompt(text, count, lingo_prompt::style_for(file_extension)),
            NAMING_MAX_TOKENS,
        );
        let raw = client.complete_message(&request).await?;
        parse_suggestions(&raw, count)
    }

    fn is_configured(&self) -> bool {
        self.client.is_initialized()
            || AnthropicClient::from_config(&self.settings.current().provider_config(ProviderType::Claude))
                .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::ErrorKind;
    use lingo_test_utils::sse::suggestions_json;
    use lingo_test_utils::{RecordingSink, SinkEvent, settings_for, unconfigured_settings};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "stop_reason": "end_turn"
        }))
    }

    fn provider(server: &MockServer) -> AnthropicProvider {
        AnthropicProvider::new(settings_for(ProviderType::Claude, "sk-ant", &server.uri()))
    }

    #[tokio::test]
    async fn translation_is_one_chunk_then_complete() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_partial_json(json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 8192,
                "system": lingo_prompt::translation_system_prompt()
            })))
            .respond_with(message("你好，世界"))
            .expect(1)
            .mount(&server)
            .await;

        let mut sink = RecordingSink::new();
        provider(&server)
            .translate_stream("Hello, world", &mut sink, &CancellationToken::new())
            .await;
        assert_eq!(
            sink.events,
            vec![SinkEvent::Chunk("你好，世界".into()), SinkEvent::Complete]
        );
    }

    #[tokio::test]
    async fn empty_reply_completes_without_chunk() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(message(""))
            .mount(&server)
            .await;

        let mut sink = RecordingSink::new();
        provider(&server)
            .translate_stream("x", &mut sink, &CancellationToken::new())
            .await;
        assert_eq!(sink.events, vec![SinkEvent::Complete]);
    }

    #[tokio::test]
    async fn missing_key_fails_once_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(message("x"))
            .expect(0)
            .mount(&server)
            .await;

        let provider = AnthropicProvider::new(unconfigured_settings(ProviderType::Claude, &server.uri()));
        assert!(!provider.is_configured());
        let mut sink = RecordingSink::new();
        provider
            .translate_stream("x", &mut sink, &CancellationToken::new())
            .await;
        assert_eq!(sink.error_kind(), Some(ErrorKind::ConfigurationError));
        assert!(sink.error_message().unwrap().contains("claude.api_key"));
        sink.assert_terminal_invariant();
    }

    #[tokio::test]
    async fn forbidden_is_configuration_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"type": "permission_error", "message": "key disabled"}
            })))
            .mount(&server)
            .await;

        let mut sink = RecordingSink::new();
        provider(&server)
            .translate_stream("x", &mut sink, &CancellationToken::new())
            .await;
        assert_eq!(sink.error_kind(), Some(ErrorKind::ConfigurationError));
    }

    #[tokio::test]
    async fn cancel_while_waiting_is_silent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(message("late").set_delay(std::time::Duration::from_secs(5)))
            .mount(&server)
            .await;

        let provider = provider(&server);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let mut sink = RecordingSink::new();
        tokio::time::timeout(
            std::time::Duration::from_secs(2),
            provider.translate_stream("x", &mut sink, &cancel),
        )
        .await
        .expect("cancellation should end the call promptly");
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn naming_prompt_only_and_truncated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"max_tokens": 4096})))
            .respond_with(message(&format!("```json\n{}\n```", suggestions_json(4))))
            .expect(1)
            .mount(&server)
            .await;

        let out = provider(&server)
            .generate_naming_suggestions("user list", "rs")
            .await
            .unwrap();
        assert_eq!(out.len(), 3);

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("response_format").is_none());
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .contains("snake_case")
        );
    }

    #[tokio::test]
    async fn naming_garbage_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(message("Sure! Here are some names: userList"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate_naming_suggestions("x", "ts")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn capabilities_are_one_shot_without_json_mode() {
        let provider = AnthropicProvider::new(Arc::new(lingo_config::LiveSettings::default()));
        let caps = provider.capabilities();
        assert_eq!(caps.streaming, lingo_core::StreamingMode::OneShot);
        assert!(!caps.json_mode);
        assert!(!provider.is_configured());
    }
}
