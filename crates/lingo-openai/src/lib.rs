// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible provider adapter.
//!
//! A single [`OpenAiCompatProvider`] serves OpenAI, Zhipu, DeepSeek,
//! SiliconFlow, Kimi, and Azure OpenAI. Translation streams tokens over SSE;
//! naming uses `response_format: json_object`.

pub mod client;
pub mod sse;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use lingo_config::SettingsSource;
use lingo_core::{
    CancellationToken, Capabilities, LazyClient, LingoError, NamingSuggestion, ProviderAdapter,
    ProviderType, StreamGuard, StreamSink, StreamingMode, parse_suggestions,
};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::sse::ChatEvent;
use crate::types::ChatRequest;

/// Adapter for every vendor speaking the chat-completions protocol.
///
/// The HTTP client is built from the current settings on first use and kept
/// until the adapter is dropped.
pub struct OpenAiCompatProvider {
    provider_type: ProviderType,
    capabilities: Capabilities,
    settings: Arc<dyn SettingsSource>,
    client: LazyClient<OpenAiClient>,
}

impl OpenAiCompatProvider {
    pub fn new(provider_type: ProviderType, settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            provider_type,
            capabilities: provider_type.capabilities(),
            settings,
            client: LazyClient::new(),
        }
    }

    /// Overrides the capability profile, e.g. for a gateway without SSE support.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    fn client(&self) -> Result<Arc<OpenAiClient>, LingoError> {
        self.client.get_or_try_init(|| {
            let config = self.settings.current().provider_config(self.provider_type);
            let client = OpenAiClient::from_config(&config)?;
            info!(
                provider = %self.provider_type,
                model = client.model(),
                "chat-completions client initialized"
            );
            Ok(client)
        })
    }

    async fn translate(
        &self,
        text: &str,
        guard: &mut StreamGuard<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), LingoError> {
        let client = self.client()?;
        let target_language = self.settings.current().assistant.target_language.clone();
        let streaming = self.capabilities.streaming == StreamingMode::Incremental;
        let request = client.request(
            lingo_prompt::translation_system_prompt(),
            lingo_prompt::translation_user_prompt(text, &target_language),
            streaming,
            false,
        );

        if streaming {
            guard.begin_request();
            stream_into(&client, &request, guard, cancel).await
        } else {
            guard.one_shot(client.complete_chat(&request)).await
        }
    }
}

/// Forwards SSE deltas until `[DONE]`, end of body, an error, or cancellation.
async fn stream_into(
    client: &OpenAiClient,
    request: &ChatRequest,
    guard: &mut StreamGuard<'_>,
    cancel: &CancellationToken,
) -> Result<(), LingoError> {
    let mut events = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Ok(()),
        events = client.stream_chat(request) => events?,
    };

    loop {
        let event = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(()),
            event = events.next() => event,
        };
        match event {
            Some(Ok(ChatEvent::Delta(text))) => {
                if !guard.chunk(&text) {
                    return Ok(());
                }
            }
            Some(Ok(ChatEvent::Done)) | None => return Ok(()),
            Some(Err(e)) => return Err(e),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatProvider {
    fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    async fn translate_stream(
        &self,
        text: &str,
        sink: &mut dyn StreamSink,
        cancel: &CancellationToken,
    ) {
        let mut guard = StreamGuard::new(sink, cancel);
        let result = self.translate(text, &mut guard, cancel).await;
        let chunks = guard.chunks_delivered();
        let state = guard.finish(result);
        debug!(provider = %self.provider_type, chunks, ?state, "translation stream finished");
    }

    async fn generate_naming_suggestions(
        &self,
        text: &str,
        file_extension: &str,
    ) -> Result<Vec<NamingSuggestion>, LingoError> {
        let client = self.client()?;
        let count = self.settings.current().assistant.naming_count;
        let style = lingo_prompt::style_for(file_extension);
        let request = client.request(
            lingo_prompt::naming_system_prompt(),
            lingo_prompt::naming_user_prompt(text, count, style),
            false,
            self.capabilities.json_mode,
        );

        let raw = client.complete_chat(&request).await?;
        let suggestions = parse_suggestions(&raw, count)?;
        debug!(
            provider = %self.provider_type,
            %style,
            returned = suggestions.len(),
            "naming suggestions generated"
        );
        Ok(suggestions)
    }

    fn is_configured(&self) -> bool {
        if self.client.is_initialized() {
            return true;
        }
        let config = self.settings.current().provider_config(self.provider_type);
        OpenAiClient::from_config(&config).is_ok()
    }
}
