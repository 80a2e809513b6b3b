// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter.
//!
//! One-shot vendor: translation is a single `generateContent` call whose text
//! arrives as one chunk. Naming sets `responseMimeType: application/json`.
//! Thinking is disabled for both to keep latency low.

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

use crate::client::GeminiClient;

pub struct GeminiProvider {
    settings: Arc<dyn SettingsSource>,
    client: LazyClient<GeminiClient>,
}

impl GeminiProvider {
    pub fn new(settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            settings,
            client: LazyClient::new(),
        }
    }

    fn client(&self) -> Result<Arc<GeminiClient>, LingoError> {
        self.client.get_or_try_init(|| {
            let config = self.settings.current().provider_config(ProviderType::Gemini);
            let client = GeminiClient::from_config(&config)?;
            info!(model = client.model(), "Gemini client initialized");
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
            false,
        );

        guard.one_shot(client.generate(&request)).await
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Gemini
    }

    fn capabilities(&self) -> Capabilities {
        ProviderType::Gemini.capabilities()
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
        debug!(?state, "Gemini translation finished");
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
            true,
        );
        let raw = client.generate(&request).await?;
        parse_suggestions(&raw, count)
    }

    fn is_configured(&self) -> bool {
        self.client.is_initialized()
            || GeminiClient::from_config(&self.settings.current().provider_config(ProviderType::Gemini))
                .is_ok()
    }
}
