// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter construction.

use std::sync::Arc;

use lingo_anthropic::AnthropicProvider;
use lingo_config::SettingsSource;
use lingo_core::{ProtocolFamily, ProviderAdapter, ProviderType};
use lingo_gemini::GeminiProvider;
use lingo_openai::OpenAiCompatProvider;

/// Creates adapters for the registry.
///
/// Creation must not fail or perform I/O: adapters resolve credentials and
/// build transport clients on first use.
pub trait ProviderFactory: Send + Sync {
    fn create(
        &self,
        provider: ProviderType,
        settings: Arc<dyn SettingsSource>,
    ) -> Arc<dyn ProviderAdapter>;
}

/// Dispatches on the provider's protocol family.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl ProviderFactory for DefaultFactory {
    fn create(
        &self,
        provider: ProviderType,
        settings: Arc<dyn SettingsSource>,
    ) -> Arc<dyn ProviderAdapter> {
        match provider.family() {
            ProtocolFamily::OpenAiCompatible => {
                Arc::new(OpenAiCompatProvider::new(provider, settings))
            }
            ProtocolFamily::Anthropic => Arc::new(AnthropicProvider::new(settings)),
            ProtocolFamily::Gemini => Arc::new(GeminiProvider::new(settings)),
        }
    }
}

impl<F> ProviderFactory for F
where
    F: Fn(ProviderType, Arc<dyn SettingsSource>) -> Arc<dyn ProviderAdapter> + Send + Sync,
{
    fn create(
        &self,
        provider: ProviderType,
        settings: Arc<dyn SettingsSource>,
    ) -> Arc<dyn ProviderAdapter> {
        self(provider, settings)
    }
}
