// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The contract every vendor adapter implements.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::LingoError;
use crate::traits::sink::StreamSink;
use crate::types::{Capabilities, NamingSuggestion, ProviderType};

/// A vendor-backed translation and naming provider.
///
/// Implementations hold no mutable state beyond a lazily built transport
/// client, so one instance can serve concurrent calls.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Which backend this adapter talks to.
    fn provider_type(&self) -> ProviderType;

    /// Streaming and structured-output capabilities.
    fn capabilities(&self) -> Capabilities;

    /// Translates `text` into the configured target language.
    ///
    /// Delivers chunks then exactly one `on_complete`, or exactly one
    /// `on_error`. Once `cancel` fires no further callback is made.
    async fn translate_stream(
        &self,
        text: &str,
        sink: &mut dyn StreamSink,
        cancel: &CancellationToken,
    );

    /// Generates identifier suggestions for a natural-language description.
    ///
    /// `file_extension` selects the naming style and may be empty or unknown.
    async fn generate_naming_suggestions(
        &self,
        text: &str,
        file_extension: &str,
    ) -> Result<Vec<NamingSuggestion>, LingoError>;

    /// True when credentials are present and a transport client can be built.
    /// Never fails and never mutates the adapter.
    fn is_configured(&self) -> bool;
}
