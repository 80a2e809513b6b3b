// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted provider adapter for deterministic registry and host tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use lingo_core::{
    CancellationToken, Capabilities, LingoError, NamingSuggestion, ProviderAdapter, ProviderType,
    StreamGuard, StreamSink, parse_suggestions,
};

/// What the next call to the mock produces.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Translation chunks delivered in order, then completion.
    Chunks(Vec<String>),
    /// Raw naming output handed to the suggestion parser.
    Raw(String),
    /// A transport failure with this message.
    Fail(String),
}

/// Replies are popped from a FIFO queue. An empty queue yields a single
/// `"mock translation"` chunk, or an empty-content parse error for naming.
pub struct MockProvider {
    provider_type: ProviderType,
    replies: Mutex<VecDeque<MockReply>>,
    configured: AtomicBool,
    naming_count: usize,
    chunk_delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(provider_type: ProviderType) -> Self {
        Self {
            provider_type,
            replies: Mutex::new(VecDeque::new()),
            configured: AtomicBool::new(true),
            naming_count: 3,
            chunk_delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_replies(provider_type: ProviderType, replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            ..Self::new(provider_type)
        }
    }

    /// Sleeps between chunks so tests can cancel mid-stream.
    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = Some(delay);
        self
    }

    pub fn with_naming_count(mut self, count: usize) -> Self {
        self.naming_count = count;
        self
    }

    pub fn set_configured(&self, configured: bool) {
        self.configured.store(configured, Ordering::SeqCst);
    }

    pub async fn push_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Number of translate and naming calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_reply(&self) -> Option<MockReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies.lock().await.pop_front()
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    fn capabilities(&self) -> Capabilities {
        self.provider_type.capabilities()
    }

    async fn translate_stream(
        &self,
        _text: &str,
        sink: &mut dyn StreamSink,
        cancel: &CancellationToken,
    ) {
        let mut guard = StreamGuard::new(sink, cancel);
        if !self.is_configured() {
            guard.fail(LingoError::missing_credentials(
                self.provider_type.display_name(),
                &self.provider_type.settings_key(),
            ));
            return;
        }
        guard.begin_request();

        let chunks = match self.next_reply().await {
            None => vec!["mock translation".to_string()],
            Some(MockReply::Chunks(chunks)) => chunks,
            Some(MockReply::Raw(text)) => vec![text],
            Some(MockReply::Fail(message)) => {
                guard.fail(LingoError::Transport {
                    message,
                    source: None,
                });
                return;
            }
        };

        for chunk in &chunks {
            if let Some(delay) = self.chunk_delay {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            if !guard.chunk(chunk) {
                return;
            }
        }
        guard.complete();
    }

    async fn generate_naming_suggestions(
        &self,
        _text: &str,
        _file_extension: &str,
    ) -> Result<Vec<NamingSuggestion>, LingoError> {
        if !self.is_configured() {
            return Err(LingoError::missing_credentials(
                self.provider_type.display_name(),
                &self.provider_type.settings_key(),
            ));
        }
        match self.next_reply().await {
            None => parse_suggestions("", self.naming_count),
            Some(MockReply::Raw(raw)) => parse_suggestions(&raw, self.naming_count),
            Some(MockReply::Chunks(chunks)) => parse_suggestions(&chunks.concat(), self.naming_count),
            Some(MockReply::Fail(message)) => Err(LingoError::Transport {
                message,
                source: None,
            }),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured.load(Ordering::SeqCst)
    }
}
