// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SSE parser for chat-completions streaming responses.

use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures::stream::{Stream, StreamExt};
use lingo_core::LingoError;

use crate::types::ChatChunk;

/// Typed events from a chat-completions stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A non-empty text fragment from `choices[0].delta.content`.
    Delta(String),
    /// `data: [DONE]`.
    Done,
}

pub type ChatEventStream = Pin<Box<dyn Stream<Item = Result<ChatEvent, LingoError>> + Send>>;

/// Parses a streaming response body into [`ChatEvent`]s.
///
/// Frames without text (role announcements, finish markers) are skipped.
pub fn parse_sse_stream(response: reqwest::Response) -> ChatEventStream {
    let events = response.bytes_stream().eventsource();

    let mapped = events.filter_map(|result| async move {
        match result {
            Ok(event) => parse_frame(&event.data),
            Err(e) => Some(Err(LingoError::Transport {
                message: format!("SSE stream error: {e}"),
                source: None,
            })),
        }
    });

    Box::pin(mapped)
}

pub(crate) fn parse_frame(data: &str) -> Option<Result<ChatEvent, LingoError>> {
    let data = data.trim();
    if data == "[DONE]" {
        return Some(Ok(ChatEvent::Done));
    }
    if data.is_empty() {
        return None;
    }

    let chunk = match serde_json::from_str::<ChatChunk>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            return Some(Err(LingoError::Transport {
                message: format!("failed to decode stream frame: {e}"),
                source: Some(Box::new(e)),
            }));
        }
    };

    if let Some(error) = chunk.error {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .map_or_else(|| error.to_string(), String::from);
        return Some(Err(LingoError::Transport {
            message: format!("stream reported an error: {message}"),
            source: None,
        }));
    }

    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|text| !text.is_empty())
        .map(|text| Ok(ChatEvent::Delta(text)))
}
