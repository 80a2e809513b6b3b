// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A [`StreamSink`] that records callbacks for assertions.

use lingo_core::{ErrorKind, LingoError, StreamSink};

/// One recorded callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Chunk(String),
    Complete,
    Error { kind: ErrorKind, message: String },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of every chunk received.
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Chunk(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn chunk_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Chunk(_)))
            .count()
    }

    /// Number of `on_complete` plus `on_error` calls.
    pub fn terminal_count(&self) -> usize {
        self.events.len() - self.chunk_count()
    }

    pub fn completed(&self) -> bool {
        self.events.last() == Some(&SinkEvent::Complete)
    }

    /// Kind of the terminal error, if the call failed.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.events.iter().find_map(|e| match e {
            SinkEvent::Error { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    pub fn error_message(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            SinkEvent::Error { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Asserts zero or more chunks followed by exactly one terminal event.
    pub fn assert_terminal_invariant(&self) {
        assert_eq!(self.terminal_count(), 1, "events: {:?}", self.events);
        assert!(
            !matches!(self.events.last(), Some(SinkEvent::Chunk(_)) | None),
            "terminal event must come last: {:?}",
            self.events
        );
    }
}

impl StreamSink for RecordingSink {
    fn on_chunk(&mut self, text: &str) {
        self.events.push(SinkEvent::Chunk(text.to_string()));
    }

    fn on_complete(&mut self) {
        self.events.push(SinkEvent::Complete);
    }

    fn on_error(&mut self, error: LingoError) {
        self.events.push(SinkEvent::Error {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}
