// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal-invariant enforcement for streaming calls.
//!
//! [`StreamGuard`] wraps a caller's [`StreamSink`] for the duration of one
//! call and tracks the call state machine:
//!
//! ```text
//! Idle -> Requesting -> Streaming -> Completed | Failed
//!                    \-----------> Completed | Failed      (one-shot vendors)
//! any non-terminal state -> Cancelled                      (silent)
//! ```
//!
//! The terminal methods consume the guard, so a second terminal call does
//! not compile. Cancellation is checked on every delivery.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::LingoError;
use crate::traits::StreamSink;

/// Lifecycle of a single streaming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Idle,
    Requesting,
    Streaming,
    Completed,
    Failed,
    Cancelled,
}

/// Guards a [`StreamSink`] for one call.
pub struct StreamGuard<'a> {
    sink: &'a mut dyn StreamSink,
    cancel: CancellationToken,
    state: CallState,
    chunks: usize,
}

impl<'a> StreamGuard<'a> {
    pub fn new(sink: &'a mut dyn StreamSink, cancel: &CancellationToken) -> Self {
        Self {
            sink,
            cancel: cancel.clone(),
            state: CallState::Idle,
            chunks: 0,
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    /// Number of chunks delivered so far.
    pub fn chunks_delivered(&self) -> usize {
        self.chunks
    }

    /// Returns true (and records it) once the caller has cancelled.
    pub fn is_cancelled(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            if self.state != CallState::Cancelled {
                debug!(chunks = self.chunks, "stream cancelled by caller");
            }
            self.state = CallState::Cancelled;
            return true;
        }
        false
    }

    /// Marks the vendor request as in flight.
    pub fn begin_request(&mut self) {
        if self.state == CallState::Idle {
            self.state = CallState::Requesting;
        }
    }

    /// Forwards a text fragment. Empty fragments are dropped.
    ///
    /// Returns false when the call has been cancelled and the adapter should
    /// stop consuming the response.
    pub fn chunk(&mut self, text: &str) -> bool {
        if self.is_cancelled() {
            return false;
        }
        if text.is_empty() {
            return true;
        }
        self.state = CallState::Streaming;
        self.chunks += 1;
        self.sink.on_chunk(text);
        true
    }

    /// Ends the call successfully unless it was cancelled.
    pub fn complete(mut self) -> CallState {
        if !self.is_cancelled() {
            self.state = CallState::Completed;
            self.sink.on_complete();
        }
        self.state
    }

    /// Ends the call with an error unless it was cancelled.
    pub fn fail(mut self, error: LingoError) -> CallState {
        if !self.is_cancelled() {
            debug!(kind = %error.kind(), "stream failed");
            self.state = CallState::Failed;
            self.sink.on_error(error);
        }
        self.state
    }

    /// Runs a one-shot vendor request and forwards its whole reply as one chunk.
    ///
    /// Returns `Ok(())` without delivering anything if the caller cancels
    /// before the reply arrives; the pending request is dropped.
    pub async fn one_shot<F>(&mut self, request: F) -> Result<(), LingoError>
    where
        F: Future<Output = Result<String, LingoError>>,
    {
        self.begin_request();
        let cancel = self.cancel.clone();
        if let Some(reply) = cancel.run_until_cancelled(request).await {
            self.chunk(&reply?);
        }
        Ok(())
    }

    /// Settles the call from an adapter result.
    pub fn finish(self, result: Result<(), LingoError>) -> CallState {
        match result {
            Ok(()) => self.complete(),
            Err(e) => self.fail(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Default)]
    struct Events(Vec<String>);

    impl StreamSink for Events {
        fn on_chunk(&mut self, text: &str) {
            self.0.push(format!("chunk:{text}"));
        }
        fn on_complete(&mut self) {
            self.0.push("complete".into());
        }
        fn on_error(&mut self, error: LingoError) {
            self.0.push(format!("error:{}", error.kind()));
        }
    }

    #[test]
    fn chunks_then_complete() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        guard.begin_request();
        assert_eq!(guard.state(), CallState::Requesting);
        assert!(guard.chunk("Hel"));
        assert!(guard.chunk(""));
        assert!(guard.chunk("lo"));
        assert_eq!(guard.chunks_delivered(), 2);
        assert_eq!(guard.complete(), CallState::Completed);
        assert_eq!(sink.0, vec!["chunk:Hel", "chunk:lo", "complete"]);
    }

    #[test]
    fn requesting_to_failed_without_streaming() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        guard.begin_request();
        let state = guard.fail(LingoError::Config("no key".into()));
        assert_eq!(state, CallState::Failed);
        assert_eq!(sink.0, vec![format!("error:{}", ErrorKind::ConfigurationError)]);
    }

    #[test]
    fn cancellation_silences_everything_after_it() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        guard.begin_request();
        assert!(guard.chunk("a"));
        cancel.cancel();
        assert!(!guard.chunk("b"));
        assert_eq!(guard.complete(), CallState::Cancelled);
        assert_eq!(sink.0, vec!["chunk:a"]);
    }

    #[tokio::test]
    async fn one_shot_delivers_single_chunk() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        let result = guard.one_shot(async { Ok("Bonjour".to_string()) }).await;
        assert_eq!(guard.finish(result), CallState::Completed);
        assert_eq!(sink.0, vec!["chunk:Bonjour", "complete"]);
    }

    #[tokio::test]
    async fn one_shot_failure_reports_once() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        let result = guard
            .one_shot(async { Err(LingoError::Schema("bad".into())) })
            .await;
        assert_eq!(guard.finish(result), CallState::Failed);
        assert_eq!(sink.0, vec![format!("error:{}", ErrorKind::SchemaError)]);
    }

    #[tokio::test]
    async fn one_shot_cancelled_while_pending_is_silent() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut guard = StreamGuard::new(&mut sink, &cancel);
        let result = guard
            .one_shot(async move {
                trigger.cancel();
                std::future::pending::<Result<String, LingoError>>().await
            })
            .await;
        assert!(result.is_ok());
        assert_eq!(guard.finish(result), CallState::Cancelled);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn cancelled_failure_is_not_reported() {
        let mut sink = Events::default();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let guard = StreamGuard::new(&mut sink, &cancel);
        let state = guard.finish(Err(LingoError::Internal("boom".into())));
        assert_eq!(state, CallState::Cancelled);
        assert!(sink.0.is_empty());
    }
}
